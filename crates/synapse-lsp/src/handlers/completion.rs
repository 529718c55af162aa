use synapse_core::{find_trigger_span, suggest_for_trigger, FilePath, Suggestion};
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::Client;

use crate::conversion;
use crate::state::GlobalState;

/// Handle "textDocument/completion" request
pub async fn handle_completion(
    _client: &Client,
    state: &GlobalState,
    params: CompletionParams,
) -> Result<Option<CompletionResponse>> {
    let uri = params.text_document_position.text_document.uri;
    let position = params.text_document_position.position;

    let document_text = {
        let cache = state.document_cache.read().await;
        cache.get(&uri).cloned()
    };
    let Some(document_text) = document_text else {
        return Ok(None);
    };
    let Some(current_line) = document_text.lines().nth(position.line as usize) else {
        return Ok(None);
    };

    let settings = { state.settings.read().await.clone() };

    let cursor = conversion::utf16_to_char_offset(current_line, position.character as usize);
    let Some(span) = find_trigger_span(current_line, cursor, &settings.trigger_symbol) else {
        return Ok(None);
    };

    let vault = state.vault.read().await;
    let Some(vault) = &*vault else {
        return Ok(None);
    };

    let current_note = conversion::vault_relative(vault.root(), &uri).unwrap_or_default();
    let current_file = FilePath::parse(&current_note);

    let suggestions = suggest_for_trigger(
        &span.query,
        &vault.index,
        &settings,
        current_file.folder_path(),
        &current_note,
    );

    let range = conversion::span_to_range(current_line, position.line, &span);
    let original_text: String = current_line
        .chars()
        .skip(span.start)
        .take(span.end - span.start)
        .collect();

    let items = suggestions
        .iter()
        .enumerate()
        .map(|(i, suggestion)| {
            let command = match suggestion {
                Suggestion::NewNote(_) => Some(Command {
                    title: "Create note".to_string(),
                    command: "synapse/createNote".to_string(),
                    arguments: Some(vec![serde_json::json!({
                        "uri": uri.to_string(),
                        "target": suggestion.text_for_line_update(),
                    })]),
                }),
                _ => None,
            };
            conversion::completion_item(
                i,
                suggestion,
                range,
                &original_text,
                &settings.trigger_symbol,
                command,
            )
        })
        .collect();

    Ok(Some(CompletionResponse::Array(items)))
}
