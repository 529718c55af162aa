use synapse_core::suggestion::NoteSuggestion;
use synapse_core::{plan_note_creation, suggest_paths, FilePath, FolderPath, VaultSource};
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::Client;
use url::Url;

use crate::conversion;
use crate::protocol::{CreateNoteParams, SuggestPathsParams, SuggestPathsResult};
use crate::state::{GlobalState, VaultState};

/// Handle "workspace/executeCommand" request
pub async fn handle_execute_command(
    client: &Client,
    state: &GlobalState,
    params: ExecuteCommandParams,
) -> Result<Option<serde_json::Value>> {
    match params.command.as_str() {
        "synapse/suggestPaths" => handle_suggest_paths(state, params.arguments).await,
        "synapse/createNote" => handle_create_note(client, state, params.arguments).await,
        other => {
            client
                .log_message(MessageType::WARNING, format!("Unknown command: {}", other))
                .await;
            Ok(None)
        }
    }
}

fn first_argument<T: serde::de::DeserializeOwned>(
    arguments: Vec<serde_json::Value>,
) -> Option<T> {
    arguments
        .into_iter()
        .next()
        .and_then(|value| serde_json::from_value(value).ok())
}

/// Folder of the document a command was issued from. Unparseable or
/// out-of-vault URIs count as the root.
fn folder_of(vault: &VaultState, uri: &str) -> FolderPath {
    uri.parse::<Url>()
        .ok()
        .and_then(|url| conversion::vault_relative(vault.root(), &url))
        .map(|path| FilePath::parse(&path).folder_path().clone())
        .unwrap_or_else(FolderPath::root)
}

async fn handle_suggest_paths(
    state: &GlobalState,
    arguments: Vec<serde_json::Value>,
) -> Result<Option<serde_json::Value>> {
    let Some(params) = first_argument::<SuggestPathsParams>(arguments) else {
        return Ok(None);
    };

    let settings = { state.settings.read().await.clone() };
    let vault = state.vault.read().await;
    let Some(vault) = &*vault else {
        return Ok(None);
    };

    let current_folder = folder_of(vault, &params.uri);
    let query = params.query.unwrap_or_default();
    let suggestions = suggest_paths(&query, &vault.index, &settings, &current_folder);

    let result = SuggestPathsResult {
        suggestions: suggestions.iter().map(conversion::path_suggestion).collect(),
    };
    serde_json::to_value(result)
        .map(Some)
        .map_err(|e| tower_lsp::jsonrpc::Error {
            code: tower_lsp::jsonrpc::ErrorCode::InternalError,
            message: format!("Failed to serialize suggestions: {}", e).into(),
            data: None,
        })
}

async fn handle_create_note(
    client: &Client,
    state: &GlobalState,
    arguments: Vec<serde_json::Value>,
) -> Result<Option<serde_json::Value>> {
    let Some(params) = first_argument::<CreateNoteParams>(arguments) else {
        return Ok(None);
    };

    let settings = { state.settings.read().await.clone() };
    let vault = state.vault.read().await;
    let Some(vault) = &*vault else {
        return Ok(None);
    };

    let current_folder = folder_of(vault, &params.uri);
    let known_folders = vault.index.folder_paths();
    let plan = plan_note_creation(
        &NoteSuggestion::from_trigger(&params.target),
        &settings,
        &current_folder,
        &known_folders,
    );

    let Some(edit) = conversion::creation_plan_to_workspace_edit(vault.root(), &plan) else {
        return Ok(None);
    };

    client
        .log_message(
            MessageType::INFO,
            format!("Creating note: {}", plan.note_path),
        )
        .await;

    match client.apply_edit(edit).await {
        Ok(response) if response.applied => {}
        Ok(_) => {
            client
                .log_message(MessageType::WARNING, "Client did not apply note creation")
                .await;
        }
        Err(e) => {
            client
                .log_message(MessageType::ERROR, format!("Failed to create note: {}", e))
                .await;
        }
    }

    Ok(None)
}
