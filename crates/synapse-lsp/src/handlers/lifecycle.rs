use synapse_core::vfs::PhysicalFileSystem;
use synapse_core::VaultIndex;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::Client;

use crate::state::{GlobalState, VaultState};

/// Handle "initialize" request
#[allow(deprecated)] // root_uri is how every current client hands us the vault
pub async fn handle_initialize(
    client: &Client,
    state: &GlobalState,
    params: InitializeParams,
) -> Result<InitializeResult> {
    if let Some(uri) = params.root_uri {
        if let Ok(root_path) = uri.to_file_path() {
            client
                .log_message(
                    MessageType::INFO,
                    format!("Initializing vault at: {:?}", root_path),
                )
                .await;

            let (fs, index, files) = tokio::task::spawn_blocking(move || {
                let fs = PhysicalFileSystem::new(root_path);
                let mut index = VaultIndex::new();
                let files = index.scan(&fs);
                (fs, index, files)
            })
            .await
            .map_err(|e| tower_lsp::jsonrpc::Error {
                code: tower_lsp::jsonrpc::ErrorCode::InternalError,
                message: format!("Failed to scan vault: {}", e).into(),
                data: None,
            })?;

            client
                .log_message(
                    MessageType::INFO,
                    format!("Found {} markdown files", files.len()),
                )
                .await;
            client
                .log_message(
                    MessageType::INFO,
                    format!("Indexed {} notes from vault", index.document_count()),
                )
                .await;

            let mut vault = state.vault.write().await;
            *vault = Some(VaultState { fs, index });
        }
    } else {
        client
            .log_message(MessageType::WARNING, "No rootUri provided!")
            .await;
    }

    let settings = state.settings.read().await;
    let mut trigger_characters: Vec<String> = Vec::new();
    for c in settings
        .trigger_symbol
        .chars()
        .chain(settings.template_trigger_symbol.chars())
        .chain(['#', '|', '/'])
    {
        let s = c.to_string();
        if !trigger_characters.contains(&s) {
            trigger_characters.push(s);
        }
    }

    Ok(InitializeResult {
        capabilities: ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
            completion_provider: Some(CompletionOptions {
                trigger_characters: Some(trigger_characters),
                all_commit_characters: None,
                resolve_provider: Some(false),
                work_done_progress_options: Default::default(),
                completion_item: Default::default(),
            }),
            execute_command_provider: Some(ExecuteCommandOptions {
                commands: vec![
                    "synapse/suggestPaths".to_string(),
                    "synapse/createNote".to_string(),
                ],
                work_done_progress_options: Default::default(),
            }),
            ..Default::default()
        },
        ..Default::default()
    })
}
