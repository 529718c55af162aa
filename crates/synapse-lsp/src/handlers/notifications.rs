use synapse_core::vfs::FileSystem;
use tower_lsp::lsp_types::*;
use url::Url;

use crate::conversion;
use crate::state::GlobalState;

/// Handle "textDocument/didOpen" notification
pub async fn handle_did_open(state: &GlobalState, params: DidOpenTextDocumentParams) {
    update_document(state, params.text_document.uri, params.text_document.text).await;
}

/// Handle "textDocument/didChange" notification
pub async fn handle_did_change(state: &GlobalState, params: DidChangeTextDocumentParams) {
    // Full sync: the last change carries the whole document.
    if let Some(last_change) = params.content_changes.into_iter().last() {
        update_document(state, params.text_document.uri, last_change.text).await;
    }
}

async fn update_document(state: &GlobalState, uri: Url, text: String) {
    {
        let mut cache = state.document_cache.write().await;
        cache.insert(uri.clone(), text.clone());
    }

    let mut vault = state.vault.write().await;
    if let Some(vault) = &mut *vault {
        if let Some(path) = conversion::vault_relative(vault.root(), &uri) {
            vault.index.upsert_document(&path, &text);
        }
    }
}

/// Handle "workspace/didChangeWatchedFiles" notification
pub async fn handle_did_change_watched_files(
    state: &GlobalState,
    params: DidChangeWatchedFilesParams,
) {
    let mut vault = state.vault.write().await;
    let Some(vault) = &mut *vault else {
        return;
    };

    for change in params.changes {
        let Some(path) = conversion::vault_relative(vault.root(), &change.uri) else {
            continue;
        };
        match change.typ {
            FileChangeType::CREATED | FileChangeType::CHANGED => {
                if let Ok(content) = vault.fs.read_to_string(&path) {
                    {
                        let mut cache = state.document_cache.write().await;
                        cache.insert(change.uri.clone(), content.clone());
                    }
                    vault.index.upsert_document(&path, &content);
                }
            }
            FileChangeType::DELETED => {
                {
                    let mut cache = state.document_cache.write().await;
                    cache.remove(&change.uri);
                }
                vault.index.remove_document(&path);
            }
            _ => {}
        }
    }
}

/// Handle "workspace/didRenameFiles" notification
pub async fn handle_did_rename_files(state: &GlobalState, params: RenameFilesParams) {
    let mut vault = state.vault.write().await;
    let Some(vault) = &mut *vault else {
        return;
    };

    for rename in params.files {
        let (Ok(old_url), Ok(new_url)) = (
            rename.old_uri.parse::<Url>(),
            rename.new_uri.parse::<Url>(),
        ) else {
            continue;
        };
        let (Some(old_path), Some(new_path)) = (
            conversion::vault_relative(vault.root(), &old_url),
            conversion::vault_relative(vault.root(), &new_url),
        ) else {
            continue;
        };

        vault.index.rename_document(&old_path, &new_path);

        let mut cache = state.document_cache.write().await;
        if let Some(text) = cache.remove(&old_url) {
            cache.insert(new_url, text);
        }
    }
}
