use tower_lsp::lsp_types::*;
use tower_lsp::Client;

use crate::config::LspSettings;
use crate::state::GlobalState;

/// Handle "workspace/didChangeConfiguration" notification. Settings
/// arrive under a `synapse` section and replace the current ones
/// wholesale.
pub async fn handle_did_change_configuration(
    client: &Client,
    state: &GlobalState,
    params: DidChangeConfigurationParams,
) {
    client
        .log_message(MessageType::INFO, "⚙️ Configuration changed")
        .await;

    if let serde_json::Value::Object(map) = params.settings {
        if let Some(section) = map.get("synapse") {
            match serde_json::from_value::<LspSettings>(section.clone()) {
                Ok(new_settings) => {
                    let mut settings = state.settings.write().await;
                    *settings = new_settings.into_linker_settings();
                    client
                        .log_message(MessageType::INFO, "✅ Linker settings updated successfully")
                        .await;
                }
                Err(e) => {
                    client
                        .log_message(
                            MessageType::ERROR,
                            format!("❌ Failed to parse updated settings: {}", e),
                        )
                        .await;
                }
            }
        }
    }
}
