use serde::{Deserialize, Serialize};
use synapse_core::{LinkerSettings, NewNoteLocation};

/// Settings as the editor extension sends them: the `synapse` section
/// of `workspace/didChangeConfiguration`, camelCase keys. Missing keys
/// keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LspSettings {
    pub trigger_symbol: String,
    pub template_trigger_symbol: String,
    pub suggest_non_existing_notes: bool,
    pub relative_top_folders: Vec<String>,
    pub new_note_location: NewNoteLocation,
    pub templates_folder: String,
}

impl Default for LspSettings {
    fn default() -> Self {
        LinkerSettings::default().into()
    }
}

impl From<LinkerSettings> for LspSettings {
    fn from(settings: LinkerSettings) -> Self {
        Self {
            trigger_symbol: settings.trigger_symbol,
            template_trigger_symbol: settings.template_trigger_symbol,
            suggest_non_existing_notes: settings.suggest_non_existing_notes,
            relative_top_folders: settings.relative_top_folders,
            new_note_location: settings.new_note_location,
            templates_folder: settings.templates_folder,
        }
    }
}

impl LspSettings {
    pub fn into_linker_settings(self) -> LinkerSettings {
        LinkerSettings {
            trigger_symbol: self.trigger_symbol,
            template_trigger_symbol: self.template_trigger_symbol,
            suggest_non_existing_notes: self.suggest_non_existing_notes,
            relative_top_folders: self.relative_top_folders,
            new_note_location: self.new_note_location,
            templates_folder: self.templates_folder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_camel_case_sections_parse_with_defaults() {
        let json = serde_json::json!({
            "triggerSymbol": "+",
            "relativeTopFolders": ["daily"],
        });

        let settings: LspSettings = serde_json::from_value(json).unwrap();
        let linker = settings.into_linker_settings();

        assert_eq!(linker.trigger_symbol, "+");
        assert_eq!(linker.relative_top_folders, vec!["daily"]);
        assert_eq!(linker.template_trigger_symbol, "$");
        assert!(linker.suggest_non_existing_notes);
    }

    #[test]
    fn location_policy_parses_from_json() {
        let json = serde_json::json!({
            "newNoteLocation": { "folder": "inbox" },
        });

        let settings: LspSettings = serde_json::from_value(json).unwrap();
        assert_eq!(
            settings.new_note_location,
            NewNoteLocation::Folder("inbox".to_string())
        );
    }
}
