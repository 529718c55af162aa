use serde::{Deserialize, Serialize};

/// Where a new note lands when the typed title carries no folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NewNoteLocation {
    /// Vault root.
    Root,
    /// The folder of the document being edited.
    CurrentFolder,
    /// A fixed folder.
    Folder(String),
}

impl Default for NewNoteLocation {
    fn default() -> Self {
        NewNoteLocation::Root
    }
}

/// Behavior settings for the linker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkerSettings {
    /// Symbol that opens note completion.
    #[serde(default = "default_trigger_symbol")]
    pub trigger_symbol: String,
    /// Symbol inside a trigger that switches to template selection.
    #[serde(default = "default_template_trigger_symbol")]
    pub template_trigger_symbol: String,
    /// Offer links to notes no file exists for yet.
    #[serde(default = "default_true")]
    pub suggest_non_existing_notes: bool,
    /// Folder names that, when found in the current document's folder,
    /// restrict suggestions to that subtree.
    #[serde(default)]
    pub relative_top_folders: Vec<String>,
    #[serde(default)]
    pub new_note_location: NewNoteLocation,
    /// Folder scanned for template files. Empty disables templates.
    #[serde(default)]
    pub templates_folder: String,
}

fn default_trigger_symbol() -> String {
    "@".to_string()
}

fn default_template_trigger_symbol() -> String {
    "$".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LinkerSettings {
    fn default() -> Self {
        Self {
            trigger_symbol: default_trigger_symbol(),
            template_trigger_symbol: default_template_trigger_symbol(),
            suggest_non_existing_notes: true,
            relative_top_folders: Vec::new(),
            new_note_location: NewNoteLocation::default(),
            templates_folder: String::new(),
        }
    }
}

impl LinkerSettings {
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
