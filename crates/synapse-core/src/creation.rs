//! New-note placement.
//!
//! When a committed suggestion names a note that does not exist yet,
//! the host has to create the file (and possibly its folder) before
//! the link is valid. This module only decides *where*; the actual
//! file operations stay on the host side.

use crate::config::{LinkerSettings, NewNoteLocation};
use crate::path::FolderPath;
use crate::suggestion::{NoteSuggestion, Suggestion};

/// Where a new note should be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCreationPlan {
    /// Full vault path of the file to create, extension included.
    pub note_path: String,
    /// Folder that has to be created first, when it does not exist
    /// yet. Creating it implies any missing ancestors.
    pub folder_to_create: Option<String>,
}

/// Plan file creation for a committed suggestion. Only new-note
/// suggestions need one; everything else links to content that is
/// already there.
pub fn plan_for_suggestion(
    suggestion: &Suggestion,
    settings: &LinkerSettings,
    current_folder: &FolderPath,
    known_folders: &[String],
) -> Option<NoteCreationPlan> {
    match suggestion {
        Suggestion::NewNote(note) => Some(plan_note_creation(
            note,
            settings,
            current_folder,
            known_folders,
        )),
        _ => None,
    }
}

pub fn plan_note_creation(
    note: &NoteSuggestion,
    settings: &LinkerSettings,
    current_folder: &FolderPath,
    known_folders: &[String],
) -> NoteCreationPlan {
    let (note_path, folder) = placement(note, settings, current_folder);
    let folder_to_create = folder.filter(|f| !folder_exists(f, known_folders));
    NoteCreationPlan {
        note_path,
        folder_to_create,
    }
}

/// Resolve the target path and its folder. A folder typed into the
/// trigger always wins; bare titles land wherever the location policy
/// says.
fn placement(
    note: &NoteSuggestion,
    settings: &LinkerSettings,
    current_folder: &FolderPath,
) -> (String, Option<String>) {
    let file = note.path();

    let mut name = file.file_name_with_possible_extension().to_string();
    if file.extension().is_empty() {
        name.push_str(".md");
    }

    if !file.note_is_in_root() {
        // Folder as typed, original casing.
        let typed = file.vault_path();
        let folder = match typed.rfind('/') {
            Some(i) => typed[..i].to_string(),
            None => String::new(),
        };
        return (format!("{}/{}", folder, name), Some(folder));
    }

    match &settings.new_note_location {
        NewNoteLocation::Root => (name, None),
        NewNoteLocation::CurrentFolder => {
            if current_folder.is_root() {
                (name, None)
            } else {
                let folder = current_folder.vault_path().trim_end_matches('/').to_string();
                (format!("{}/{}", folder, name), Some(folder))
            }
        }
        NewNoteLocation::Folder(configured) => {
            let folder = configured.trim().trim_end_matches('/');
            if folder.is_empty() {
                (name, None)
            } else {
                (format!("{}/{}", folder, name), Some(folder.to_string()))
            }
        }
    }
}

fn folder_exists(folder: &str, known_folders: &[String]) -> bool {
    let wanted = folder.to_lowercase();
    known_folders
        .iter()
        .any(|known| known.to_lowercase().trim_end_matches('/') == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with(location: NewNoteLocation) -> LinkerSettings {
        LinkerSettings {
            new_note_location: location,
            ..LinkerSettings::default()
        }
    }

    fn plan(trigger: &str, location: NewNoteLocation, current: &str) -> NoteCreationPlan {
        plan_note_creation(
            &NoteSuggestion::from_trigger(trigger),
            &settings_with(location),
            &FolderPath::parse(current),
            &["daily".to_string(), "work/notes".to_string()],
        )
    }

    #[test]
    fn typed_folder_wins_over_any_policy() {
        let plan = plan("Projects/Recipe", NewNoteLocation::Root, "elsewhere");
        assert_eq!(plan.note_path, "Projects/Recipe.md");
        assert_eq!(plan.folder_to_create.as_deref(), Some("Projects"));
    }

    #[test]
    fn existing_folders_are_not_reported_for_creation() {
        let plan = plan("Daily/standup", NewNoteLocation::Root, "");
        assert_eq!(plan.note_path, "Daily/standup.md");
        assert_eq!(plan.folder_to_create, None);

        let nested = plan_note_creation(
            &NoteSuggestion::from_trigger("work/notes/todo"),
            &settings_with(NewNoteLocation::Root),
            &FolderPath::root(),
            &["Work/Notes".to_string()],
        );
        assert_eq!(nested.folder_to_create, None);
    }

    #[test]
    fn root_policy_creates_at_the_vault_root() {
        let plan = plan("recipe", NewNoteLocation::Root, "work/notes");
        assert_eq!(plan.note_path, "recipe.md");
        assert_eq!(plan.folder_to_create, None);
    }

    #[test]
    fn current_folder_policy_creates_beside_the_document() {
        let plan = plan("recipe", NewNoteLocation::CurrentFolder, "Work/Notes");
        assert_eq!(plan.note_path, "work/notes/recipe.md");
        assert_eq!(plan.folder_to_create, None);

        let in_root = self::plan("recipe", NewNoteLocation::CurrentFolder, "");
        assert_eq!(in_root.note_path, "recipe.md");
        assert_eq!(in_root.folder_to_create, None);
    }

    #[test]
    fn configured_folder_policy_reports_a_missing_folder() {
        let location = NewNoteLocation::Folder("Inbox/Unsorted".to_string());
        let plan = plan("recipe", location, "anywhere");
        assert_eq!(plan.note_path, "Inbox/Unsorted/recipe.md");
        assert_eq!(plan.folder_to_create.as_deref(), Some("Inbox/Unsorted"));
    }

    #[test]
    fn markdown_extension_is_appended_only_when_absent() {
        let plain = plan("recipe.md", NewNoteLocation::Root, "");
        assert_eq!(plain.note_path, "recipe.md");

        let typed = plan("data.json", NewNoteLocation::Root, "");
        assert_eq!(typed.note_path, "data.json");
    }

    #[test]
    fn only_new_note_suggestions_produce_a_plan() {
        let settings = LinkerSettings::default();
        let current = FolderPath::root();

        let new_note = Suggestion::NewNote(NoteSuggestion::from_trigger("fresh"));
        assert!(plan_for_suggestion(&new_note, &settings, &current, &[]).is_some());

        let existing = Suggestion::ExistingNote(NoteSuggestion::from_trigger("fresh"));
        assert!(plan_for_suggestion(&existing, &settings, &current, &[]).is_none());
    }
}
