use crate::config::LinkerSettings;
use crate::path::FolderPath;
use crate::query::{NoteOrFolderQuery, NoteQuery, Query, QueryScope};
use crate::source::VaultSource;
use crate::suggestion::{FolderSuggestion, NoteSuggestion, Suggestion};

use super::SuggestionCollection;

/// Collect and rank note suggestions for one typed query.
///
/// This is the main completion path: every known link candidate is
/// classified, duplicates collapse, and the result is sorted by title
/// with the full match (or, failing that, a synthetic "create new"
/// entry) up front.
pub fn suggest_notes(
    query: &str,
    source: &dyn VaultSource,
    settings: &LinkerSettings,
    current_folder: &FolderPath,
) -> Vec<Suggestion> {
    let scope = QueryScope::for_document(&settings.relative_top_folders, current_folder);
    let note_query = NoteQuery::new(query, scope);
    collect(
        &note_query,
        source,
        settings,
        false,
        settings.suggest_non_existing_notes,
    )
}

/// Notes and folders in one ranked list, for path pickers. No synthetic
/// entry is ever added here.
pub fn suggest_paths(
    query: &str,
    source: &dyn VaultSource,
    settings: &LinkerSettings,
    current_folder: &FolderPath,
) -> Vec<Suggestion> {
    let scope = QueryScope::for_document(&settings.relative_top_folders, current_folder);
    let combined = NoteOrFolderQuery::new(query, scope);
    collect(&combined, source, settings, true, false)
}

fn collect(
    query: &impl Query,
    source: &dyn VaultSource,
    settings: &LinkerSettings,
    include_folders: bool,
    synthesize: bool,
) -> Vec<Suggestion> {
    let mut collection = SuggestionCollection::new(Suggestion::NewNote(
        NoteSuggestion::from_trigger(query.raw()),
    ));

    for candidate in source.link_candidates() {
        if !candidate.exists_as_file && !settings.suggest_non_existing_notes {
            continue;
        }
        collection.consider(query, Suggestion::for_candidate(&candidate));
    }

    if include_folders {
        for path in source.folder_paths() {
            collection.consider(query, Suggestion::Folder(FolderSuggestion::from_path(&path)));
        }
    }

    collection.into_sorted(synthesize, query.is_empty())
}
