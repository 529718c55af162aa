use crate::config::LinkerSettings;
use crate::path::FolderPath;
use crate::query::{FolderQuery, Query, QueryScope};
use crate::source::VaultSource;
use crate::suggestion::{FolderSuggestion, NotFoundSuggestion, NoteSuggestion, Suggestion};

use super::SuggestionCollection;

/// Collect folder suggestions for one typed query. Never synthesizes;
/// an empty outcome becomes a single not-found row instead.
pub fn suggest_folders(
    query: &str,
    source: &dyn VaultSource,
    settings: &LinkerSettings,
    current_folder: &FolderPath,
) -> Vec<Suggestion> {
    let scope = QueryScope::for_document(&settings.relative_top_folders, current_folder);
    let folder_query = FolderQuery::new(query, scope);

    let mut collection = SuggestionCollection::new(Suggestion::NewNote(
        NoteSuggestion::from_trigger(query),
    ));
    for path in source.folder_paths() {
        collection.consider(
            &folder_query,
            Suggestion::Folder(FolderSuggestion::from_path(&path)),
        );
    }

    let results = collection.into_sorted(false, folder_query.is_empty());
    if results.is_empty() {
        return vec![Suggestion::NotFound(NotFoundSuggestion::new(
            "No folders found",
            query,
        ))];
    }
    results
}
