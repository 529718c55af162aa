//! Query construction and match classification.
//!
//! A query is built once per keystroke and then asked to classify every
//! candidate suggestion. Classification is total: any (query,
//! suggestion) pair lands on exactly one of [`MatchKind`]'s three
//! outcomes.

use crate::path::{path_portion, FilePath, FolderPath};
use crate::suggestion::Suggestion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The query names this suggestion exactly (extension-less,
    /// case-insensitive path equality).
    Full,
    /// The suggestion is a plausible completion of the query.
    Partial,
    /// Not relevant to this query.
    None,
}

/// Hard folder restriction derived from the configured relative top
/// folders and the folder of the current document.
#[derive(Debug, Clone, Default)]
pub struct QueryScope {
    prefix: Option<FolderPath>,
}

impl QueryScope {
    pub fn unrestricted() -> Self {
        QueryScope { prefix: None }
    }

    /// Pick the first configured top folder that applies to the current
    /// document's folder and turn it into a concrete prefix.
    ///
    /// A configured folder applies when its lower-cased path occurs
    /// anywhere in the current folder's path; the concrete prefix runs
    /// from the start of the current folder through the end of that
    /// occurrence. No applicable folder means no restriction.
    pub fn for_document(top_folders: &[String], current_folder: &FolderPath) -> Self {
        for configured in top_folders {
            let folder = FolderPath::parse(configured);
            if folder.is_root() {
                continue;
            }
            if let Some(i) = current_folder.vault_path().find(folder.vault_path()) {
                let end = i + folder.vault_path().len();
                let prefix = FolderPath::parse(&current_folder.vault_path()[..end]);
                return QueryScope {
                    prefix: Some(prefix),
                };
            }
        }
        QueryScope { prefix: None }
    }

    pub fn prefix(&self) -> Option<&FolderPath> {
        self.prefix.as_ref()
    }

    fn allows(&self, vault_path: &str) -> bool {
        match &self.prefix {
            Some(folder) => folder.is_ancestor_of(vault_path),
            None => true,
        }
    }
}

/// Common face of the query kinds, as the collectors see them.
pub trait Query {
    /// The raw query string the user typed.
    fn raw(&self) -> &str;

    /// Classify one candidate suggestion against this query.
    fn classify(&self, suggestion: &Suggestion) -> MatchKind;

    fn is_empty(&self) -> bool {
        self.raw().is_empty()
    }
}

/// Matches note-flavored suggestions.
#[derive(Debug, Clone)]
pub struct NoteQuery {
    raw: String,
    path_lc: String,
    folder_lc: String,
    title_lc: String,
    scope: QueryScope,
}

impl NoteQuery {
    pub fn new(raw: &str, scope: QueryScope) -> Self {
        let file = FilePath::parse(raw);
        NoteQuery {
            raw: raw.to_string(),
            path_lc: file.vault_path_without_extension().to_lowercase(),
            folder_lc: file.folder_path().vault_path().to_string(),
            title_lc: file.title().to_lowercase(),
            scope,
        }
    }
}

impl Query for NoteQuery {
    fn raw(&self) -> &str {
        &self.raw
    }

    fn classify(&self, suggestion: &Suggestion) -> MatchKind {
        let note = match suggestion {
            Suggestion::ExistingNote(n)
            | Suggestion::NewNote(n)
            | Suggestion::AliasNote(n) => n,
            _ => return MatchKind::None,
        };
        if !self.scope.allows(note.path().vault_path()) {
            return MatchKind::None;
        }

        if note.path().vault_path_without_extension().to_lowercase() == self.path_lc {
            return MatchKind::Full;
        }

        // The candidate's folder must contain the query's folder
        // segment somewhere; the title must then appear in what is left
        // of the full path once that folder segment is removed.
        let folder_matches = note
            .path()
            .folder_path()
            .vault_path()
            .contains(&self.folder_lc)
            && note
                .path()
                .vault_path()
                .to_lowercase()
                .replacen(&self.folder_lc, "", 1)
                .contains(&self.title_lc);

        let alias_matches = note
            .alias()
            .map_or(false, |alias| alias.to_lowercase().contains(&self.title_lc));

        if folder_matches || alias_matches {
            MatchKind::Partial
        } else {
            MatchKind::None
        }
    }
}

/// Matches folder suggestions. Same shape as the note tier, with the
/// raw query split at its last `/` and no extension handling.
#[derive(Debug, Clone)]
pub struct FolderQuery {
    raw: String,
    full_lc: String,
    folder_lc: String,
    title_lc: String,
    scope: QueryScope,
}

impl FolderQuery {
    pub fn new(raw: &str, scope: QueryScope) -> Self {
        let full_lc = path_portion(raw.trim()).to_lowercase();
        let (folder_lc, title_lc) = match full_lc.rfind('/') {
            Some(i) => (full_lc[..i].to_string(), full_lc[i + 1..].to_string()),
            None => (String::new(), full_lc.clone()),
        };
        FolderQuery {
            raw: raw.to_string(),
            full_lc,
            folder_lc,
            title_lc,
            scope,
        }
    }
}

impl Query for FolderQuery {
    fn raw(&self) -> &str {
        &self.raw
    }

    fn classify(&self, suggestion: &Suggestion) -> MatchKind {
        let folder = match suggestion {
            Suggestion::Folder(f) => f.folder(),
            _ => return MatchKind::None,
        };
        if !self.scope.allows(folder.vault_path()) {
            return MatchKind::None;
        }

        if folder.vault_path() == self.full_lc {
            return MatchKind::Full;
        }

        let parent = folder.parent_or_this();
        let matches = parent.vault_path().contains(&self.folder_lc)
            && folder
                .vault_path()
                .replacen(&self.folder_lc, "", 1)
                .contains(&self.title_lc);

        if matches {
            MatchKind::Partial
        } else {
            MatchKind::None
        }
    }
}

/// Notes and folders at once: each tier only sees its own variant
/// family, and the verdicts combine by OR through the dispatch.
#[derive(Debug, Clone)]
pub struct NoteOrFolderQuery {
    note: NoteQuery,
    folder: FolderQuery,
}

impl NoteOrFolderQuery {
    pub fn new(raw: &str, scope: QueryScope) -> Self {
        NoteOrFolderQuery {
            note: NoteQuery::new(raw, scope.clone()),
            folder: FolderQuery::new(raw, scope),
        }
    }
}

impl Query for NoteOrFolderQuery {
    fn raw(&self) -> &str {
        self.note.raw()
    }

    fn classify(&self, suggestion: &Suggestion) -> MatchKind {
        match suggestion {
            Suggestion::Folder(_) => self.folder.classify(suggestion),
            _ => self.note.classify(suggestion),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestion::{FolderSuggestion, NoteSuggestion};

    fn existing(path: &str) -> Suggestion {
        Suggestion::ExistingNote(NoteSuggestion::from_trigger(path))
    }

    fn folder(path: &str) -> Suggestion {
        Suggestion::Folder(FolderSuggestion::from_path(path))
    }

    #[test]
    fn full_match_ignores_case_and_extension() {
        let q = NoteQuery::new("bob", QueryScope::unrestricted());
        assert_eq!(q.classify(&existing("bob.md")), MatchKind::Full);
        assert_eq!(q.classify(&existing("BOB.md")), MatchKind::Full);
        assert_eq!(q.classify(&existing("bob")), MatchKind::Full);
    }

    #[test]
    fn full_match_compares_the_whole_extensionless_path() {
        let q = NoteQuery::new("folder1/bob", QueryScope::unrestricted());
        assert_eq!(q.classify(&existing("Folder1/Bob.md")), MatchKind::Full);
        // A root-level note with the same title is not even a partial
        // match: its empty folder cannot contain "folder1".
        assert_eq!(q.classify(&existing("bob.md")), MatchKind::None);
    }

    #[test]
    fn partial_match_is_a_substring_test_on_the_title() {
        let q = NoteQuery::new("bob", QueryScope::unrestricted());
        assert_eq!(q.classify(&existing("bobby.md")), MatchKind::Partial);
        assert_eq!(q.classify(&existing("notes/About Bob.md")), MatchKind::Partial);
        assert_eq!(q.classify(&existing("alice.md")), MatchKind::None);
    }

    #[test]
    fn partial_match_requires_the_folder_substring() {
        let q = NoteQuery::new("work/plan", QueryScope::unrestricted());
        assert_eq!(q.classify(&existing("work/planning.md")), MatchKind::Partial);
        assert_eq!(q.classify(&existing("Homework/plans.md")), MatchKind::Partial);
        assert_eq!(q.classify(&existing("play/plan.md")), MatchKind::None);
    }

    #[test]
    fn alias_containment_is_a_partial_match() {
        let q = NoteQuery::new("nick", QueryScope::unrestricted());
        let aliased = Suggestion::AliasNote(NoteSuggestion::with_alias("bob.md", "Nickname"));
        assert_eq!(q.classify(&aliased), MatchKind::Partial);

        let other = Suggestion::AliasNote(NoteSuggestion::with_alias("bob.md", "builder"));
        assert_eq!(q.classify(&other), MatchKind::None);
    }

    #[test]
    fn empty_query_partially_matches_everything() {
        let q = NoteQuery::new("", QueryScope::unrestricted());
        assert!(q.is_empty());
        assert_eq!(q.classify(&existing("anything/at all.md")), MatchKind::Partial);
    }

    #[test]
    fn note_query_never_matches_folders() {
        let q = NoteQuery::new("folder1", QueryScope::unrestricted());
        assert_eq!(q.classify(&folder("folder1")), MatchKind::None);
    }

    #[test]
    fn folder_query_full_and_partial() {
        let q = FolderQuery::new("projects/ho", QueryScope::unrestricted());
        assert_eq!(q.classify(&folder("Projects/Home")), MatchKind::Partial);
        assert_eq!(q.classify(&folder("archive")), MatchKind::None);

        let q = FolderQuery::new("Projects/Home", QueryScope::unrestricted());
        assert_eq!(q.classify(&folder("projects/home")), MatchKind::Full);
    }

    #[test]
    fn folder_query_never_matches_notes() {
        let q = FolderQuery::new("bob", QueryScope::unrestricted());
        assert_eq!(q.classify(&existing("bob.md")), MatchKind::None);
    }

    #[test]
    fn combined_query_routes_by_variant() {
        let q = NoteOrFolderQuery::new("pro", QueryScope::unrestricted());
        assert_eq!(q.classify(&existing("Progress report.md")), MatchKind::Partial);
        assert_eq!(q.classify(&folder("Projects")), MatchKind::Partial);
        assert_eq!(q.classify(&folder("archive")), MatchKind::None);
    }

    #[test]
    fn scope_prefix_comes_from_the_first_applicable_top_folder() {
        let current = FolderPath::parse("Work/Daily/2024");
        let scope = QueryScope::for_document(
            &["missing".to_string(), "daily".to_string()],
            &current,
        );
        let prefix = scope.prefix().map(FolderPath::vault_path);
        assert_eq!(prefix, Some("work/daily"));
    }

    #[test]
    fn scope_filters_both_tiers() {
        let current = FolderPath::parse("work/daily/2024");
        let scope = QueryScope::for_document(&["daily".to_string()], &current);

        let q = NoteQuery::new("note", scope.clone());
        assert_eq!(
            q.classify(&existing("work/daily/2024/note.md")),
            MatchKind::Partial
        );
        assert_eq!(q.classify(&existing("elsewhere/note.md")), MatchKind::None);

        let fq = FolderQuery::new("2024", scope);
        assert_eq!(fq.classify(&folder("work/daily/2024")), MatchKind::Partial);
        assert_eq!(fq.classify(&folder("other/2024")), MatchKind::None);
    }

    #[test]
    fn no_applicable_top_folder_means_no_restriction() {
        let scope =
            QueryScope::for_document(&["daily".to_string()], &FolderPath::parse("essays"));
        assert!(scope.prefix().is_none());

        let q = NoteQuery::new("note", scope);
        assert_eq!(q.classify(&existing("anywhere/note.md")), MatchKind::Partial);
    }

    #[test]
    fn empty_configured_entries_are_ignored() {
        let scope = QueryScope::for_document(
            &["".to_string(), "daily".to_string()],
            &FolderPath::parse("daily/2024"),
        );
        assert_eq!(scope.prefix().map(FolderPath::vault_path), Some("daily"));
    }
}
