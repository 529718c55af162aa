//! Suggestion collection and ranking.
//!
//! Collectors are stateless functions: each call pulls the current
//! candidates from the source, classifies them against one query, and
//! returns a freshly ordered list. Nothing survives between keystrokes.

mod dispatch;
mod folders;
mod headers;
mod notes;
mod templates;


pub use dispatch::suggest_for_trigger;
pub use folders::suggest_folders;
pub use headers::suggest_headers;
pub use notes::{suggest_notes, suggest_paths};
pub use templates::suggest_templates;

use std::collections::HashMap;

use crate::query::{MatchKind, Query};
use crate::suggestion::Suggestion;

/// Transient aggregate for one collection pass.
///
/// Accepted suggestions keep arrival order until the final sort; the
/// membership index keyed by lower-cased vault path makes duplicate
/// checks O(1) instead of a rescan per candidate. A full match does not
/// enter the working set; it is held aside and prepended at the end,
/// the last one seen winning when the source reports several.
pub(crate) struct SuggestionCollection {
    query_suggestion: Suggestion,
    accepted: Vec<Suggestion>,
    seen: HashMap<String, Vec<Option<String>>>,
    existing_match: Option<Suggestion>,
}

impl SuggestionCollection {
    pub(crate) fn new(query_suggestion: Suggestion) -> Self {
        SuggestionCollection {
            query_suggestion,
            accepted: Vec::new(),
            seen: HashMap::new(),
            existing_match: None,
        }
    }

    /// Classify one candidate suggestion and file it accordingly.
    pub(crate) fn consider(&mut self, query: &impl Query, suggestion: Suggestion) {
        match query.classify(&suggestion) {
            MatchKind::Full => self.record_full_match(suggestion),
            MatchKind::Partial => self.accept(suggestion),
            MatchKind::None => {}
        }
    }

    fn record_full_match(&mut self, suggestion: Suggestion) {
        // The alias the user typed overrides whatever the candidate
        // carried.
        let merged = match self.query_suggestion.alias() {
            Some(alias) => with_alias(suggestion, alias),
            None => suggestion,
        };
        self.existing_match = Some(merged);
    }

    /// Accept unless this exact (path, alias) pairing is already in.
    /// The same path under a previously unseen alias is a new row.
    fn accept(&mut self, suggestion: Suggestion) {
        let key = suggestion.vault_path().to_lowercase();
        let alias = suggestion.alias().map(str::to_string);
        let seen_aliases = self.seen.entry(key).or_default();
        if seen_aliases.contains(&alias) {
            return;
        }
        seen_aliases.push(alias);
        self.accepted.push(suggestion);
    }

    /// One stable sort by title, then the prepend decision: an empty
    /// query returns the sorted set untouched; otherwise the recorded
    /// full match goes first, or the query itself when synthesis is on.
    pub(crate) fn into_sorted(self, synthesize: bool, query_is_empty: bool) -> Vec<Suggestion> {
        let mut result = self.accepted;
        result.sort_by_cached_key(|s| s.title().to_lowercase());

        if query_is_empty {
            return result;
        }
        match self.existing_match {
            Some(matched) => result.insert(0, matched),
            None if synthesize => result.insert(0, self.query_suggestion),
            None => {}
        }
        result
    }
}

fn with_alias(suggestion: Suggestion, alias: &str) -> Suggestion {
    let alias = Some(alias.to_string());
    match suggestion {
        Suggestion::ExistingNote(n) => Suggestion::ExistingNote(n.replacing_alias(alias)),
        Suggestion::NewNote(n) => Suggestion::NewNote(n.replacing_alias(alias)),
        Suggestion::AliasNote(n) => Suggestion::AliasNote(n.replacing_alias(alias)),
        other => other,
    }
}
