use crate::path::FilePath;
use crate::source::VaultSource;
use crate::suggestion::{HeaderSuggestion, NotFoundSuggestion, Suggestion};

/// Collect heading suggestions for a trigger containing `#`: the part
/// before it addresses a note (empty means the current one), the part
/// after it (up to any `|alias`) filters that note's headings.
///
/// Headings are positional, so the result keeps document order and
/// duplicate headings stay distinct rows.
pub fn suggest_headers(
    trigger: &str,
    source: &dyn VaultSource,
    current_note: &str,
) -> Vec<Suggestion> {
    let (note_part, header_part) = match trigger.find('#') {
        Some(i) => (&trigger[..i], &trigger[i + 1..]),
        None => ("", trigger),
    };
    let (header_query, alias) = match header_part.find('|') {
        Some(i) => {
            let alias = header_part[i + 1..].trim();
            (
                &header_part[..i],
                (!alias.is_empty()).then(|| alias.to_string()),
            )
        }
        None => (header_part, None),
    };

    let target = if note_part.trim().is_empty() {
        current_note
    } else {
        note_part
    };
    let Some(headings) = source.headings_of(target) else {
        return vec![Suggestion::NotFound(NotFoundSuggestion::new(
            "Note not found",
            trigger,
        ))];
    };

    let note = FilePath::parse(note_part);
    let filter = header_query.trim().to_lowercase();
    let matched: Vec<Suggestion> = headings
        .iter()
        .filter(|h| h.text.to_lowercase().contains(&filter))
        .map(|h| {
            Suggestion::Header(HeaderSuggestion::new(
                &h.text,
                h.level,
                alias.clone(),
                note.clone(),
            ))
        })
        .collect();

    if matched.is_empty() {
        return vec![Suggestion::NotFound(NotFoundSuggestion::new(
            "No headers found",
            trigger,
        ))];
    }
    matched
}
