use crate::config::LinkerSettings;
use crate::path::FolderPath;
use crate::source::VaultSource;
use crate::suggestion::Suggestion;

use super::{suggest_headers, suggest_notes, suggest_templates};

/// Route one trigger text to the collector it addresses.
///
/// The template symbol wins wherever it appears; a `#` that comes
/// before any `|` starts the heading flow; everything else is a note
/// query (a `|` first means the `#` belongs to the alias text).
pub fn suggest_for_trigger(
    trigger: &str,
    source: &dyn VaultSource,
    settings: &LinkerSettings,
    current_folder: &FolderPath,
    current_note: &str,
) -> Vec<Suggestion> {
    let template_symbol = settings.template_trigger_symbol.as_str();
    if !template_symbol.is_empty() && trigger.contains(template_symbol) {
        return suggest_templates(trigger, source, settings);
    }

    match (trigger.find('#'), trigger.find('|')) {
        (Some(h), Some(b)) if h < b => suggest_headers(trigger, source, current_note),
        (Some(_), None) => suggest_headers(trigger, source, current_note),
        _ => suggest_notes(trigger, source, settings, current_folder),
    }
}
