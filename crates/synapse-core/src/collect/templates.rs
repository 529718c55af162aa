use crate::config::LinkerSettings;
use crate::path::FilePath;
use crate::source::VaultSource;
use crate::suggestion::{NotFoundSuggestion, NoteSuggestion, Suggestion, TemplateSuggestion};

/// Collect template suggestions for a trigger containing the template
/// symbol: the part before it names the note being linked, the part
/// after it filters the files under the configured templates folder.
pub fn suggest_templates(
    trigger: &str,
    source: &dyn VaultSource,
    settings: &LinkerSettings,
) -> Vec<Suggestion> {
    let symbol = settings.template_trigger_symbol.as_str();
    let (note_part, template_query) = match trigger.find(symbol) {
        Some(i) if !symbol.is_empty() => (&trigger[..i], &trigger[i + symbol.len()..]),
        _ => (trigger, ""),
    };
    let not_found = || {
        vec![Suggestion::NotFound(NotFoundSuggestion::new(
            "No templates found",
            trigger,
        ))]
    };

    if settings.templates_folder.trim().is_empty() {
        return not_found();
    }

    let target = NoteSuggestion::from_trigger(note_part);
    let filter = template_query.trim().to_lowercase();

    let mut templates: Vec<Suggestion> = source
        .descendant_files(&settings.templates_folder)
        .iter()
        .map(|path| FilePath::parse(path))
        .filter(|file| {
            file.vault_path_without_extension()
                .to_lowercase()
                .contains(&filter)
        })
        .map(|file| {
            Suggestion::Template(TemplateSuggestion::new(file, target.clone(), symbol))
        })
        .collect();
    templates.sort_by_cached_key(|s| s.title().to_lowercase());

    if templates.is_empty() {
        return not_found();
    }
    templates
}
