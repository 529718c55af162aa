//! Conversion utilities between core types and LSP types
//!
//! Positions need care: LSP speaks UTF-16 code units, the core's
//! trigger spans are character offsets.

use std::path::Path;

use synapse_core::{NoteCreationPlan, Suggestion, TriggerSpan};
use tower_lsp::lsp_types::{
    Command, CompletionItem, CompletionItemKind, CompletionTextEdit, CreateFile,
    CreateFileOptions, DocumentChangeOperation, DocumentChanges, Position, Range, ResourceOp,
    TextEdit, Url, WorkspaceEdit,
};

use crate::protocol::PathSuggestion;

/// UTF-16 code-unit offset on one line → character offset. Clamps to
/// the end of the line; an offset landing inside a surrogate pair
/// resolves past that character.
pub fn utf16_to_char_offset(line: &str, utf16_offset: usize) -> usize {
    let mut utf16 = 0usize;
    for (char_offset, c) in line.chars().enumerate() {
        if utf16 >= utf16_offset {
            return char_offset;
        }
        utf16 += c.len_utf16();
    }
    line.chars().count()
}

/// Character offset on one line → UTF-16 code units.
pub fn char_to_utf16_offset(line: &str, char_offset: usize) -> u32 {
    line.chars()
        .take(char_offset)
        .map(|c| c.len_utf16() as u32)
        .sum()
}

/// The single-line LSP range covering a trigger span.
pub fn span_to_range(line: &str, line_number: u32, span: &TriggerSpan) -> Range {
    Range {
        start: Position {
            line: line_number,
            character: char_to_utf16_offset(line, span.start),
        },
        end: Position {
            line: line_number,
            character: char_to_utf16_offset(line, span.end),
        },
    }
}

/// Vault-relative forward-slash path of a file URI. `None` for URIs
/// outside the vault root.
pub fn vault_relative(root: &Path, uri: &Url) -> Option<String> {
    let path = uri.to_file_path().ok()?;
    let relative = path.strip_prefix(root).ok()?;
    let mut joined = String::new();
    for component in relative.components() {
        if !joined.is_empty() {
            joined.push('/');
        }
        joined.push_str(&component.as_os_str().to_string_lossy());
    }
    (!joined.is_empty()).then_some(joined)
}

fn completion_kind(suggestion: &Suggestion) -> CompletionItemKind {
    match suggestion {
        Suggestion::ExistingNote(_) | Suggestion::NewNote(_) | Suggestion::AliasNote(_) => {
            CompletionItemKind::FILE
        }
        Suggestion::Folder(_) => CompletionItemKind::FOLDER,
        Suggestion::Template(_) => CompletionItemKind::SNIPPET,
        Suggestion::Header(_) => CompletionItemKind::CLASS,
        Suggestion::NotFound(_) => CompletionItemKind::TEXT,
    }
}

/// What the client matches the typed text against. Has to start with
/// the trigger symbol because the replaced range includes it; alias
/// rows append the alias so typing it keeps the row visible.
fn filter_text(suggestion: &Suggestion, symbol: &str) -> String {
    let base = suggestion.text_for_line_update();
    match suggestion {
        Suggestion::AliasNote(n) => match n.alias() {
            Some(alias) => format!("{}{}|{}", symbol, base, alias),
            None => format!("{}{}", symbol, base),
        },
        _ => format!("{}{}", symbol, base),
    }
}

/// Build the completion item for one suggestion. `index` pins the
/// server-side ranking; the text edit replaces the whole trigger span,
/// symbol included. Not-found rows replace the span with itself.
pub fn completion_item(
    index: usize,
    suggestion: &Suggestion,
    replace_range: Range,
    original_text: &str,
    symbol: &str,
    command: Option<Command>,
) -> CompletionItem {
    let payload = suggestion.render();

    let new_text = match suggestion {
        Suggestion::NotFound(_) => original_text.to_string(),
        _ => suggestion.wikilink_markup(),
    };

    let mut detail = payload.note;
    if let Some(flair) = payload.flair {
        if detail.is_empty() {
            detail = flair;
        } else {
            detail = format!("{} ({})", detail, flair);
        }
    }

    CompletionItem {
        label: payload.content,
        kind: Some(completion_kind(suggestion)),
        detail: (!detail.is_empty()).then_some(detail),
        filter_text: Some(filter_text(suggestion, symbol)),
        sort_text: Some(format!("{:04}", index)),
        preselect: (index == 0 && !matches!(suggestion, Suggestion::NotFound(_)))
            .then_some(true),
        text_edit: Some(CompletionTextEdit::Edit(TextEdit {
            range: replace_range,
            new_text,
        })),
        command,
        ..Default::default()
    }
}

/// One picker row for the `synapse/suggestPaths` result.
pub fn path_suggestion(suggestion: &Suggestion) -> PathSuggestion {
    let payload = suggestion.render();
    PathSuggestion {
        content: payload.content,
        note: payload.note,
        flair: payload.flair,
        insert_text: suggestion.text_for_line_update(),
    }
}

/// A workspace edit creating the planned note. The client creates
/// missing folders on the path itself; a file already there is left
/// alone and simply becomes the link target.
pub fn creation_plan_to_workspace_edit(
    root: &Path,
    plan: &NoteCreationPlan,
) -> Option<WorkspaceEdit> {
    let uri = Url::from_file_path(root.join(&plan.note_path)).ok()?;

    let create = CreateFile {
        uri,
        options: Some(CreateFileOptions {
            overwrite: Some(false),
            ignore_if_exists: Some(true),
        }),
        annotation_id: None,
    };

    Some(WorkspaceEdit {
        changes: None,
        document_changes: Some(DocumentChanges::Operations(vec![
            DocumentChangeOperation::Op(ResourceOp::Create(create)),
        ])),
        change_annotations: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use synapse_core::find_trigger_span;
    use synapse_core::suggestion::NoteSuggestion;

    #[test]
    fn utf16_offsets_round_trip_past_wide_characters() {
        // "𝕊" is one char but two UTF-16 units.
        let line = "a𝕊b @note";

        assert_eq!(utf16_to_char_offset(line, 0), 0);
        assert_eq!(utf16_to_char_offset(line, 1), 1);
        assert_eq!(utf16_to_char_offset(line, 3), 2);
        assert_eq!(utf16_to_char_offset(line, 100), line.chars().count());

        assert_eq!(char_to_utf16_offset(line, 2), 3);
        assert_eq!(char_to_utf16_offset(line, line.chars().count()), 10);
    }

    #[test]
    fn span_range_counts_utf16_units() {
        let line = "𝕊𝕊 @bob";
        let span = find_trigger_span(line, line.chars().count(), "@").expect("span");

        let range = span_to_range(line, 3, &span);
        assert_eq!(range.start, Position { line: 3, character: 5 });
        assert_eq!(range.end, Position { line: 3, character: 9 });
    }

    #[test]
    fn vault_relative_strips_the_root() {
        let root = Path::new("/vault");
        let uri = Url::from_file_path("/vault/folder/note.md").unwrap();
        assert_eq!(
            vault_relative(root, &uri).as_deref(),
            Some("folder/note.md")
        );

        let outside = Url::from_file_path("/elsewhere/note.md").unwrap();
        assert_eq!(vault_relative(root, &outside), None);
    }

    #[test]
    fn items_replace_the_span_with_link_markup() {
        let suggestion = Suggestion::ExistingNote(NoteSuggestion::from_trigger("folder/bob.md"));
        let range = Range {
            start: Position { line: 0, character: 4 },
            end: Position { line: 0, character: 8 },
        };

        let item = completion_item(1, &suggestion, range, "@bob", "@", None);

        assert_eq!(item.label, "bob");
        assert_eq!(item.kind, Some(CompletionItemKind::FILE));
        assert_eq!(item.sort_text.as_deref(), Some("0001"));
        assert_eq!(item.preselect, None);
        match item.text_edit {
            Some(CompletionTextEdit::Edit(edit)) => {
                assert_eq!(edit.range, range);
                assert_eq!(edit.new_text, "[[folder/bob]]");
            }
            other => panic!("unexpected edit: {:?}", other),
        }
    }

    #[test]
    fn not_found_items_leave_the_typed_text_alone() {
        let suggestion = Suggestion::NotFound(
            synapse_core::suggestion::NotFoundSuggestion::new("No folders found", "typed"),
        );
        let range = Range {
            start: Position { line: 2, character: 0 },
            end: Position { line: 2, character: 6 },
        };

        let item = completion_item(0, &suggestion, range, "@typed", "@", None);

        assert_eq!(item.preselect, None);
        match item.text_edit {
            Some(CompletionTextEdit::Edit(edit)) => assert_eq!(edit.new_text, "@typed"),
            other => panic!("unexpected edit: {:?}", other),
        }
    }

    #[test]
    fn alias_rows_keep_filtering_by_alias() {
        let suggestion =
            Suggestion::AliasNote(NoteSuggestion::with_alias("bob.md", "the builder"));
        assert_eq!(filter_text(&suggestion, "@"), "@bob|the builder");
    }

    #[test]
    fn creation_edit_targets_the_planned_file() {
        let plan = NoteCreationPlan {
            note_path: "daily/recipe.md".to_string(),
            folder_to_create: Some("daily".to_string()),
        };

        let edit = creation_plan_to_workspace_edit(Path::new("/vault"), &plan).expect("edit");
        let Some(DocumentChanges::Operations(ops)) = edit.document_changes else {
            panic!("expected operations");
        };
        assert_eq!(ops.len(), 1);
        match &ops[0] {
            DocumentChangeOperation::Op(ResourceOp::Create(create)) => {
                assert_eq!(create.uri.path(), "/vault/daily/recipe.md");
                assert_eq!(
                    create.options.as_ref().and_then(|o| o.ignore_if_exists),
                    Some(true)
                );
            }
            other => panic!("unexpected op: {:?}", other),
        }
    }
}
