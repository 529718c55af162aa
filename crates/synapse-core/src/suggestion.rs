//! Suggestion model.
//!
//! One closed union covers every row the completion popup can show.
//! Construction never fails; every capability (`title`, `render`,
//! insertion text, link markup) is total over all variants.

use crate::path::{FilePath, FolderPath};
use crate::source::LinkCandidate;

/// Text after the first `|` of a trigger, trimmed. Empty means absent.
fn alias_portion(trigger: &str) -> Option<String> {
    let raw = trigger.find('|').map(|i| trigger[i + 1..].trim())?;
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// What the host should draw for one suggestion row. Drawing itself is
/// the host's job; this payload is the whole contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPayload {
    /// Main row text.
    pub content: String,
    /// Secondary context line (folder, owning note, template target).
    pub note: String,
    /// Small trailing badge, when the variant carries one.
    pub flair: Option<String>,
}

/// Shared body of the note-flavored variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSuggestion {
    path: FilePath,
    alias: Option<String>,
}

impl NoteSuggestion {
    /// Build from a raw trigger string, which may carry a `|alias`
    /// suffix.
    pub fn from_trigger(trigger: &str) -> Self {
        NoteSuggestion {
            path: FilePath::parse(trigger),
            alias: alias_portion(trigger),
        }
    }

    /// Build from a vault path plus a host-reported alias.
    pub fn with_alias(path: &str, alias: &str) -> Self {
        let alias = alias.trim();
        NoteSuggestion {
            path: FilePath::parse(path),
            alias: (!alias.is_empty()).then(|| alias.to_string()),
        }
    }

    pub fn path(&self) -> &FilePath {
        &self.path
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn has_alias(&self) -> bool {
        self.alias.is_some()
    }

    /// Same note, different alias. Used when the typed query's alias
    /// overrides whatever the matched candidate carried.
    pub fn replacing_alias(&self, alias: Option<String>) -> Self {
        NoteSuggestion {
            path: self.path.clone(),
            alias,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderSuggestion {
    folder: FolderPath,
}

impl FolderSuggestion {
    pub fn new(folder: FolderPath) -> Self {
        FolderSuggestion { folder }
    }

    pub fn from_path(path: &str) -> Self {
        FolderSuggestion {
            folder: FolderPath::parse(path),
        }
    }

    pub fn folder(&self) -> &FolderPath {
        &self.folder
    }
}

/// A template file offered for the note currently being linked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSuggestion {
    template: FilePath,
    target: NoteSuggestion,
    trigger_symbol: String,
}

impl TemplateSuggestion {
    pub fn new(template: FilePath, target: NoteSuggestion, trigger_symbol: &str) -> Self {
        TemplateSuggestion {
            template,
            target,
            trigger_symbol: trigger_symbol.to_string(),
        }
    }

    pub fn template(&self) -> &FilePath {
        &self.template
    }

    pub fn target(&self) -> &NoteSuggestion {
        &self.target
    }
}

/// A heading inside a known note. Headings are positional: duplicates
/// with the same text and level stay distinct rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSuggestion {
    heading: String,
    level: u8,
    alias: Option<String>,
    note: FilePath,
}

impl HeaderSuggestion {
    pub fn new(heading: &str, level: u8, alias: Option<String>, note: FilePath) -> Self {
        HeaderSuggestion {
            heading: heading.to_string(),
            level,
            alias,
            note,
        }
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    fn target(&self) -> String {
        let base = self.note.vault_path_without_extension();
        format!("{}#{}", base, self.heading)
    }
}

/// Sentinel row shown when a collector has nothing to offer. Selecting
/// it puts the original trigger text back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundSuggestion {
    message: String,
    trigger: String,
}

impl NotFoundSuggestion {
    pub fn new(message: &str, trigger: &str) -> Self {
        NotFoundSuggestion {
            message: message.to_string(),
            trigger: trigger.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    /// A note that exists as a file in the vault.
    ExistingNote(NoteSuggestion),
    /// A note nothing has created yet (unresolved link target, or the
    /// typed query itself).
    NewNote(NoteSuggestion),
    /// An existing note surfaced under one of its host-reported
    /// aliases. The alias is the row's title, so one note can appear
    /// once per alias.
    AliasNote(NoteSuggestion),
    Folder(FolderSuggestion),
    Template(TemplateSuggestion),
    Header(HeaderSuggestion),
    NotFound(NotFoundSuggestion),
}

impl Suggestion {
    /// The typed suggestion for one candidate reported by the source.
    pub fn for_candidate(candidate: &LinkCandidate) -> Suggestion {
        match candidate.alias.as_deref() {
            Some(alias) => Suggestion::AliasNote(NoteSuggestion::with_alias(
                &candidate.path,
                alias,
            )),
            None if candidate.exists_as_file => {
                Suggestion::ExistingNote(NoteSuggestion::from_trigger(&candidate.path))
            }
            None => Suggestion::NewNote(NoteSuggestion::from_trigger(&candidate.path)),
        }
    }

    /// Row title: what the suggestion sorts and displays by.
    pub fn title(&self) -> &str {
        match self {
            Suggestion::ExistingNote(n) | Suggestion::NewNote(n) => n.path.title(),
            Suggestion::AliasNote(n) => n.alias().unwrap_or_else(|| n.path.title()),
            Suggestion::Folder(f) => f.folder.title(),
            Suggestion::Template(t) => t.template.title(),
            Suggestion::Header(h) => &h.heading,
            Suggestion::NotFound(n) => &n.message,
        }
    }

    /// The vault path this row stands for. Deduplication keys off its
    /// lower-cased form.
    pub fn vault_path(&self) -> &str {
        match self {
            Suggestion::ExistingNote(n)
            | Suggestion::NewNote(n)
            | Suggestion::AliasNote(n) => n.path.vault_path(),
            Suggestion::Folder(f) => f.folder.vault_path(),
            Suggestion::Template(t) => t.template.vault_path(),
            Suggestion::Header(h) => h.note.vault_path(),
            Suggestion::NotFound(n) => &n.trigger,
        }
    }

    pub(crate) fn alias(&self) -> Option<&str> {
        match self {
            Suggestion::ExistingNote(n)
            | Suggestion::NewNote(n)
            | Suggestion::AliasNote(n) => n.alias(),
            _ => None,
        }
    }

    /// Text substituted for the trigger while the row is highlighted
    /// but not yet committed.
    pub fn text_for_line_update(&self) -> String {
        match self {
            Suggestion::ExistingNote(n)
            | Suggestion::NewNote(n)
            | Suggestion::AliasNote(n) => n.path.vault_path_without_extension(),
            Suggestion::Folder(f) => f.folder.vault_path().to_string(),
            Suggestion::Template(t) => format!(
                "{}{}{}",
                t.target.path.vault_path_without_extension(),
                t.trigger_symbol,
                t.template.vault_path_without_extension()
            ),
            Suggestion::Header(h) => h.target(),
            Suggestion::NotFound(n) => n.trigger.clone(),
        }
    }

    /// The final text spliced into the document on commit.
    pub fn wikilink_markup(&self) -> String {
        match self {
            Suggestion::ExistingNote(n)
            | Suggestion::NewNote(n)
            | Suggestion::AliasNote(n) => {
                let target = n.path.vault_path_without_extension();
                match n.alias() {
                    Some(alias) => format!("[[{}|{}]]", target, alias),
                    None => format!("[[{}]]", target),
                }
            }
            Suggestion::Folder(f) => f.folder.vault_path().to_string(),
            Suggestion::Template(t) => {
                Suggestion::ExistingNote(t.target.clone()).wikilink_markup()
            }
            Suggestion::Header(h) => match &h.alias {
                Some(alias) => format!("[[{}|{}]]", h.target(), alias),
                None => format!("[[{}]]", h.target()),
            },
            Suggestion::NotFound(n) => n.trigger.clone(),
        }
    }

    /// Data-only render contract; see [`RenderPayload`].
    pub fn render(&self) -> RenderPayload {
        match self {
            Suggestion::ExistingNote(n) | Suggestion::NewNote(n) => RenderPayload {
                content: n.path.title().to_string(),
                note: format!("{}/", n.path.folder_path().vault_path()),
                flair: None,
            },
            Suggestion::AliasNote(n) => RenderPayload {
                content: self.title().to_string(),
                note: format!("{}/", n.path.folder_path().vault_path()),
                flair: Some(n.path.title().to_string()),
            },
            Suggestion::Folder(f) => RenderPayload {
                content: f.folder.title().to_string(),
                note: format!("{}/", f.folder.vault_path()),
                flair: Some("folder".to_string()),
            },
            Suggestion::Template(t) => RenderPayload {
                content: t.template.title().to_string(),
                note: format!("Apply template to {}", t.target.path.title()),
                flair: None,
            },
            Suggestion::Header(h) => RenderPayload {
                content: h.heading.clone(),
                note: format!("{}#", h.note.vault_path_without_extension()),
                flair: Some(format!("H{}", h.level)),
            },
            Suggestion::NotFound(n) => RenderPayload {
                content: n.message.clone(),
                note: String::new(),
                flair: None,
            },
        }
    }
}
