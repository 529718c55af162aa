//! Synapse Core Library
//!
//! Matching and suggestion logic for wiki-link completion: path
//! parsing, query classification, suggestion collection, the vault
//! index behind it.
//! No editor dependencies, pure logic only.
//!

pub mod collect;
pub mod config;
pub mod creation;
pub mod index;
mod parser;
pub mod path;
pub mod query;
pub mod source;
pub mod suggestion;
pub mod trigger;
pub mod vfs;

pub use collect::{
    suggest_folders, suggest_for_trigger, suggest_headers, suggest_notes, suggest_paths,
    suggest_templates,
};
pub use config::{LinkerSettings, NewNoteLocation};
pub use creation::{plan_for_suggestion, plan_note_creation, NoteCreationPlan};
pub use index::VaultIndex;
pub use path::{FilePath, FolderPath};
pub use source::{HeadingInfo, LinkCandidate, VaultSource};
pub use suggestion::{RenderPayload, Suggestion};
pub use trigger::{find_trigger_span, TriggerSpan};
