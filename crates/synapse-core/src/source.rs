//! Collaborator contracts.
//!
//! The matching core never talks to an editor or a disk; it pulls
//! everything it ranks through [`VaultSource`]. Implementations own the
//! data and the iteration order; the core is deterministic for
//! whatever fixed sequence one call returns.

/// One path the vault knows about, as reported by the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCandidate {
    /// Vault-relative path, or a bare link target for unresolved links.
    pub path: String,
    /// Whether a file with this path currently exists.
    pub exists_as_file: bool,
    /// Host-reported display alias. The same path may be reported
    /// several times under different aliases.
    pub alias: Option<String>,
}

impl LinkCandidate {
    pub fn existing(path: &str) -> Self {
        LinkCandidate {
            path: path.to_string(),
            exists_as_file: true,
            alias: None,
        }
    }

    pub fn unresolved(path: &str) -> Self {
        LinkCandidate {
            path: path.to_string(),
            exists_as_file: false,
            alias: None,
        }
    }

    pub fn aliased(path: &str, alias: &str) -> Self {
        LinkCandidate {
            path: path.to_string(),
            exists_as_file: true,
            alias: Some(alias.to_string()),
        }
    }
}

/// A heading of an indexed note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingInfo {
    pub text: String,
    pub level: u8,
}

/// Everything the suggestion collectors need from the vault.
pub trait VaultSource: Send + Sync {
    /// Every known link candidate: one per file, one per (file, alias)
    /// pair, one per unresolved link target.
    fn link_candidates(&self) -> Vec<LinkCandidate>;

    /// Every known folder path. The vault root is not included.
    fn folder_paths(&self) -> Vec<String>;

    /// All file paths recursively beneath the given folder.
    fn descendant_files(&self, folder: &str) -> Vec<String>;

    /// Headings of the note at the given path, in document order.
    /// `None` when no such note is indexed.
    fn headings_of(&self, path: &str) -> Option<Vec<HeadingInfo>>;
}
