//! In-memory vault index.
//!
//! One record per indexed markdown document, keyed by vault path in a
//! `BTreeMap` so every derived sequence (candidates, folders,
//! unresolved links) comes out in a deterministic order. The index is
//! the concrete [`VaultSource`] the suggestion collectors run against.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::parser;
use crate::path::{FilePath, FolderPath};
use crate::source::{HeadingInfo, LinkCandidate, VaultSource};
use crate::vfs::FileSystem;

#[derive(Debug, Clone)]
struct DocumentRecord {
    headings: Vec<HeadingInfo>,
    aliases: Vec<String>,
    link_targets: Vec<String>,
    digest: String,
}

pub struct VaultIndex {
    documents: BTreeMap<String, DocumentRecord>,
}

impl VaultIndex {
    pub fn new() -> Self {
        VaultIndex {
            documents: BTreeMap::new(),
        }
    }

    /// Index every markdown file the file system reports. Unreadable
    /// files are skipped. Returns the paths that were indexed.
    pub fn scan(&mut self, fs: &dyn FileSystem) -> Vec<String> {
        let mut indexed = Vec::new();
        for path in fs.list_markdown_files() {
            if let Ok(content) = fs.read_to_string(&path) {
                self.upsert_document(&path, &content);
                indexed.push(path);
            }
        }
        indexed
    }

    /// (Re-)index one document. A content digest match with the stored
    /// record skips the parse entirely.
    pub fn upsert_document(&mut self, path: &str, content: &str) {
        let digest = parser::content_digest(content);
        if self
            .documents
            .get(path)
            .map_or(false, |record| record.digest == digest)
        {
            return;
        }

        let parsed = parser::parse_document(content);
        self.documents.insert(
            path.to_string(),
            DocumentRecord {
                headings: parsed.headings,
                aliases: parsed.aliases,
                link_targets: parsed.link_targets,
                digest,
            },
        );
    }

    pub fn remove_document(&mut self, path: &str) {
        self.documents.remove(path);
    }

    /// Move a record to a new path, keeping its parsed content.
    pub fn rename_document(&mut self, old_path: &str, new_path: &str) {
        if let Some(record) = self.documents.remove(old_path) {
            self.documents.insert(new_path.to_string(), record);
        }
    }

    pub fn contains_document(&self, path: &str) -> bool {
        self.documents.contains_key(path)
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Every outgoing link that resolves to no indexed file, flattened
    /// into `(source, target)` pairs. Each distinct target of one
    /// source appears once, sources in path order.
    pub fn unresolved_links(&self) -> Vec<(String, String)> {
        let names = self.resolvable_names();
        let mut pairs = Vec::new();
        for (path, record) in &self.documents {
            let mut seen = HashSet::new();
            for target in &record.link_targets {
                if names.contains(&target.to_lowercase()) {
                    continue;
                }
                if seen.insert(target.as_str()) {
                    pairs.push((path.clone(), target.clone()));
                }
            }
        }
        pairs
    }

    /// Every lower-cased name a link target may resolve to: for each
    /// file its extension-less path, its full path, and its bare title.
    fn resolvable_names(&self) -> HashSet<String> {
        let mut names = HashSet::new();
        for path in self.documents.keys() {
            let file = FilePath::parse(path);
            names.insert(file.vault_path_without_extension().to_lowercase());
            names.insert(file.vault_path().to_lowercase());
            names.insert(file.title().to_lowercase());
        }
        names
    }
}

impl Default for VaultIndex {
    fn default() -> Self {
        VaultIndex::new()
    }
}

impl VaultSource for VaultIndex {
    fn link_candidates(&self) -> Vec<LinkCandidate> {
        let mut candidates = Vec::new();
        for (path, record) in &self.documents {
            candidates.push(LinkCandidate::existing(path));
            for alias in &record.aliases {
                candidates.push(LinkCandidate::aliased(path, alias));
            }
        }
        for (_source, target) in self.unresolved_links() {
            candidates.push(LinkCandidate::unresolved(&target));
        }
        candidates
    }

    fn folder_paths(&self) -> Vec<String> {
        let mut folders = BTreeSet::new();
        for path in self.documents.keys() {
            let mut folder = FilePath::parse(path).folder_path().clone();
            while !folder.is_root() {
                folders.insert(folder.vault_path().to_string());
                folder = folder.parent_or_this();
            }
        }
        folders.into_iter().collect()
    }

    fn descendant_files(&self, folder: &str) -> Vec<String> {
        let folder = FolderPath::parse(folder);
        self.documents
            .keys()
            .filter(|path| folder.is_ancestor_of(path))
            .cloned()
            .collect()
    }

    fn headings_of(&self, path: &str) -> Option<Vec<HeadingInfo>> {
        let wanted = path.trim().to_lowercase();
        for (doc_path, record) in &self.documents {
            let file = FilePath::parse(doc_path);
            if file.vault_path_without_extension().to_lowercase() == wanted
                || file.vault_path().to_lowercase() == wanted
                || file.title().to_lowercase() == wanted
            {
                return Some(record.headings.clone());
            }
        }
        None
    }
}
