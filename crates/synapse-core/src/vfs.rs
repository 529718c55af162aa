use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Abstract interface for vault file access. Paths are vault-relative,
/// forward-slash separated.
pub trait FileSystem: Send + Sync {
    /// Read the entire contents of a vault file into a string.
    fn read_to_string(&self, vault_path: &str) -> std::io::Result<String>;

    /// List all markdown files in the vault. Recursive; hidden
    /// directories (`.obsidian` and friends) are not entered.
    fn list_markdown_files(&self) -> Vec<String>;
}

/// Standard implementation of FileSystem using std::fs and walkdir,
/// rooted at the vault directory.
pub struct PhysicalFileSystem {
    root: PathBuf,
}

impl PhysicalFileSystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        PhysicalFileSystem { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn vault_relative(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let mut joined = String::new();
        for component in relative.components() {
            if !joined.is_empty() {
                joined.push('/');
            }
            joined.push_str(&component.as_os_str().to_string_lossy());
        }
        (!joined.is_empty()).then_some(joined)
    }
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map_or(false, |name| name.starts_with('.'))
}

impl FileSystem for PhysicalFileSystem {
    fn read_to_string(&self, vault_path: &str) -> std::io::Result<String> {
        std::fs::read_to_string(self.root.join(vault_path))
    }

    fn list_markdown_files(&self) -> Vec<String> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext == "md" {
                        if let Some(vault_path) = self.vault_relative(path) {
                            files.push(vault_path);
                        }
                    }
                }
            }
        }

        files
    }
}
