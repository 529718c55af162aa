use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use synapse_core::vfs::PhysicalFileSystem;
use synapse_core::{LinkerSettings, VaultIndex};
use tokio::sync::RwLock;
use url::Url;

/// The indexed vault together with the file system it was scanned
/// from.
pub struct VaultState {
    pub fs: PhysicalFileSystem,
    pub index: VaultIndex,
}

impl VaultState {
    pub fn root(&self) -> &Path {
        self.fs.root()
    }
}

/// Global state for LSP server
/// Must be Send + Sync
#[derive(Clone)]
pub struct GlobalState {
    /// RwLock-protected vault index
    /// Read operations (completion, path queries) are concurrent
    /// Write operations (didChange) are exclusive
    pub vault: Arc<RwLock<Option<VaultState>>>,
    /// Current linker settings, replaced wholesale on configuration
    /// changes
    pub settings: Arc<RwLock<LinkerSettings>>,
    /// Current text of open documents, keyed by URI
    pub document_cache: Arc<RwLock<HashMap<Url, String>>>,
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            vault: Arc::new(RwLock::new(None)),
            settings: Arc::new(RwLock::new(LinkerSettings::default())),
            document_cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}
