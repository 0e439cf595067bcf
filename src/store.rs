use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::{identity_key, resolve_in_root};

/// Source of raw page text.
///
/// A fetch either returns the whole page or nothing; failures are not
/// errors for the caller, a missing page is simply a dead end.
pub trait ContentStore {
    /// Fetch the full text of the page named `identity`
    fn fetch(&self, identity: &str) -> Option<String>;
}

impl<S: ContentStore + ?Sized> ContentStore for &S {
    fn fetch(&self, identity: &str) -> Option<String> {
        (**self).fetch(identity)
    }
}

/// Pages stored as files in one directory, named by their identity
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentStore for DirectoryStore {
    fn fetch(&self, identity: &str) -> Option<String> {
        let Some(path) = resolve_in_root(&self.root, identity) else {
            ::log::warn!("Refusing to fetch {}: not a page inside {}", identity, self.root.display());
            return None;
        };

        // Undecodable bytes become U+FFFD rather than losing the page
        match fs::read(&path) {
            Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) => {
                ::log::warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// Pages held in memory, looked up case-insensitively
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pages: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a page
    pub fn with_page(mut self, identity: &str, contents: impl Into<String>) -> Self {
        self.insert(identity, contents);
        self
    }

    pub fn insert(&mut self, identity: &str, contents: impl Into<String>) {
        self.pages.insert(identity_key(identity), contents.into());
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl ContentStore for MemoryStore {
    fn fetch(&self, identity: &str) -> Option<String> {
        self.pages.get(&identity_key(identity)).cloned()
    }
}
