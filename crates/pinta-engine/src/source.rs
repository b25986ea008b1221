//! Page sources.
//!
//! Pages are addressed by opaque ids produced by an external discovery
//! collaborator (a 1-based `N.svg` naming scheme in the shipped shell).
//! The engine only needs existence checks and text reads.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::LoadError;

/// Where page markup comes from.
pub trait PageSource {
    /// True when the page resource exists (the discovery probe).
    fn exists(&self, id: &str) -> bool;

    /// Read the page's SVG text.
    fn read(&self, id: &str) -> Result<String, LoadError>;
}

/// Filesystem-backed source rooted at a pages directory.
#[derive(Debug)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The sequential naming scheme: page number to resource id.
    pub fn page_name(number: u32) -> String {
        format!("{number}.svg")
    }
}

impl PageSource for DirSource {
    fn exists(&self, id: &str) -> bool {
        self.root.join(id).is_file()
    }

    fn read(&self, id: &str) -> Result<String, LoadError> {
        fs::read_to_string(self.root.join(id)).map_err(|e| LoadError::Read {
            page: id.to_string(),
            reason: e.to_string(),
        })
    }
}

/// In-memory source for tests and embedded page sets.
#[derive(Debug, Default)]
pub struct MemorySource {
    pages: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page under an id.
    pub fn insert(&mut self, id: impl Into<String>, markup: impl Into<String>) {
        self.pages.insert(id.into(), markup.into());
    }
}

impl PageSource for MemorySource {
    fn exists(&self, id: &str) -> bool {
        self.pages.contains_key(id)
    }

    fn read(&self, id: &str) -> Result<String, LoadError> {
        self.pages.get(id).cloned().ok_or_else(|| LoadError::Read {
            page: id.to_string(),
            reason: "not registered".to_string(),
        })
    }
}
