//! Corpus of items and query resolution
//!
//! The corpus is fully materialised before any ranking happens and is
//! read-only afterwards.

mod loader;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::error::{CasebaseError, Result};
use crate::item::Item;

/// Ordered, in-memory collection of items
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    items: Vec<Item>,
}

impl Corpus {
    pub fn new(items: Vec<Item>) -> Self {
        Corpus { items }
    }

    /// Load a corpus from a CSV file with a header row
    pub fn load(path: &Path) -> Result<Self> {
        let start = Instant::now();
        let file = File::open(path)
            .map_err(|e| CasebaseError::io_operation("open corpus", path.display(), e))?;

        let items = loader::read_items(BufReader::new(file), path)?;
        debug!(path = %path.display(), items = items.len(), elapsed = ?start.elapsed(), "load_corpus");

        Ok(Corpus { items })
    }

    /// Load a corpus from any CSV source
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let items = loader::read_items(reader, Path::new("<reader>"))?;
        Ok(Corpus { items })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Find the query item by primary name, ignoring case.
    ///
    /// When several items share the name the first one in corpus order is
    /// returned. That choice is arbitrary; nothing ranks the duplicates.
    pub fn find_by_name(&self, name: &str) -> Result<&Item> {
        self.items
            .iter()
            .find(|item| item.name_matches(name))
            .ok_or_else(|| CasebaseError::not_found("item", name))
    }

    pub fn find_by_id(&self, id: u64) -> Result<&Item> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| CasebaseError::not_found("item id", id))
    }
}

impl From<Vec<Item>> for Corpus {
    fn from(items: Vec<Item>) -> Self {
        Corpus::new(items)
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
