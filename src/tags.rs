use std::collections::HashMap;

use crate::error::{Result, SedgeError};
use crate::store::{ContentSet, ContentStore};
use crate::types::ContentKind;

#[derive(Debug, Default)]
pub struct TagEntry {
    pub occurrences: usize,
    pub contents: ContentSet,
}

#[derive(Debug, Default)]
pub struct TagIndex {
    entries: HashMap<String, TagEntry>,
}

impl TagIndex {
    pub fn build(store: &ContentStore) -> Result<Self> {
        let mut entries: HashMap<String, TagEntry> = HashMap::new();
        let mut indexed_tags: HashMap<String, Vec<String>> = HashMap::new();

        for (content_ref, content) in store.iter() {
            if content.kind != ContentKind::Blog || content.tags.is_empty() {
                continue;
            }

            if content.id.is_empty() {
                return Err(SedgeError::MissingId {
                    path: content.path.clone(),
                });
            }

            let seen = indexed_tags.entry(content.id.clone()).or_default();

            for tag in &content.tags {
                let entry = entries.entry(tag.clone()).or_default();

                // A tag repeated within one content counts as an occurrence
                // but is never inserted twice.
                if seen.contains(tag) {
                    entry.occurrences += 1;
                }

                entry.contents.insert(content_ref);
                seen.push(tag.clone());
            }
        }

        for entry in entries.values_mut() {
            entry.contents.order_by_date_desc(store);
        }

        log::debug!("tag index built with {} tags", entries.len());

        Ok(Self { entries })
    }

    pub fn get(&self, tag: &str) -> Option<&TagEntry> {
        self.entries.get(tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
