use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SedgeError};
use crate::types::{Content, IdField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentRef(usize);

#[derive(Debug, Default)]
pub struct ContentStore {
    items: Vec<Content>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, content: Content) -> ContentRef {
        self.items.push(content);
        ContentRef(self.items.len() - 1)
    }

    // Refs are only minted by `add` and contents are never removed, so
    // indexing is always in bounds.
    pub fn get(&self, content_ref: ContentRef) -> &Content {
        &self.items[content_ref.0]
    }

    pub fn get_mut(&mut self, content_ref: ContentRef) -> &mut Content {
        &mut self.items[content_ref.0]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContentRef, &Content)> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, content)| (ContentRef(index), content))
    }

    pub fn filter(&self, predicate: impl Fn(&Content) -> bool) -> ContentSet {
        let mut set = ContentSet::new();
        for (content_ref, content) in self.iter() {
            if predicate(content) {
                set.insert(content_ref);
            }
        }
        set
    }

    pub fn find(&self, predicate: impl Fn(&Content) -> bool) -> Option<ContentRef> {
        self.iter()
            .find(|(_, content)| predicate(content))
            .map(|(content_ref, _)| content_ref)
    }

    pub fn by_path(&self, path: &str) -> Result<ContentRef> {
        let mut matches = self.iter().filter(|(_, content)| content.path == path);

        let first = matches.next().ok_or_else(|| SedgeError::MissingContent {
            path: path.to_string(),
        })?;

        if matches.next().is_some() {
            return Err(SedgeError::DuplicatePath {
                path: path.to_string(),
            });
        }

        Ok(first.0)
    }

    pub fn translation(&self, content_ref: ContentRef, lang: &str) -> Result<ContentRef> {
        let subject = self.get(content_ref);

        self.find(|content| content.id == subject.id && content.lang == lang)
            .ok_or_else(|| SedgeError::MissingTranslation {
                path: subject.path.clone(),
                lang: lang.to_string(),
            })
    }

    pub fn values(&self, set: &ContentSet, field: IdField) -> Vec<String> {
        set.iter()
            .map(|content_ref| self.get(content_ref).field(field).to_string())
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContentSet {
    refs: Vec<ContentRef>,
    seen: HashSet<ContentRef>,
}

impl ContentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, content_ref: ContentRef) -> bool {
        if !self.seen.insert(content_ref) {
            return false;
        }
        self.refs.push(content_ref);
        true
    }

    pub fn contains(&self, content_ref: ContentRef) -> bool {
        self.seen.contains(&content_ref)
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ContentRef> + '_ {
        self.refs.iter().copied()
    }

    pub fn first(&self) -> Option<ContentRef> {
        self.refs.first().copied()
    }

    pub fn order_by_date_desc(&mut self, store: &ContentStore) {
        // Stable sort: undated contents go last, ties keep insertion order.
        self.refs
            .sort_by(|a, b| store.get(*b).date.cmp(&store.get(*a).date));
    }

    pub fn concat(mut self, other: ContentSet) -> ContentSet {
        for content_ref in other.iter() {
            self.insert(content_ref);
        }
        self
    }
}

impl FromIterator<ContentRef> for ContentSet {
    fn from_iter<I: IntoIterator<Item = ContentRef>>(iter: I) -> Self {
        let mut set = ContentSet::new();
        for content_ref in iter {
            set.insert(content_ref);
        }
        set
    }
}
