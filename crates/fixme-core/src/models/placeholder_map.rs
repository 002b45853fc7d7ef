use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One masked span: the token written into the text and the original it replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    pub token: String,
    pub original: String,
}

/// Placeholder token → original URL, in left-to-right discovery order.
///
/// Call-scoped: produced by one mask call, consumed by the matching unmask.
/// Serialized as the plain list of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Placeholder>", into = "Vec<Placeholder>")]
pub struct PlaceholderMap {
    entries: Vec<Placeholder>,
    /// Token → position of its first entry.
    index: HashMap<String, usize>,
}

impl PlaceholderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a mapping. Tokens are expected to be unique within one map;
    /// a repeated token keeps resolving to its first entry.
    pub fn push(&mut self, token: impl Into<String>, original: impl Into<String>) {
        let token = token.into();
        self.index.entry(token.clone()).or_insert(self.entries.len());
        self.entries.push(Placeholder {
            token,
            original: original.into(),
        });
    }

    /// Original text for `token`, if it was recorded.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.index
            .get(token)
            .map(|&i| self.entries[i].original.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Placeholder> {
        self.entries.iter()
    }

    /// Tokens in discovery order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|p| p.token.as_str())
    }
}

impl<'a> IntoIterator for &'a PlaceholderMap {
    type Item = &'a Placeholder;
    type IntoIter = std::slice::Iter<'a, Placeholder>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<Vec<Placeholder>> for PlaceholderMap {
    fn from(entries: Vec<Placeholder>) -> Self {
        let mut map = Self::new();
        for entry in entries {
            map.push(entry.token, entry.original);
        }
        map
    }
}

impl From<PlaceholderMap> for Vec<Placeholder> {
    fn from(map: PlaceholderMap) -> Self {
        map.entries
    }
}
