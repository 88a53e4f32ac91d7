//! Column headers.

/// A named column: `key` for lookups, `title` for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Header {
    pub key: String,
    pub title: String,
}

impl Header {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
        }
    }
}

/// Ordered header list. Insertion order is column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    items: Vec<Header>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a header.
    pub fn add(&mut self, key: impl Into<String>, title: impl Into<String>) {
        self.items.push(Header::new(key, title));
    }

    /// Returns the header at `idx`, if any.
    pub fn get(&self, idx: usize) -> Option<&Header> {
        self.items.get(idx)
    }

    /// Returns the index of the first header with the given key.
    ///
    /// Keys are not required to be unique; later duplicates are unreachable
    /// by key.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|h| h.key == key)
    }

    pub fn items(&self) -> &[Header] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Header> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = &'a Header;
    type IntoIter = std::slice::Iter<'a, Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
