//! Tag sets attached to rows.
//!
//! A [`TagSet`] is an unordered set of string labels. Datasets filter rows by
//! their tags with [`Dataset::find`](crate::Dataset::find) and friends.
//!
//! The multi-tag predicates never match vacuously: asking whether a set has
//! all (or any) of zero tags is `false`, and so is asking an empty set.

use std::collections::HashSet;

/// A set of distinct string tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    items: HashSet<String>,
}

impl TagSet {
    /// Creates an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tag, returning `true` if it was not already present.
    pub fn add(&mut self, tag: impl Into<String>) -> bool {
        self.items.insert(tag.into())
    }

    /// Returns `true` if the tag is present.
    pub fn has(&self, tag: &str) -> bool {
        self.items.contains(tag)
    }

    /// Returns `true` if every given tag is present.
    ///
    /// Containment, not equality: `{a, b, c}` has all of `[a, b]`.
    /// Returns `false` when `tags` is empty or the set is empty.
    pub fn has_all<I, S>(&self, tags: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.items.is_empty() {
            return false;
        }
        let mut seen = false;
        for tag in tags {
            seen = true;
            if !self.has(tag.as_ref()) {
                return false;
            }
        }
        seen
    }

    /// Returns `true` if at least one given tag is present.
    ///
    /// Returns `false` when `tags` is empty or the set is empty.
    pub fn has_any<I, S>(&self, tags: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.items.is_empty() {
            return false;
        }
        tags.into_iter().any(|tag| self.has(tag.as_ref()))
    }

    /// Returns the tags in no particular order.
    pub fn items(&self) -> Vec<&str> {
        self.items.iter().map(String::as_str).collect()
    }

    /// Returns the number of tags.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no tags.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}
