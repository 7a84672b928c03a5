use std::collections::BTreeSet;

use star_system::normalize_key;

/// Systems the player has entered, keyed by lowercase name
///
/// Append-only during play. Ordered so snapshots serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitedSet {
    names: BTreeSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visit; returns true if the system was not visited before.
    /// Blank names are ignored.
    pub fn mark(&mut self, name: &str) -> bool {
        match normalize_key(name) {
            Some(key) => self.names.insert(key),
            None => false,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        normalize_key(name).is_some_and(|key| self.names.contains(&key))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }
}

impl<S: AsRef<str>> Extend<S> for VisitedSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.mark(name.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for VisitedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
