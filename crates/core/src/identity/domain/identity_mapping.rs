use std::collections::HashMap;

/// Filename → identity label, iterated in first-insertion order.
///
/// Inserting a filename that is already present replaces its identity but
/// keeps the filename at its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityMapping {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl IdentityMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, filename: impl Into<String>, identity: impl Into<String>) {
        let filename = filename.into();
        let identity = identity.into();
        match self.index.get(&filename) {
            Some(&pos) => self.entries[pos].1 = identity,
            None => {
                self.index.insert(filename.clone(), self.entries.len());
                self.entries.push((filename, identity));
            }
        }
    }

    pub fn get(&self, filename: &str) -> Option<&str> {
        self.index
            .get(filename)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(filename, identity)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(f, id)| (f.as_str(), id.as_str()))
    }
}

impl<F: Into<String>, I: Into<String>> FromIterator<(F, I)> for IdentityMapping {
    fn from_iter<T: IntoIterator<Item = (F, I)>>(iter: T) -> Self {
        let mut mapping = Self::new();
        for (filename, identity) in iter {
            mapping.insert(filename, identity);
        }
        mapping
    }
}
