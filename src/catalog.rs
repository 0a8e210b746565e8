//! The scheme catalog: a separate-chaining table mapping scheme names to
//! their pattern templates. The bucket count and the hash (sum of character
//! code points modulo 31) are fixed, which makes the `get_all` enumeration
//! order stable and reproducible across runs. Numbered menus rely on that.

use std::fmt;

use serde::Serialize;

pub const BUCKET_COUNT: usize = 31;

// ------------- Scheme -------------
/// A named morphological pattern. The pattern is a template over the slot
/// markers ف/ع/ل interleaved with literal letters and diacritics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scheme {
    pub name: String,
    pub pattern: String,
}
impl Scheme {
    pub fn new(name: &str, pattern: &str) -> Self {
        Self {
            name: name.to_owned(),
            pattern: pattern.to_owned(),
        }
    }
}
impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.pattern)
    }
}

// ------------- SchemeCatalog -------------
#[derive(Debug)]
pub struct SchemeCatalog {
    buckets: Vec<Vec<Scheme>>,
}
impl SchemeCatalog {
    pub fn new() -> Self {
        Self {
            buckets: (0..BUCKET_COUNT).map(|_| Vec::new()).collect(),
        }
    }
    fn bucket_of(name: &str) -> usize {
        name.chars().map(|c| c as usize).sum::<usize>() % BUCKET_COUNT
    }
    /// Insert a scheme, silently replacing the pattern when the name is
    /// already present (last-write-wins).
    pub fn insert(&mut self, name: &str, pattern: &str) {
        let bucket = &mut self.buckets[Self::bucket_of(name)];
        match bucket.iter_mut().find(|scheme| scheme.name == name) {
            Some(scheme) => scheme.pattern = pattern.to_owned(),
            None => bucket.push(Scheme::new(name, pattern)),
        }
    }
    pub fn get(&self, name: &str) -> Option<&str> {
        self.buckets[Self::bucket_of(name)]
            .iter()
            .find(|scheme| scheme.name == name)
            .map(|scheme| scheme.pattern.as_str())
    }
    /// Drop the named scheme. Removal of an absent name is a no-op that
    /// still reports success.
    pub fn remove(&mut self, name: &str) -> bool {
        self.buckets[Self::bucket_of(name)].retain(|scheme| scheme.name != name);
        true
    }
    /// Remove-then-insert. A rename leaves any external references to the
    /// old name dangling; no repair is attempted.
    pub fn update(&mut self, old_name: &str, name: &str, pattern: &str) {
        self.remove(old_name);
        self.insert(name, pattern);
    }
    /// Every scheme, in bucket order then within-bucket insertion order.
    pub fn get_all(&self) -> Vec<Scheme> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().cloned())
            .collect()
    }
    /// The raw bucket layout, for visualization.
    pub fn buckets(&self) -> &[Vec<Scheme>] {
        &self.buckets
    }
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}
impl Default for SchemeCatalog {
    fn default() -> Self {
        Self::new()
    }
}
