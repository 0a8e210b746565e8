//! The session: one root index and one scheme catalog, constructed once and
//! owned for the process lifetime. Every operation goes through the session
//! rather than ambient module-level state, so callers decide where the state
//! lives and exactly one logical actor mutates it at a time.

use tracing::{debug, info};

use crate::catalog::{Scheme, SchemeCatalog};
use crate::error::{Result, SarfError};
use crate::lexicon::{Derivative, RootIndex};
use crate::morph::{apply_scheme, validate};

pub struct Session {
    index: RootIndex,
    catalog: SchemeCatalog,
}

impl Session {
    pub fn new() -> Self {
        Self {
            index: RootIndex::new(),
            catalog: SchemeCatalog::new(),
        }
    }
    /// Seed the index with bare roots. No shape is enforced here: a root
    /// that is not three letters simply never generates or validates.
    pub fn seed_roots<I>(&mut self, roots: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut count = 0usize;
        for root in roots {
            self.index.insert(&root, Vec::new());
            count += 1;
        }
        info!(count, "seeded roots");
    }
    pub fn seed_schemes<'a, I>(&mut self, schemes: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut count = 0usize;
        for (name, pattern) in schemes {
            self.catalog.insert(name, pattern);
            count += 1;
        }
        info!(count, "seeded schemes");
    }
    pub fn index(&self) -> &RootIndex {
        &self.index
    }
    pub fn index_mut(&mut self) -> &mut RootIndex {
        &mut self.index
    }
    pub fn catalog(&self) -> &SchemeCatalog {
        &self.catalog
    }
    pub fn catalog_mut(&mut self) -> &mut SchemeCatalog {
        &mut self.catalog
    }
    /// Generate a derivation from a named scheme and persist it under the
    /// root as a new derivative.
    pub fn generate(&mut self, root: &str, scheme_name: &str, definite: bool) -> Result<String> {
        let pattern = self
            .catalog
            .get(scheme_name)
            .ok_or_else(|| SarfError::UnknownScheme(scheme_name.to_owned()))?;
        let word = apply_scheme(root, pattern, definite);
        if word.is_empty() {
            return Err(SarfError::MalformedRoot(root.to_owned()));
        }
        self.index
            .insert(root, vec![Derivative::new(&word, scheme_name)]);
        debug!(root, scheme = scheme_name, word = %word, "generated derivation");
        Ok(word)
    }
    /// Validate a word against an expected root over every catalogued
    /// scheme. A successful match is learned into the index as a side
    /// effect, so a repeat validation takes the fast path.
    pub fn analyze(&mut self, word: &str, root: &str) -> Option<Scheme> {
        let schemes = self.catalog.get_all();
        let matched = validate(word, root, &schemes, &mut self.index).cloned();
        if let Some(scheme) = &matched {
            debug!(word, root, scheme = %scheme.name, "validated");
        }
        matched
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
