//! Sarf – a repository of triconsonantal Arabic roots with a templatic
//! morphology engine.
//!
//! The crate centers on three cooperating pieces:
//! * A [`lexicon::RootIndex`] – an AVL-balanced binary search tree keyed by
//!   root string, where each node carries the known derivative words, plus
//!   an inverse (word -> root) index for O(1) reverse lookup.
//! * A [`catalog::SchemeCatalog`] – a separate-chaining store of named
//!   morphological patterns (e.g. "اسم فاعل" -> "فَاعِل") with a stable
//!   enumeration order.
//! * The [`morph`] engine – deterministic generation of a surface word from
//!   a (root, pattern, definiteness) triple, including a fixed-order
//!   catalog of irregularity rewrites for geminate, hollow, hamzated,
//!   assimilated and defective roots, and the inverse validation of a
//!   (word, root) pair which learns successful matches back into the index.
//!
//! ## Modules
//! * [`lexicon`] – the balanced root tree, derivative records and the
//!   inverse index.
//! * [`catalog`] – the name-keyed pattern store.
//! * [`morph`] – slot substitution, irregularity pipeline, tashkeel
//!   stripping and validation.
//! * [`interface`] – the [`interface::Session`] owning one index and one
//!   catalog for the process lifetime.
//! * [`error`] – the crate error type and `Result` alias.
//!
//! ## Quick Start
//! ```
//! use sarf::interface::Session;
//! let mut session = Session::new();
//! session.catalog_mut().insert("اسم فاعل", "فَاعِل");
//! let word = session.generate("كتب", "اسم فاعل", false).unwrap();
//! assert_eq!(word, "كَاتِب");
//! assert_eq!(session.index().find_root_by_word("كَاتِب"), Some("كتب"));
//! ```
//!
//! Everything is single-threaded and in-process: no persistence, no
//! background tasks, and no operation inside the core ever terminates the
//! process. Failure paths degrade to typed negative results.

pub mod catalog;
pub mod error;
pub mod interface;
pub mod lexicon;
pub mod morph;
