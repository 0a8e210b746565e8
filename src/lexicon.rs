//! The root lexicon: an AVL-balanced binary search tree keyed by root string,
//! with an inverse (surface word -> owning root) index maintained on every
//! insert so that reverse lookups are O(1).
//!
//! Roots are never deleted. A root that already exists in the tree has any
//! newly supplied derivatives merged into its list, deduplicated by word.

use core::hash::BuildHasherDefault;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use seahash::SeaHasher;
use serde::Serialize;

pub type WordHasher = BuildHasherDefault<SeaHasher>;

// ------------- Derivative -------------
/// A surface word attached to a root together with the name of the scheme
/// that produced (or matched) it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Derivative {
    pub word: String,
    pub pattern_name: String,
}
impl Derivative {
    pub fn new(word: &str, pattern_name: &str) -> Self {
        Self {
            word: word.to_owned(),
            pattern_name: pattern_name.to_owned(),
        }
    }
}
impl fmt::Display for Derivative {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.pattern_name)
    }
}

// ------------- RootNode -------------
/// One node of the tree: a root, its derivatives in insertion order, and the
/// exclusively owned child subtrees. The height of a leaf is 1.
#[derive(Debug)]
pub struct RootNode {
    root: String,
    derivatives: Vec<Derivative>,
    left: Option<Box<RootNode>>,
    right: Option<Box<RootNode>>,
    height: i32,
}
impl RootNode {
    fn new(root: &str, derivatives: Vec<Derivative>) -> Self {
        Self {
            root: root.to_owned(),
            derivatives,
            left: None,
            right: None,
            height: 1,
        }
    }
    pub fn root(&self) -> &str {
        &self.root
    }
    pub fn derivatives(&self) -> &[Derivative] {
        &self.derivatives
    }
    pub fn height(&self) -> i32 {
        self.height
    }
    // Append derivatives whose words are not already present. Duplicates are
    // silently dropped so the operation is idempotent.
    fn merge(&mut self, derivatives: Vec<Derivative>) {
        for derivative in derivatives {
            if !self.derivatives.iter().any(|d| d.word == derivative.word) {
                self.derivatives.push(derivative);
            }
        }
    }
    fn update_height(&mut self) {
        self.height = 1 + height_of(&self.left).max(height_of(&self.right));
    }
    fn balance(&self) -> i32 {
        height_of(&self.left) - height_of(&self.right)
    }
}

fn height_of(child: &Option<Box<RootNode>>) -> i32 {
    child.as_ref().map_or(0, |node| node.height)
}

// ------------- TreeSnapshot -------------
/// A nested mirror of the live tree, produced for visualization only.
#[derive(Debug, Clone, Serialize)]
pub struct TreeSnapshot {
    pub root: String,
    pub derivatives: Vec<Derivative>,
    pub left: Option<Box<TreeSnapshot>>,
    pub right: Option<Box<TreeSnapshot>>,
}

fn snapshot_of(node: &RootNode) -> TreeSnapshot {
    TreeSnapshot {
        root: node.root.clone(),
        derivatives: node.derivatives.clone(),
        left: node.left.as_deref().map(|n| Box::new(snapshot_of(n))),
        right: node.right.as_deref().map(|n| Box::new(snapshot_of(n))),
    }
}

// ------------- RootIndex -------------
/// The lexicon itself: the tree plus the word -> root inverse index. The
/// inverse index is last-write-wins when two roots ever claim the same word.
#[derive(Debug)]
pub struct RootIndex {
    top: Option<Box<RootNode>>,
    inverse: HashMap<String, String, WordHasher>,
    len: usize,
}
impl RootIndex {
    pub fn new() -> Self {
        Self {
            top: None,
            inverse: HashMap::default(),
            len: 0,
        }
    }
    /// Insert a root, creating a node when absent and merging the supplied
    /// derivatives otherwise. Every supplied derivative word is written to
    /// the inverse index, overwriting any prior owner, even when the word is
    /// dropped as a duplicate inside the node.
    pub fn insert(&mut self, root: &str, derivatives: Vec<Derivative>) {
        for derivative in &derivatives {
            self.inverse
                .insert(derivative.word.clone(), root.to_owned());
        }
        let (top, grew) = insert_node(self.top.take(), root, derivatives);
        self.top = Some(top);
        if grew {
            self.len += 1;
        }
    }
    /// Ordered descent, O(log n) under the balance invariant.
    pub fn search(&self, root: &str) -> Option<&RootNode> {
        let mut current = self.top.as_deref();
        while let Some(node) = current {
            match root.cmp(node.root()) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return Some(node),
            }
        }
        None
    }
    /// O(1) reverse lookup: whichever root most recently claimed the word.
    pub fn find_root_by_word(&self, word: &str) -> Option<&str> {
        self.inverse.get(word).map(String::as_str)
    }
    pub fn snapshot(&self) -> Option<TreeSnapshot> {
        self.top.as_deref().map(snapshot_of)
    }
    /// All roots in ascending order.
    pub fn roots(&self) -> Vec<String> {
        let mut collected = Vec::with_capacity(self.len);
        collect_in_order(self.top.as_deref(), &mut collected);
        collected
    }
    pub fn height(&self) -> i32 {
        height_of(&self.top)
    }
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
impl Default for RootIndex {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_in_order(node: Option<&RootNode>, into: &mut Vec<String>) {
    if let Some(node) = node {
        collect_in_order(node.left.as_deref(), into);
        into.push(node.root.clone());
        collect_in_order(node.right.as_deref(), into);
    }
}

// Recursive ownership-transferring insert: the possibly rotated subtree is
// returned to the caller, which reattaches it. The bool reports whether a new
// node was created.
fn insert_node(
    node: Option<Box<RootNode>>,
    root: &str,
    derivatives: Vec<Derivative>,
) -> (Box<RootNode>, bool) {
    let mut node = match node {
        None => return (Box::new(RootNode::new(root, derivatives)), true),
        Some(node) => node,
    };
    let grew = match root.cmp(node.root.as_str()) {
        Ordering::Less => {
            let (child, grew) = insert_node(node.left.take(), root, derivatives);
            node.left = Some(child);
            grew
        }
        Ordering::Greater => {
            let (child, grew) = insert_node(node.right.take(), root, derivatives);
            node.right = Some(child);
            grew
        }
        Ordering::Equal => {
            node.merge(derivatives);
            return (node, false);
        }
    };
    node.update_height();
    (rebalance(node, root), grew)
}

// The four standard AVL cases, selected by the balance factor and the order
// of the inserted key relative to the heavy child's key. Heights are already
// up to date when this runs.
fn rebalance(mut node: Box<RootNode>, inserted: &str) -> Box<RootNode> {
    let balance = node.balance();
    if balance > 1 {
        // left-right becomes left-left after rotating the left child
        if node
            .left
            .as_ref()
            .is_some_and(|left| inserted > left.root.as_str())
        {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }
    if balance < -1 {
        // right-left becomes right-right after rotating the right child
        if node
            .right
            .as_ref()
            .is_some_and(|right| inserted < right.root.as_str())
        {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }
    node
}

fn rotate_right(mut node: Box<RootNode>) -> Box<RootNode> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

fn rotate_left(mut node: Box<RootNode>) -> Box<RootNode> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}
