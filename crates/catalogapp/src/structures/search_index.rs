//! # Search Index
//!
//! A plain binary search tree keyed by item id. No rebalancing: lookups are
//! O(log n) expected and O(n) when ids arrive already sorted.
//!
//! ## Invariant
//!
//! For every node, all ids in the left subtree are smaller and all ids in the right
//! subtree are larger. Ids are unique.
//!
//! ## Deletion
//!
//! - Leaf or single child: the child (or nothing) is spliced into the parent link.
//! - Two children: the node takes the item of its inorder successor (the minimum of
//!   the right subtree), then the successor's original node is removed from the right
//!   subtree by the *successor's* id. That node has no left child, so the second
//!   removal is always a direct splice.
//!
//! Descent is iterative through `&mut Link` cursors, so a degenerate (list-shaped)
//! tree costs time but never stack depth.

use crate::model::{id_of, ItemId, ItemRef};
use std::cmp::Ordering;
use std::rc::Rc;
use tracing::warn;

type Link = Option<Box<TreeNode>>;

struct TreeNode {
    item: ItemRef,
    left: Link,
    right: Link,
}

impl TreeNode {
    fn new(item: ItemRef) -> Self {
        Self {
            item,
            left: None,
            right: None,
        }
    }

    fn id(&self) -> ItemId {
        id_of(&self.item)
    }
}

#[derive(Default)]
pub struct SearchIndex {
    root: Link,
    len: usize,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts by id. A colliding id leaves the tree untouched, logs a warning and
    /// returns false; the catalog rejects duplicates before this point.
    pub fn insert(&mut self, item: ItemRef) -> bool {
        let id = id_of(&item);
        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            cursor = match id.cmp(&node.id()) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    warn!(id, "duplicate id, not inserted into search index");
                    return false;
                }
            };
        }
        *cursor = Some(Box::new(TreeNode::new(item)));
        self.len += 1;
        true
    }

    pub fn search(&self, id: ItemId) -> Option<ItemRef> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match id.cmp(&node.id()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(Rc::clone(&node.item)),
            };
        }
        None
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.search(id).is_some()
    }

    /// Removes `id` from the tree, returning the item that was indexed under it.
    pub fn delete(&mut self, id: ItemId) -> Option<ItemRef> {
        let removed = remove_node(&mut self.root, id)?;
        self.len -= 1;
        Some(removed)
    }

    /// Ascending-id traversal. Lazy; holds one stack frame per tree level.
    pub fn inorder(&self) -> Inorder<'_> {
        let mut iter = Inorder { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&TreeNode> = self.root.as_deref().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| [node.left.as_deref(), node.right.as_deref()])
                .flatten()
                .collect();
        }
        height
    }
}

fn remove_node(link: &mut Link, id: ItemId) -> Option<ItemRef> {
    let mut cursor = link;
    while cursor.as_ref().is_some_and(|node| node.id() != id) {
        let node = cursor.as_mut()?;
        cursor = if id < node.id() {
            &mut node.left
        } else {
            &mut node.right
        };
    }

    let mut node = cursor.take()?;
    let removed = Rc::clone(&node.item);
    *cursor = match (node.left.take(), node.right.take()) {
        (None, child) | (child, None) => child,
        (Some(left), Some(right)) => {
            let successor = min_value(&right);
            let successor_id = id_of(&successor);
            node.item = successor;
            node.left = Some(left);
            node.right = Some(right);
            remove_node(&mut node.right, successor_id);
            Some(node)
        }
    };
    Some(removed)
}

/// Leftmost item of a subtree.
fn min_value(subtree: &TreeNode) -> ItemRef {
    let mut node = subtree;
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    Rc::clone(&node.item)
}

// Tear down with an explicit stack: a degenerate tree is as deep as it is long.
impl Drop for SearchIndex {
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

pub struct Inorder<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Inorder<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a TreeNode>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a> Iterator for Inorder<'a> {
    type Item = &'a ItemRef;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.item)
    }
}
