//! Singly linked store of items in insertion order.
//!
//! Appends walk to the tail (O(n)). The catalog is expected to stay small, and the
//! walk keeps the list free of a second, aliasing tail pointer.

use crate::model::{id_of, ItemId, ItemRef};
use std::rc::Rc;

type Link = Option<Box<Node>>;

struct Node {
    item: ItemRef,
    next: Link,
}

#[derive(Default)]
pub struct SequentialStore {
    head: Link,
    len: usize,
}

impl SequentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Appends to the end. Uniqueness is the caller's concern.
    pub fn add(&mut self, item: ItemRef) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { item, next: None }));
        self.len += 1;
    }

    /// Unlinks the first node holding `id` and hands its item back.
    pub fn remove(&mut self, id: ItemId) -> Option<ItemRef> {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| id_of(&node.item) != id) {
            cursor = &mut cursor.as_mut()?.next;
        }
        let mut removed = cursor.take()?;
        *cursor = removed.next.take();
        self.len -= 1;
        Some(removed.item)
    }

    /// Removes the item with `id`, reporting whether it was present.
    pub fn delete(&mut self, id: ItemId) -> bool {
        self.remove(id).is_some()
    }

    /// Linear scan; returns the live handle, not a copy.
    pub fn find(&self, id: ItemId) -> Option<ItemRef> {
        self.iter()
            .find(|item| id_of(item) == id)
            .map(Rc::clone)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.iter().any(|item| id_of(item) == id)
    }

    /// Rewrites the descriptive fields in place. Returns false if `id` is absent.
    pub fn update(&mut self, id: ItemId, name: &str, description: &str, category: &str) -> bool {
        match self.find(id) {
            Some(item) => {
                item.borrow_mut().set_fields(name, description, category);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

// Unlink iteratively so long chains do not recurse through Box drops.
impl Drop for SequentialStore {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ItemRef;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.item
        })
    }
}

impl<'a> IntoIterator for &'a SequentialStore {
    type Item = &'a ItemRef;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
