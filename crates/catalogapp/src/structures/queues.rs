//! Two FIFO dispatch queues. Dequeue drains "urgent" before "normal".
//!
//! Queues hold shared handles to items that live in the sequential store; being
//! queued never takes an item out of the catalog.

use crate::error::CatalogError;
use crate::model::{id_of, ItemId, ItemRef};
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    Normal,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::Normal => "normal",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        if label.eq_ignore_ascii_case("urgent") {
            Ok(Priority::Urgent)
        } else if label.eq_ignore_ascii_case("normal") {
            Ok(Priority::Normal)
        } else {
            Err(CatalogError::InvalidPriority(s.to_string()))
        }
    }
}

#[derive(Default)]
pub struct PriorityQueues {
    urgent: VecDeque<ItemRef>,
    normal: VecDeque<ItemRef>,
}

impl PriorityQueues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, priority: Priority, item: ItemRef) {
        self.queue_mut(priority).push_back(item);
    }

    pub fn dequeue(&mut self) -> Option<(Priority, ItemRef)> {
        if let Some(item) = self.urgent.pop_front() {
            return Some((Priority::Urgent, item));
        }
        self.normal
            .pop_front()
            .map(|item| (Priority::Normal, item))
    }

    /// Front-to-back view of one queue.
    pub fn iter(&self, priority: Priority) -> impl Iterator<Item = &ItemRef> {
        self.queue(priority).iter()
    }

    /// Drops every queued reference to `id`, in both queues. Returns how many went.
    pub fn purge(&mut self, id: ItemId) -> usize {
        let before = self.len();
        self.urgent.retain(|item| id_of(item) != id);
        self.normal.retain(|item| id_of(item) != id);
        before - self.len()
    }

    pub fn len_of(&self, priority: Priority) -> usize {
        self.queue(priority).len()
    }

    pub fn len(&self) -> usize {
        self.urgent.len() + self.normal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urgent.is_empty() && self.normal.is_empty()
    }

    fn queue(&self, priority: Priority) -> &VecDeque<ItemRef> {
        match priority {
            Priority::Urgent => &self.urgent,
            Priority::Normal => &self.normal,
        }
    }

    fn queue_mut(&mut self, priority: Priority) -> &mut VecDeque<ItemRef> {
        match priority {
            Priority::Urgent => &mut self.urgent,
            Priority::Normal => &mut self.normal,
        }
    }
}
