use crate::model::ItemRef;

/// Items removed by delete, most recent last. Unbounded.
#[derive(Default)]
pub struct UndoStack {
    items: Vec<ItemRef>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ItemRef) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<ItemRef> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&ItemRef> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
