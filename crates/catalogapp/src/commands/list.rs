use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListOrder {
    /// Sequential store order.
    #[default]
    Insertion,
    /// Search index inorder (ascending id).
    Sorted,
}

pub fn run(catalog: &Catalog, order: ListOrder) -> Result<CmdResult> {
    let items = match order {
        ListOrder::Insertion => catalog.items().collect(),
        ListOrder::Sorted => catalog.sorted_items().collect(),
    };

    let mut result = CmdResult::default().with_listed_items(items);
    if result.listed_items.is_empty() {
        result.add_message(CmdMessage::info("No items."));
    }
    Ok(result)
}
