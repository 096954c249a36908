use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Case-insensitive substring search over name and category.
pub fn run(catalog: &Catalog, keyword: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_items(catalog.search(keyword));
    if result.listed_items.is_empty() {
        result.add_message(CmdMessage::info("No items match the search."));
    }
    Ok(result)
}
