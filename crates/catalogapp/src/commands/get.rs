use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::{CatalogError, Result};
use crate::model::ItemId;

/// Point lookup through the search index.
pub fn run(catalog: &Catalog, id: ItemId) -> Result<CmdResult> {
    let item = catalog.find(id).ok_or(CatalogError::NotFound(id))?;
    Ok(CmdResult::default().with_listed_items(vec![item]))
}
