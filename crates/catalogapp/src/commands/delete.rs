use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ItemId;

pub fn run(catalog: &mut Catalog, id: ItemId) -> Result<CmdResult> {
    let item = catalog.delete_item(id)?;

    let mut result = CmdResult::default().with_affected_items(vec![item]);
    result.add_message(CmdMessage::success("Item deleted. You can undo."));
    Ok(result)
}
