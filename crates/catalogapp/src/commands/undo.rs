use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(catalog: &mut Catalog) -> Result<CmdResult> {
    let item = catalog.undo_delete()?;

    let mut result = CmdResult::default().with_affected_items(vec![item]);
    result.add_message(CmdMessage::success("Undo done. Item restored."));
    Ok(result)
}
