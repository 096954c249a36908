use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    let problems = catalog.verify();
    let stats = catalog.stats();
    let mut result = CmdResult {
        stats: Some(stats),
        ..Default::default()
    };

    if problems.is_empty() {
        result.add_message(CmdMessage::success("No inconsistencies found."));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "Found {} inconsistencies:",
            problems.len()
        )));
        for problem in problems {
            result.add_message(CmdMessage::error(format!("  - {}", problem)));
        }
    }

    result.add_message(CmdMessage::info(format!(
        "{} items, index height {}, {} undoable, queued {} urgent / {} normal",
        stats.items, stats.index_height, stats.undo_depth, stats.urgent, stats.normal
    )));
    Ok(result)
}
