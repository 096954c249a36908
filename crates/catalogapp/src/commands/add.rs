use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Item;

pub fn run(catalog: &mut Catalog, item: Item) -> Result<CmdResult> {
    catalog.add_item(item.clone())?;

    let mut result = CmdResult::default().with_affected_items(vec![item]);
    result.add_message(CmdMessage::success("Item added."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    #[test]
    fn adds_and_reports() {
        let mut catalog = Catalog::new();
        let result = run(&mut catalog, Item::new(1, "Pen", "Blue", "Office")).unwrap();
        assert_eq!(result.affected_items[0].id(), 1);
        assert_eq!(result.messages[0].content, "Item added.");
        assert!(catalog.find(1).is_some());
    }

    #[test]
    fn duplicate_is_rejected() {
        let mut catalog = Catalog::new();
        run(&mut catalog, Item::new(1, "Pen", "Blue", "Office")).unwrap();
        let err = run(&mut catalog, Item::new(1, "Pencil", "HB", "Office")).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(1)));
        assert!(err.to_string().contains("must be unique"));
        assert_eq!(catalog.find(1).unwrap().name(), "Pen");
    }
}
