use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ItemId;

/// New values for an item's descriptive fields. The id never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemUpdate {
    pub name: String,
    pub description: String,
    pub category: String,
}

impl ItemUpdate {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: category.into(),
        }
    }
}

pub fn run(catalog: &mut Catalog, id: ItemId, update: &ItemUpdate) -> Result<CmdResult> {
    let item = catalog.update_item(id, &update.name, &update.description, &update.category)?;

    let mut result = CmdResult::default().with_affected_items(vec![item]);
    result.add_message(CmdMessage::success("Item updated."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::model::Item;

    #[test]
    fn updates_fields() {
        let mut catalog = Catalog::from_items([Item::new(1, "a", "b", "c")]).unwrap();
        let result = run(&mut catalog, 1, &ItemUpdate::new("N", "D", "C")).unwrap();
        assert_eq!(result.affected_items, vec![Item::new(1, "N", "D", "C")]);
        assert_eq!(result.messages[0].content, "Item updated.");
    }

    #[test]
    fn missing_id_is_not_found() {
        let mut catalog = Catalog::from_items([Item::new(1, "a", "b", "c")]).unwrap();
        let err = run(&mut catalog, 2, &ItemUpdate::new("N", "D", "C")).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(2)));
        assert_eq!(catalog.find(1).unwrap(), Item::new(1, "a", "b", "c"));
    }
}
