use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{CatalogFile, SnapshotStore};

/// Writes the sequential store, in order, under `name`.
pub fn save<S: SnapshotStore>(catalog: &Catalog, store: &S, name: &str) -> Result<CmdResult> {
    let file = CatalogFile::new(catalog.items().collect());
    store.save(name, &file)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Items saved to file."));
    Ok(result)
}

/// Replaces the catalog with the snapshot under `name`.
///
/// The snapshot is read and validated in full first; on any error the catalog
/// keeps its current contents.
pub fn load<S: SnapshotStore>(catalog: &mut Catalog, store: &S, name: &str) -> Result<CmdResult> {
    let file = store.load(name)?;
    catalog.replace_contents(file.items)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Items loaded from file."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;
    use crate::store::memory::InMemoryStore;
    use crate::test_utils::sample_items;

    #[test]
    fn round_trip_preserves_order_and_fields() {
        let store = InMemoryStore::new();
        let original = Catalog::from_items(sample_items()).unwrap();
        save(&original, &store, "snap").unwrap();

        let mut fresh = Catalog::new();
        let result = load(&mut fresh, &store, "snap").unwrap();
        assert_eq!(result.messages[0].content, "Items loaded from file.");
        assert_eq!(
            fresh.items().collect::<Vec<_>>(),
            original.items().collect::<Vec<_>>()
        );
        assert!(fresh.verify().is_empty());
    }

    #[test]
    fn failed_load_keeps_current_state() {
        let store = InMemoryStore::new();
        store.put_raw("bad", "{ definitely not a snapshot");
        let mut catalog = Catalog::from_items([Item::new(1, "Keep", "me", "safe")]).unwrap();

        assert!(load(&mut catalog, &store, "bad").unwrap_err().is_persistence());
        assert!(load(&mut catalog, &store, "absent").unwrap_err().is_persistence());
        assert_eq!(
            catalog.items().collect::<Vec<_>>(),
            vec![Item::new(1, "Keep", "me", "safe")]
        );
    }

    #[test]
    fn failed_save_reports_persistence_error() {
        let store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        let catalog = Catalog::from_items(sample_items()).unwrap();
        assert!(save(&catalog, &store, "snap").unwrap_err().is_persistence());
        assert!(!store.exists("snap"));
    }

    #[test]
    fn load_clears_queues_and_undo_history() {
        let store = InMemoryStore::new();
        let mut catalog = Catalog::from_items(sample_items()).unwrap();
        save(&catalog, &store, "snap").unwrap();

        catalog.enqueue(50, "urgent").unwrap();
        catalog.delete_item(30).unwrap();
        load(&mut catalog, &store, "snap").unwrap();

        let stats = catalog.stats();
        assert_eq!((stats.items, stats.undo_depth, stats.urgent), (5, 0, 0));
        assert!(catalog.dequeue().is_none());
    }
}
