use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, QueueSnapshot};
use crate::error::Result;
use crate::model::ItemId;
use crate::structures::Priority;

/// Appends `id` to the queue named by `label`.
pub fn enqueue(catalog: &mut Catalog, id: ItemId, label: &str) -> Result<CmdResult> {
    let (priority, item) = catalog.enqueue(id, label)?;

    let mut result = CmdResult::default().with_affected_items(vec![item]);
    result.add_message(CmdMessage::success(format!(
        "Item added to {} queue.",
        priority
    )));
    Ok(result)
}

/// Takes the next item, urgent first. An empty pair of queues is not an error.
pub fn dequeue(catalog: &mut Catalog) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match catalog.dequeue() {
        Some((priority, item)) => {
            result.add_message(CmdMessage::success(format!(
                "Dequeued {} item: {}",
                priority, item
            )));
            result.affected_items.push(item);
        }
        None => result.add_message(CmdMessage::info("No items in priority queues.")),
    }
    Ok(result)
}

/// Both queues, front first, without consuming anything.
pub fn view(catalog: &Catalog) -> Result<CmdResult> {
    let snapshot = QueueSnapshot {
        urgent: catalog.queued(Priority::Urgent),
        normal: catalog.queued(Priority::Normal),
    };
    Ok(CmdResult {
        queues: Some(snapshot),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::model::Item;
    use crate::test_utils::sample_items;

    fn ids(items: &[Item]) -> Vec<ItemId> {
        items.iter().map(Item::id).collect()
    }

    #[test]
    fn urgent_then_normal_then_empty() {
        let mut catalog = Catalog::from_items(sample_items()).unwrap();
        enqueue(&mut catalog, 30, "normal").unwrap();
        enqueue(&mut catalog, 50, "Urgent").unwrap();

        let first = dequeue(&mut catalog).unwrap();
        assert_eq!(first.affected_items[0].id(), 50);
        assert!(first.messages[0].content.starts_with("Dequeued urgent item"));

        let second = dequeue(&mut catalog).unwrap();
        assert_eq!(second.affected_items[0].id(), 30);

        let third = dequeue(&mut catalog).unwrap();
        assert!(third.affected_items.is_empty());
        assert_eq!(third.messages[0].content, "No items in priority queues.");
    }

    #[test]
    fn view_does_not_consume() {
        let mut catalog = Catalog::from_items(sample_items()).unwrap();
        enqueue(&mut catalog, 20, "normal").unwrap();
        enqueue(&mut catalog, 40, "urgent").unwrap();
        enqueue(&mut catalog, 70, "normal").unwrap();

        let first = view(&catalog).unwrap().queues.unwrap();
        assert_eq!(ids(&first.urgent), vec![40]);
        assert_eq!(ids(&first.normal), vec![20, 70]);
        assert_eq!(view(&catalog).unwrap().queues.unwrap(), first);
    }

    #[test]
    fn enqueue_failures() {
        let mut catalog = Catalog::from_items(sample_items()).unwrap();
        assert!(matches!(
            enqueue(&mut catalog, 99, "urgent"),
            Err(CatalogError::NotFound(99))
        ));
        let err = enqueue(&mut catalog, 50, "asap").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPriority(_)));
        assert!(err.to_string().contains("asap"));
        assert_eq!(view(&catalog).unwrap().queues.unwrap(), QueueSnapshot::default());
    }
}
