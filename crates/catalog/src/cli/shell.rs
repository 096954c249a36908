//! The interactive menu.
//!
//! One catalog lives for the whole session. Each menu pick is turned into an
//! [`Action`] by prompting (the only part that touches the terminal), then
//! performed against the API. A failed operation is printed and the menu comes
//! back; only a broken terminal ends the session early.

use super::render::{print_result, render_error};
use catalogapp::api::CatalogApi;
use catalogapp::commands::list::ListOrder;
use catalogapp::commands::update::ItemUpdate;
use catalogapp::commands::CmdResult;
use catalogapp::error::Result;
use catalogapp::model::{Item, ItemId};
use catalogapp::store::SnapshotStore;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use std::io;
use tracing::debug;

const MENU: [&str; 14] = [
    "Add Item",
    "View Items",
    "Update Item",
    "Delete Item",
    "Undo Delete",
    "Add to Priority Queue",
    "Remove from Priority Queue",
    "View Priority Queues",
    "Search Item",
    "View BST",
    "Search by Name/Category",
    "Save Items to File",
    "Load Items from File",
    "Exit",
];

/// One fully-prompted menu operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Add(Item),
    ViewAll,
    Update(ItemId, ItemUpdate),
    Delete(ItemId),
    Undo,
    Enqueue(ItemId, String),
    Dequeue,
    ViewQueues,
    Get(ItemId),
    ViewSorted,
    Search(String),
    Save(String),
    Load(String),
    Exit,
}

pub fn run<S: SnapshotStore>(
    api: &mut CatalogApi<S>,
    file: Option<&str>,
    autosave: bool,
) -> Result<()> {
    let theme = ColorfulTheme::default();
    let snapshot_name = file.unwrap_or(api.default_file()).to_string();

    loop {
        let pick = Select::with_theme(&theme)
            .with_prompt("Menu")
            .items(&MENU)
            .default(0)
            .interact_opt()
            .map_err(io::Error::from)?;

        let action = match pick {
            Some(index) => prompt_action(&theme, index, &snapshot_name)?,
            None => Action::Exit,
        };
        if action == Action::Exit {
            println!("Exiting...");
            break;
        }

        debug!(?action, "menu action");
        match perform(api, action) {
            Ok(result) => print_result(&result),
            Err(e) => eprintln!("{}", render_error(&e)),
        }
    }

    if autosave && api.is_dirty() {
        let result = api.save(Some(&snapshot_name))?;
        print_result(&result);
    }
    Ok(())
}

/// Runs one action against the API.
pub fn perform<S: SnapshotStore>(api: &mut CatalogApi<S>, action: Action) -> Result<CmdResult> {
    match action {
        Action::Add(item) => api.add_item(item),
        Action::ViewAll => api.list_items(ListOrder::Insertion),
        Action::Update(id, update) => api.update_item(id, &update),
        Action::Delete(id) => api.delete_item(id),
        Action::Undo => api.undo_delete(),
        Action::Enqueue(id, priority) => api.enqueue(id, &priority),
        Action::Dequeue => api.dequeue(),
        Action::ViewQueues => api.view_queues(),
        Action::Get(id) => api.get_item(id),
        Action::ViewSorted => api.list_items(ListOrder::Sorted),
        Action::Search(keyword) => api.search(&keyword),
        Action::Save(name) => api.save(Some(&name)),
        Action::Load(name) => api.load(Some(&name)),
        Action::Exit => Ok(CmdResult::default()),
    }
}

fn prompt_action(theme: &ColorfulTheme, index: usize, snapshot_name: &str) -> io::Result<Action> {
    let action = match index {
        0 => Action::Add(Item::new(
            prompt_id(theme, "ID")?,
            prompt_text(theme, "Name")?,
            prompt_text(theme, "Description")?,
            prompt_text(theme, "Category")?,
        )),
        1 => Action::ViewAll,
        2 => {
            let id = prompt_id(theme, "ID to update")?;
            Action::Update(
                id,
                ItemUpdate::new(
                    prompt_text(theme, "New Name")?,
                    prompt_text(theme, "New Description")?,
                    prompt_text(theme, "New Category")?,
                ),
            )
        }
        3 => Action::Delete(prompt_id(theme, "ID to delete")?),
        4 => Action::Undo,
        5 => {
            let id = prompt_id(theme, "ID to enqueue")?;
            Action::Enqueue(id, prompt_text(theme, "Priority (urgent/normal)")?)
        }
        6 => Action::Dequeue,
        7 => Action::ViewQueues,
        8 => Action::Get(prompt_id(theme, "ID to search in BST")?),
        9 => Action::ViewSorted,
        10 => Action::Search(prompt_text(theme, "Enter keyword (name or category)")?),
        11 => Action::Save(prompt_file(theme, "Enter filename to save", snapshot_name)?),
        12 => Action::Load(prompt_file(theme, "Enter filename to load", snapshot_name)?),
        _ => Action::Exit,
    };
    Ok(action)
}

fn prompt_id(theme: &ColorfulTheme, prompt: &str) -> io::Result<ItemId> {
    Input::<ItemId>::with_theme(theme)
        .with_prompt(prompt)
        .interact_text()
        .map_err(io::Error::from)
}

fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> io::Result<String> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(io::Error::from)
}

fn prompt_file(theme: &ColorfulTheme, prompt: &str, default: &str) -> io::Result<String> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()
        .map_err(io::Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalogapp::catalog::Catalog;
    use catalogapp::error::CatalogError;
    use catalogapp::store::memory::InMemoryStore;

    fn api() -> CatalogApi<InMemoryStore> {
        CatalogApi::new(Catalog::new(), InMemoryStore::new(), "catalog.json")
    }

    #[test]
    fn menu_matches_action_count() {
        assert_eq!(MENU.len(), 14);
        assert_eq!(MENU[13], "Exit");
    }

    #[test]
    fn actions_drive_the_api() {
        let mut api = api();
        perform(&mut api, Action::Add(Item::new(2, "Saw", "Hand saw", "Tools"))).unwrap();
        perform(&mut api, Action::Add(Item::new(1, "Tape", "5m", "Measuring"))).unwrap();
        perform(&mut api, Action::Enqueue(1, "urgent".into())).unwrap();

        let sorted = perform(&mut api, Action::ViewSorted).unwrap();
        assert_eq!(sorted.listed_items[0].id(), 1);

        let next = perform(&mut api, Action::Dequeue).unwrap();
        assert_eq!(next.affected_items[0].name(), "Tape");

        perform(&mut api, Action::Save("s.json".into())).unwrap();
        perform(&mut api, Action::Delete(2)).unwrap();
        perform(&mut api, Action::Load("s.json".into())).unwrap();
        assert_eq!(api.catalog().len(), 2);
    }

    #[test]
    fn failures_come_back_as_errors() {
        let mut api = api();
        assert!(matches!(
            perform(&mut api, Action::Undo),
            Err(CatalogError::NothingToUndo)
        ));
        assert!(matches!(
            perform(&mut api, Action::Get(3)),
            Err(CatalogError::NotFound(3))
        ));
        assert!(perform(&mut api, Action::Load("missing.json".into())).is_err());
    }
}
