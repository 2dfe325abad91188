use ticklist_core::db::open_db_in_memory;
use ticklist_core::{
    Category, CategoryRepository, Item, ItemListQuery, ItemRepository, ItemService, RepoError,
    SqliteCategoryRepository, SqliteItemRepository,
};
use uuid::Uuid;

#[test]
fn add_item_sets_creation_defaults() {
    let conn = open_db_in_memory().unwrap();
    let category = seeded_category(&conn, "Inbox");
    let service = ItemService::new(SqliteItemRepository::try_new(&conn).unwrap());

    let created = service.add_item(category.uuid, "Buy milk").unwrap();
    assert!(!created.done);
    assert!(created.created_at > 0);

    let listed = service.screen_items(category.uuid).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created);
}

#[test]
fn empty_titles_are_accepted() {
    let conn = open_db_in_memory().unwrap();
    let category = seeded_category(&conn, "Inbox");
    let service = ItemService::new(SqliteItemRepository::try_new(&conn).unwrap());

    service.add_item(category.uuid, "").unwrap();

    let listed = service.screen_items(category.uuid).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "");
}

#[test]
fn toggle_twice_restores_original_value() {
    let conn = open_db_in_memory().unwrap();
    let category = seeded_category(&conn, "Inbox");
    let service = ItemService::new(SqliteItemRepository::try_new(&conn).unwrap());

    let item = service.add_item(category.uuid, "Call Bob").unwrap();

    assert!(service.toggle_done(item.uuid).unwrap());
    assert!(!service.toggle_done(item.uuid).unwrap());

    let listed = service.screen_items(category.uuid).unwrap();
    assert!(!listed[0].done);
}

#[test]
fn toggle_missing_item_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let _category = seeded_category(&conn, "Inbox");
    let service = ItemService::new(SqliteItemRepository::try_new(&conn).unwrap());

    let missing = Uuid::new_v4();
    let err = service.toggle_done(missing).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == missing));
}

#[test]
fn delete_removes_only_the_target_item() {
    let conn = open_db_in_memory().unwrap();
    let category = seeded_category(&conn, "Inbox");
    let service = ItemService::new(SqliteItemRepository::try_new(&conn).unwrap());

    let first = service.add_item(category.uuid, "first").unwrap();
    let second = service.add_item(category.uuid, "second").unwrap();

    service.delete_item(first.uuid).unwrap();

    let remaining = service.screen_items(category.uuid).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].uuid, second.uuid);

    let err = service.delete_item(first.uuid).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == first.uuid));
}

#[test]
fn items_are_scoped_to_their_category() {
    let conn = open_db_in_memory().unwrap();
    let work = seeded_category(&conn, "Work");
    let home = seeded_category(&conn, "Home");
    let service = ItemService::new(SqliteItemRepository::try_new(&conn).unwrap());

    service.add_item(work.uuid, "Send report").unwrap();
    service.add_item(home.uuid, "Water plants").unwrap();

    let work_items = service.screen_items(work.uuid).unwrap();
    assert_eq!(work_items.len(), 1);
    assert_eq!(work_items[0].title, "Send report");

    let home_items = service.screen_items(home.uuid).unwrap();
    assert_eq!(home_items.len(), 1);
    assert_eq!(home_items[0].title, "Water plants");
}

#[test]
fn creating_item_for_unknown_category_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::try_new(&conn).unwrap();

    let orphan = Item::new(Uuid::new_v4(), "homeless");
    let err = repo.create_item(&orphan).unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
}

#[test]
fn list_for_category_returns_exactly_the_non_deleted_items() {
    let conn = open_db_in_memory().unwrap();
    let category = seeded_category(&conn, "Errands");
    let service = ItemService::new(SqliteItemRepository::try_new(&conn).unwrap());

    let mut expected: Vec<Uuid> = Vec::new();
    for title in ["a", "b", "c", "d"] {
        expected.push(service.add_item(category.uuid, title).unwrap().uuid);
    }
    let removed = expected.remove(1);
    service.delete_item(removed).unwrap();

    let mut listed: Vec<Uuid> = service
        .list_items(&ItemListQuery::new(category.uuid))
        .unwrap()
        .into_iter()
        .map(|item| item.uuid)
        .collect();
    listed.sort();
    expected.sort();
    assert_eq!(listed, expected);
}

fn seeded_category(conn: &rusqlite::Connection, name: &str) -> Category {
    let repo = SqliteCategoryRepository::try_new(conn).unwrap();
    let category = Category::new(name, "3498DB");
    repo.create_category(&category).unwrap();
    category
}
