use ticklist_core::{Category, Item};
use uuid::Uuid;

#[test]
fn category_new_sets_defaults() {
    let category = Category::new("Groceries", "2ECC71");

    assert!(!category.uuid.is_nil());
    assert_eq!(category.name, "Groceries");
    assert_eq!(category.color_hex, "2ECC71");
    assert!(category.created_at > 0);
    assert!(category.validate().is_ok());
}

#[test]
fn category_validate_rejects_broken_color() {
    let category = Category::new("Broken", "magenta");
    assert!(category.validate().is_err());
}

#[test]
fn item_new_sets_defaults_and_toggle_flips_in_place() {
    let category_id = Uuid::new_v4();
    let mut item = Item::new(category_id, "Buy milk");

    assert!(!item.uuid.is_nil());
    assert_eq!(item.category_uuid, category_id);
    assert!(!item.done);
    assert!(item.created_at > 0);

    item.toggle();
    assert!(item.done);
    item.toggle();
    assert!(!item.done);
}

#[test]
fn category_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let category = Category::with_id(id, "Work", "1D9BF6");

    let json = serde_json::to_value(&category).unwrap();
    assert_eq!(json["uuid"], id.to_string());
    assert_eq!(json["name"], "Work");
    assert_eq!(json["color_hex"], "1D9BF6");

    let decoded: Category = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, category);
}

#[test]
fn item_serialization_uses_expected_wire_fields() {
    let category_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let item_id = Uuid::parse_str("99999999-8888-4777-8666-555555555555").unwrap();
    let mut item = Item::with_id(item_id, category_id, "Call Bob");
    item.done = true;

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["uuid"], item_id.to_string());
    assert_eq!(json["category_uuid"], category_id.to_string());
    assert_eq!(json["title"], "Call Bob");
    assert_eq!(json["done"], true);

    let decoded: Item = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, item);
}
