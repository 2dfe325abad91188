//! Item repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/list/toggle/delete APIs over the `items` table.
//! - Own title folding so search semantics stay case- and
//!   diacritic-insensitive.
//!
//! # Invariants
//! - Every write keeps `title_fold` in sync with `title`.
//! - List queries are always scoped to one category.
//! - Both sort orders are tie-broken by `uuid ASC` for determinism.

use crate::model::category::CategoryId;
use crate::model::item::{Item, ItemId};
use crate::repo::{
    bool_to_int, ensure_connection_ready, int_to_bool, parse_uuid, RepoError, RepoResult,
};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const ITEM_SELECT_SQL: &str = "SELECT
    uuid,
    category_uuid,
    title,
    done,
    created_at
FROM items";

const ITEM_COLUMNS: &[&str] = &[
    "uuid",
    "category_uuid",
    "title",
    "title_fold",
    "done",
    "created_at",
];

/// Sort order for item list queries.
///
/// The list screen shows `TitleAscending`; the search flow switches to
/// `CreatedDescending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ItemSort {
    #[default]
    TitleAscending,
    CreatedDescending,
}

/// Query options for listing one category's items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemListQuery {
    /// Owning category scope.
    pub category: CategoryId,
    /// Optional substring filter on the title, case- and
    /// diacritic-insensitive.
    pub title_contains: Option<String>,
    /// Result ordering.
    pub sort: ItemSort,
}

impl ItemListQuery {
    /// Creates the default screen query: everything, title ascending.
    pub fn new(category: CategoryId) -> Self {
        Self {
            category,
            title_contains: None,
            sort: ItemSort::default(),
        }
    }
}

/// Repository interface for item operations.
pub trait ItemRepository {
    /// Persists one item and returns its stable id.
    fn create_item(&self, item: &Item) -> RepoResult<ItemId>;
    /// Lists items using category scope, filter and sort options.
    fn list_items(&self, query: &ItemListQuery) -> RepoResult<Vec<Item>>;
    /// Flips the done flag and returns the new value.
    fn toggle_done(&self, id: ItemId) -> RepoResult<bool>;
    /// Deletes one item.
    fn delete_item(&self, id: ItemId) -> RepoResult<()>;
}

/// SQLite-backed item repository.
#[derive(Debug)]
pub struct SqliteItemRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "items", ITEM_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl ItemRepository for SqliteItemRepository<'_> {
    fn create_item(&self, item: &Item) -> RepoResult<ItemId> {
        self.conn.execute(
            "INSERT INTO items (uuid, category_uuid, title, title_fold, done, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                item.uuid.to_string(),
                item.category_uuid.to_string(),
                item.title.as_str(),
                fold_title(&item.title),
                bool_to_int(item.done),
                item.created_at,
            ],
        )?;

        Ok(item.uuid)
    }

    fn list_items(&self, query: &ItemListQuery) -> RepoResult<Vec<Item>> {
        let mut sql = format!("{ITEM_SELECT_SQL} WHERE category_uuid = ?");
        let mut bind_values: Vec<Value> = vec![Value::Text(query.category.to_string())];

        if let Some(needle) = query.title_contains.as_deref() {
            sql.push_str(" AND title_fold LIKE ? ESCAPE '\\'");
            bind_values.push(Value::Text(format!(
                "%{}%",
                escape_like(&fold_title(needle))
            )));
        }

        match query.sort {
            ItemSort::TitleAscending => sql.push_str(" ORDER BY title COLLATE NOCASE ASC, uuid ASC"),
            ItemSort::CreatedDescending => sql.push_str(" ORDER BY created_at DESC, uuid ASC"),
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut items = Vec::new();

        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }

        Ok(items)
    }

    fn toggle_done(&self, id: ItemId) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE items SET done = 1 - done WHERE uuid = ?1;",
            [id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        let done: i64 = self.conn.query_row(
            "SELECT done FROM items WHERE uuid = ?1;",
            [id.to_string()],
            |row| row.get(0),
        )?;
        int_to_bool(done, "items.done")
    }

    fn delete_item(&self, id: ItemId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM items WHERE uuid = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

/// Folds a title for matching: lowercase with common diacritics stripped.
///
/// Matches the original search predicate semantics (`CONTAINS[cd]`): the
/// needle and the stored copy are folded the same way on both sides.
pub fn fold_title(value: &str) -> String {
    value.chars().map(fold_char).collect::<String>().to_lowercase()
}

fn fold_char(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'a',
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => 'u',
        'ç' | 'Ç' => 'c',
        'ñ' | 'Ñ' => 'n',
        'ý' | 'ÿ' | 'Ý' => 'y',
        other => other,
    }
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn parse_item_row(row: &Row<'_>) -> RepoResult<Item> {
    let uuid_text: String = row.get("uuid")?;
    let category_text: String = row.get("category_uuid")?;
    let done: i64 = row.get("done")?;

    Ok(Item {
        uuid: parse_uuid(&uuid_text, "items.uuid")?,
        category_uuid: parse_uuid(&category_text, "items.category_uuid")?,
        title: row.get("title")?,
        done: int_to_bool(done, "items.done")?,
        created_at: row.get("created_at")?,
    })
}

#[cfg(test)]
mod tests {
    use super::{escape_like, fold_title};

    #[test]
    fn fold_title_lowercases_and_strips_diacritics() {
        assert_eq!(fold_title("Café crème"), "cafe creme");
        assert_eq!(fold_title("BUY MILK"), "buy milk");
        assert_eq!(fold_title("Señor Peña"), "senor pena");
    }

    #[test]
    fn escape_like_protects_wildcards() {
        assert_eq!(escape_like("50% off_now\\"), "50\\% off\\_now\\\\");
    }
}
