//! Category repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/list/get/delete APIs over the `categories` table.
//! - Own the cascade policy: deleting a category removes its items.
//!
//! # Invariants
//! - Write paths call `Category::validate()` before SQL mutations.
//! - Read paths reject rows with an unparseable color instead of masking
//!   them.
//! - List order is deterministic: `created_at ASC, uuid ASC`.

use crate::model::category::{Category, CategoryId};
use crate::repo::{ensure_connection_ready, parse_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const CATEGORY_SELECT_SQL: &str = "SELECT
    uuid,
    name,
    color_hex,
    created_at
FROM categories";

const CATEGORY_COLUMNS: &[&str] = &["uuid", "name", "color_hex", "created_at"];

/// Repository interface for category operations.
pub trait CategoryRepository {
    /// Persists one category and returns its stable id.
    fn create_category(&self, category: &Category) -> RepoResult<CategoryId>;
    /// Gets one category by id.
    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>>;
    /// Lists every category in creation order.
    fn list_categories(&self) -> RepoResult<Vec<Category>>;
    /// Deletes one category together with its items.
    fn delete_category(&self, id: CategoryId) -> RepoResult<()>;
}

/// SQLite-backed category repository.
pub struct SqliteCategoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCategoryRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "categories", CATEGORY_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl CategoryRepository for SqliteCategoryRepository<'_> {
    fn create_category(&self, category: &Category) -> RepoResult<CategoryId> {
        category.validate()?;

        self.conn.execute(
            "INSERT INTO categories (uuid, name, color_hex, created_at)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                category.uuid.to_string(),
                category.name.as_str(),
                category.color_hex.as_str(),
                category.created_at,
            ],
        )?;

        Ok(category.uuid)
    }

    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CATEGORY_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_category_row(row)?));
        }

        Ok(None)
    }

    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        let mut stmt = self.conn.prepare(&format!(
            "{CATEGORY_SELECT_SQL} ORDER BY created_at ASC, uuid ASC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut categories = Vec::new();

        while let Some(row) = rows.next()? {
            categories.push(parse_category_row(row)?);
        }

        Ok(categories)
    }

    fn delete_category(&self, id: CategoryId) -> RepoResult<()> {
        // Child items go with the category via ON DELETE CASCADE; the
        // connection bootstrap guarantees foreign_keys=ON.
        let changed = self.conn.execute(
            "DELETE FROM categories WHERE uuid = ?1;",
            [id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_category_row(row: &Row<'_>) -> RepoResult<Category> {
    let uuid_text: String = row.get("uuid")?;
    let category = Category {
        uuid: parse_uuid(&uuid_text, "categories.uuid")?,
        name: row.get("name")?,
        color_hex: row.get("color_hex")?,
        created_at: row.get("created_at")?,
    };
    category.validate()?;
    Ok(category)
}
