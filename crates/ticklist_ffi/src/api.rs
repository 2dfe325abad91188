//! FFI use-case API for the mobile list screens.
//!
//! # Responsibility
//! - Expose stable, screen-level functions to the UI shell via FRB.
//! - Keep error semantics simple: envelope responses, never exceptions.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Return values are plain-data envelopes with stable meaning.

use std::path::PathBuf;
use std::sync::OnceLock;
use ticklist_core::db::open_db;
use ticklist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    CategoryListPresenter, CategoryService, ItemListPresenter, ItemService, SearchEffect,
    SqliteCategoryRepository, SqliteItemRepository,
};
use uuid::Uuid;

const BOARD_DB_FILE_NAME: &str = "ticklist_board.sqlite3";
static BOARD_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One renderable category row for the UI shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRowView {
    /// Stable category id in string form; `None` for the placeholder row.
    pub category_id: Option<String>,
    pub name: String,
    /// Row background as six uppercase hex digits.
    pub background_hex: String,
    /// Row foreground as six uppercase hex digits.
    pub foreground_hex: String,
    pub placeholder: bool,
}

/// Category screen response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBoardResponse {
    /// Renderable rows (placeholder row included when the list is empty).
    pub rows: Vec<CategoryRowView>,
    /// Whether the load succeeded.
    pub ok: bool,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// One renderable item row for the UI shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRowView {
    /// Stable item id in string form; `None` for the placeholder row.
    pub item_id: Option<String>,
    pub title: String,
    pub done: bool,
    /// Row background as six uppercase hex digits.
    pub background_hex: String,
    /// Row foreground as six uppercase hex digits.
    pub foreground_hex: String,
    pub placeholder: bool,
}

/// Item screen response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemBoardResponse {
    /// Renderable rows in the active state's order.
    pub rows: Vec<ItemRowView>,
    /// Navigation-bar background while this screen is visible.
    pub bar_background_hex: String,
    /// Navigation-bar foreground while this screen is visible.
    pub bar_foreground_hex: String,
    /// Whether the UI should dismiss the keyboard on its next cycle.
    pub dismiss_keyboard: bool,
    /// Whether the load succeeded.
    pub ok: bool,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Generic action response envelope for mutation calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Optional id of the touched record.
    pub record_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl BoardActionResponse {
    fn success(message: impl Into<String>, record_id: String) -> Self {
        Self {
            ok: true,
            record_id: Some(record_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            record_id: None,
            message: message.into(),
        }
    }
}

/// Loads the category screen.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; failures come back as `ok=false` envelopes.
#[flutter_rust_bridge::frb(sync)]
pub fn category_board_load() -> CategoryBoardResponse {
    let conn = match open_db(resolve_board_db_path()) {
        Ok(conn) => conn,
        Err(err) => return failed_category_board(format!("board DB open failed: {err}")),
    };
    let repo = match SqliteCategoryRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => return failed_category_board(format!("board repo init failed: {err}")),
    };

    let mut presenter = CategoryListPresenter::new(CategoryService::new(repo));
    if let Err(err) = presenter.open() {
        return failed_category_board(format!("category_board_load failed: {err}"));
    }

    match presenter.rows() {
        Ok(rows) => CategoryBoardResponse {
            rows: rows
                .into_iter()
                .map(|row| CategoryRowView {
                    category_id: row.category.map(|id| id.to_string()),
                    name: row.name,
                    background_hex: row.theme.background.to_hex(),
                    foreground_hex: row.theme.foreground.to_hex(),
                    placeholder: row.placeholder,
                })
                .collect(),
            ok: true,
            message: String::new(),
        },
        Err(err) => failed_category_board(format!("category_board_load failed: {err}")),
    }
}

/// Confirm action of the category add dialog.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; returns the created category id on success.
#[flutter_rust_bridge::frb(sync)]
pub fn category_add(name: String) -> BoardActionResponse {
    let conn = match open_db(resolve_board_db_path()) {
        Ok(conn) => conn,
        Err(err) => return BoardActionResponse::failure(format!("board DB open failed: {err}")),
    };
    let repo = match SqliteCategoryRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => return BoardActionResponse::failure(format!("board repo init failed: {err}")),
    };

    match CategoryService::new(repo).create_category(name) {
        Ok(category) => {
            BoardActionResponse::success("Category created.", category.uuid.to_string())
        }
        Err(err) => BoardActionResponse::failure(format!("category_add failed: {err}")),
    }
}

/// Swipe-to-delete action on the category screen.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Deletes the category together with its items.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn category_delete(category_id: String) -> BoardActionResponse {
    let id = match parse_record_id(&category_id) {
        Ok(id) => id,
        Err(message) => return BoardActionResponse::failure(message),
    };
    let conn = match open_db(resolve_board_db_path()) {
        Ok(conn) => conn,
        Err(err) => return BoardActionResponse::failure(format!("board DB open failed: {err}")),
    };
    let repo = match SqliteCategoryRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => return BoardActionResponse::failure(format!("board repo init failed: {err}")),
    };

    match CategoryService::new(repo).delete_category(id) {
        Ok(()) => BoardActionResponse::success("Category deleted.", id.to_string()),
        Err(err) => BoardActionResponse::failure(format!("category_delete failed: {err}")),
    }
}

/// Loads the item screen of one category, optionally filtered.
///
/// Input semantics:
/// - `search_text = None`: plain screen load, title-ascending order.
/// - `search_text = Some(term)`: live search-field state; a blank term
///   clears the filter and sets `dismiss_keyboard`.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; failures come back as `ok=false` envelopes.
#[flutter_rust_bridge::frb(sync)]
pub fn item_board_load(category_id: String, search_text: Option<String>) -> ItemBoardResponse {
    let id = match parse_record_id(&category_id) {
        Ok(id) => id,
        Err(message) => return failed_item_board(message),
    };
    let conn = match open_db(resolve_board_db_path()) {
        Ok(conn) => conn,
        Err(err) => return failed_item_board(format!("board DB open failed: {err}")),
    };
    let categories = match SqliteCategoryRepository::try_new(&conn) {
        Ok(repo) => CategoryService::new(repo),
        Err(err) => return failed_item_board(format!("board repo init failed: {err}")),
    };
    let items = match SqliteItemRepository::try_new(&conn) {
        Ok(repo) => ItemService::new(repo),
        Err(err) => return failed_item_board(format!("board repo init failed: {err}")),
    };

    let mut presenter = match ItemListPresenter::open_for(&categories, items, id) {
        Ok(presenter) => presenter,
        Err(err) => return failed_item_board(format!("item_board_load failed: {err}")),
    };

    let mut dismiss_keyboard = false;
    if let Some(text) = search_text {
        match presenter.set_search_text(&text) {
            Ok(effect) => dismiss_keyboard = effect == SearchEffect::DismissKeyboard,
            Err(err) => return failed_item_board(format!("item_board_load failed: {err}")),
        }
    }

    let bar = presenter.bar_theme();
    ItemBoardResponse {
        rows: presenter
            .rows()
            .into_iter()
            .map(|row| ItemRowView {
                item_id: row.item.map(|id| id.to_string()),
                title: row.title,
                done: row.done,
                background_hex: row.theme.background.to_hex(),
                foreground_hex: row.theme.foreground.to_hex(),
                placeholder: row.placeholder,
            })
            .collect(),
        bar_background_hex: bar.background.to_hex(),
        bar_foreground_hex: bar.foreground.to_hex(),
        dismiss_keyboard,
        ok: true,
        message: String::new(),
    }
}

/// Confirm action of the item add dialog.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; returns the created item id on success.
#[flutter_rust_bridge::frb(sync)]
pub fn item_add(category_id: String, title: String) -> BoardActionResponse {
    let id = match parse_record_id(&category_id) {
        Ok(id) => id,
        Err(message) => return BoardActionResponse::failure(message),
    };

    match with_item_service(|service| service.add_item(id, title).map(|item| item.uuid)) {
        Ok(item_id) => BoardActionResponse::success("Item created.", item_id.to_string()),
        Err(err) => BoardActionResponse::failure(format!("item_add failed: {err}")),
    }
}

/// Tap action: flip one item's done flag.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; the message reports the new state.
#[flutter_rust_bridge::frb(sync)]
pub fn item_toggle(item_id: String) -> BoardActionResponse {
    let id = match parse_record_id(&item_id) {
        Ok(id) => id,
        Err(message) => return BoardActionResponse::failure(message),
    };

    match with_item_service(|service| service.toggle_done(id)) {
        Ok(done) => {
            let message = if done { "Item done." } else { "Item reopened." };
            BoardActionResponse::success(message, id.to_string())
        }
        Err(err) => BoardActionResponse::failure(format!("item_toggle failed: {err}")),
    }
}

/// Swipe-to-delete action on the item screen.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn item_delete(item_id: String) -> BoardActionResponse {
    let id = match parse_record_id(&item_id) {
        Ok(id) => id,
        Err(message) => return BoardActionResponse::failure(message),
    };

    match with_item_service(|service| service.delete_item(id).map(|()| id)) {
        Ok(deleted) => BoardActionResponse::success("Item deleted.", deleted.to_string()),
        Err(err) => BoardActionResponse::failure(format!("item_delete failed: {err}")),
    }
}

fn resolve_board_db_path() -> PathBuf {
    BOARD_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("TICKLIST_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(BOARD_DB_FILE_NAME)
        })
        .clone()
}

fn with_item_service<T>(
    f: impl FnOnce(&ItemService<SqliteItemRepository<'_>>) -> ticklist_core::RepoResult<T>,
) -> Result<T, String> {
    let conn = open_db(resolve_board_db_path()).map_err(|err| format!("board DB open failed: {err}"))?;
    let repo = SqliteItemRepository::try_new(&conn)
        .map_err(|err| format!("board repo init failed: {err}"))?;
    let service = ItemService::new(repo);
    f(&service).map_err(|err| err.to_string())
}

fn parse_record_id(value: &str) -> Result<Uuid, String> {
    Uuid::parse_str(value.trim()).map_err(|_| format!("invalid record id `{value}`"))
}

fn failed_category_board(message: String) -> CategoryBoardResponse {
    CategoryBoardResponse {
        rows: Vec::new(),
        ok: false,
        message,
    }
}

fn failed_item_board(message: String) -> ItemBoardResponse {
    ItemBoardResponse {
        rows: Vec::new(),
        bar_background_hex: String::new(),
        bar_foreground_hex: String::new(),
        dismiss_keyboard: false,
        ok: false,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        category_add, category_board_load, category_delete, core_version, init_logging, item_add,
        item_board_load, item_delete, item_toggle, ping,
    };
    use std::time::{SystemTime, UNIX_EPOCH};
    use ticklist_core::db::open_db;

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn category_add_shows_up_on_the_board_with_colors() {
        let name = unique_token("board-category");
        let created = category_add(name.clone());
        assert!(created.ok, "{}", created.message);
        let created_id = created.record_id.expect("category id");

        let board = category_board_load();
        assert!(board.ok, "{}", board.message);
        let row = board
            .rows
            .iter()
            .find(|row| row.category_id.as_deref() == Some(created_id.as_str()))
            .expect("created category should be on the board");
        assert_eq!(row.name, name);
        assert_eq!(row.background_hex.len(), 6);
        assert_eq!(row.foreground_hex.len(), 6);
        assert!(!row.placeholder);

        let removed = category_delete(created_id.clone());
        assert!(removed.ok, "{}", removed.message);
        let board = category_board_load();
        assert!(board
            .rows
            .iter()
            .all(|row| row.category_id.as_deref() != Some(created_id.as_str())));
    }

    #[test]
    fn item_flow_covers_add_toggle_search_and_delete() {
        let category = category_add(unique_token("board-items"));
        assert!(category.ok, "{}", category.message);
        let category_id = category.record_id.expect("category id");

        let token = unique_token("needle");
        let first = item_add(category_id.clone(), format!("alpha {token}"));
        assert!(first.ok, "{}", first.message);
        let second = item_add(category_id.clone(), "unrelated".to_string());
        assert!(second.ok, "{}", second.message);
        let first_id = first.record_id.expect("item id");

        let toggled = item_toggle(first_id.clone());
        assert!(toggled.ok, "{}", toggled.message);
        assert_eq!(toggled.message, "Item done.");

        let conn = open_db(super::resolve_board_db_path()).expect("open db");
        let done: i64 = conn
            .query_row(
                "SELECT done FROM items WHERE uuid = ?1",
                [first_id.as_str()],
                |row| row.get(0),
            )
            .expect("query item row");
        assert_eq!(done, 1);

        let board = item_board_load(category_id.clone(), None);
        assert!(board.ok, "{}", board.message);
        assert_eq!(board.bar_background_hex.len(), 6);
        assert!(!board.dismiss_keyboard);
        let row = board
            .rows
            .iter()
            .find(|row| row.item_id.as_deref() == Some(first_id.as_str()))
            .expect("created item should be on the board");
        assert!(row.done);

        let filtered = item_board_load(category_id.clone(), Some(token.clone()));
        assert!(filtered.ok, "{}", filtered.message);
        assert_eq!(filtered.rows.len(), 1);
        assert_eq!(
            filtered.rows[0].item_id.as_deref(),
            Some(first_id.as_str())
        );

        let cleared = item_board_load(category_id.clone(), Some("   ".to_string()));
        assert!(cleared.ok, "{}", cleared.message);
        assert!(cleared.dismiss_keyboard);

        let removed = item_delete(first_id.clone());
        assert!(removed.ok, "{}", removed.message);
        let board = item_board_load(category_id, None);
        assert!(board
            .rows
            .iter()
            .all(|row| row.item_id.as_deref() != Some(first_id.as_str())));
    }

    #[test]
    fn malformed_record_ids_are_rejected_without_panicking() {
        let response = item_board_load("not-a-uuid".to_string(), None);
        assert!(!response.ok);
        assert!(response.message.contains("invalid record id"));

        let response = item_toggle(String::new());
        assert!(!response.ok);
    }

    #[test]
    fn loading_items_for_a_missing_category_fails_cleanly() {
        let response = item_board_load(
            "00000000-0000-4000-8000-00000000dead".to_string(),
            None,
        );
        assert!(!response.ok);
        assert!(response.message.contains("category not found"));
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
