//! Core domain logic for Ticklist.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod presenter;
pub mod repo;
pub mod service;
pub mod theme;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{Category, CategoryId, CategoryValidationError};
pub use model::item::{Item, ItemId};
pub use presenter::category_list::{CategoryListPresenter, CategoryRow};
pub use presenter::item_list::{ItemListPresenter, ItemRow, SearchEffect};
pub use presenter::{default_bar_theme, ListState, PresenterError, RowTheme};
pub use repo::category_repo::{CategoryRepository, SqliteCategoryRepository};
pub use repo::item_repo::{ItemListQuery, ItemRepository, ItemSort, SqliteItemRepository};
pub use repo::{RepoError, RepoResult};
pub use service::category_service::CategoryService;
pub use service::item_service::ItemService;
pub use theme::color::{contrast_on, parse_hex, ColorParseError, Rgb};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
