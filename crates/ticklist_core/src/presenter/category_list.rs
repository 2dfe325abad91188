//! Category screen presenter.
//!
//! # Responsibility
//! - Render every category as a colored row, or a placeholder when empty.
//! - Handle add/delete gestures and hand out navigation context for the item
//!   screen.
//!
//! # Invariants
//! - Every mutation is followed by a re-query before the next render.
//! - A stale row index is ignored, never a panic.

use crate::model::category::{Category, CategoryId};
use crate::presenter::{ListState, PresenterError, RowTheme};
use crate::repo::category_repo::CategoryRepository;
use crate::service::category_service::CategoryService;
use crate::theme::color::parse_hex;
use log::error;

const PLACEHOLDER_TEXT: &str = "No Categories Added Yet";

/// One renderable row on the category screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    /// Backing category id; `None` for the placeholder row.
    pub category: Option<CategoryId>,
    pub name: String,
    pub theme: RowTheme,
    pub placeholder: bool,
}

impl CategoryRow {
    fn placeholder() -> Self {
        Self {
            category: None,
            name: PLACEHOLDER_TEXT.to_string(),
            theme: RowTheme::for_base(crate::theme::color::FLAT_WHITE),
            placeholder: true,
        }
    }
}

/// Presenter backing the category list screen.
pub struct CategoryListPresenter<R: CategoryRepository> {
    service: CategoryService<R>,
    categories: Vec<Category>,
    state: ListState,
}

impl<R: CategoryRepository> CategoryListPresenter<R> {
    /// Creates a presenter in the `Empty` state; call [`open`](Self::open)
    /// when the screen appears.
    pub fn new(service: CategoryService<R>) -> Self {
        Self {
            service,
            categories: Vec::new(),
            state: ListState::Empty,
        }
    }

    /// Screen-open transition: query the store and enter `Loaded`.
    pub fn open(&mut self) -> Result<(), PresenterError> {
        self.reload()
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Renders the current result set.
    ///
    /// Returns one styled row per category (background = category color,
    /// foreground = contrast pick), or a single placeholder row before the
    /// first query and for a zero-length result set. An unparseable persisted
    /// color is a non-recoverable [`PresenterError::Theme`].
    pub fn rows(&self) -> Result<Vec<CategoryRow>, PresenterError> {
        if self.state == ListState::Empty || self.categories.is_empty() {
            return Ok(vec![CategoryRow::placeholder()]);
        }

        self.categories
            .iter()
            .map(|category| {
                let base = parse_hex(&category.color_hex).map_err(PresenterError::Theme)?;
                Ok(CategoryRow {
                    category: Some(category.uuid),
                    name: category.name.clone(),
                    theme: RowTheme::for_base(base),
                    placeholder: false,
                })
            })
            .collect()
    }

    /// Confirm action of the add dialog. Empty input is accepted.
    ///
    /// A write failure is logged, not surfaced; the screen is refreshed
    /// best-effort either way.
    pub fn add_category(&mut self, name: &str) {
        if let Err(err) = self.service.create_category(name) {
            error!("event=category_save module=presenter status=error error={err}");
        }
        self.reload_best_effort();
    }

    /// Swipe-to-delete action for the given row. Stale indexes are ignored.
    pub fn delete_row(&mut self, index: usize) {
        let Some(category) = self.categories.get(index) else {
            return;
        };
        if let Err(err) = self.service.delete_category(category.uuid) {
            error!("event=category_delete module=presenter status=error error={err}");
        }
        self.reload_best_effort();
    }

    /// Navigation context for a tapped row.
    pub fn selected_category(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    fn reload(&mut self) -> Result<(), PresenterError> {
        self.categories = self.service.list_categories()?;
        self.state = ListState::Loaded;
        Ok(())
    }

    fn reload_best_effort(&mut self) {
        if let Err(err) = self.reload() {
            error!("event=list_reload module=presenter status=error screen=categories error={err}");
        }
    }
}
