//! Item screen presenter.
//!
//! # Responsibility
//! - Render one category's items with position-darkened row shades.
//! - Handle add/toggle/delete gestures and the live search field.
//! - Expose the screen chrome colors derived from the category base color.
//!
//! # Invariants
//! - Constructing for a missing category or an unparseable color is a typed
//!   error; the screen never opens on bad context.
//! - Any mutation re-enters `Loaded` by re-querying, dropping an active
//!   filter.
//! - Clearing the search field reports a keyboard-dismiss effect the UI
//!   applies on the next cycle.

use crate::model::category::{Category, CategoryId};
use crate::model::item::{Item, ItemId};
use crate::presenter::{row_theme, ListState, PresenterError, RowTheme};
use crate::repo::category_repo::CategoryRepository;
use crate::repo::item_repo::ItemRepository;
use crate::service::category_service::CategoryService;
use crate::service::item_service::ItemService;
use crate::theme::color::{parse_hex, Rgb};
use log::error;

const PLACEHOLDER_TEXT: &str = "No Items Added";

/// One renderable row on the item screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    /// Backing item id; `None` for the placeholder row.
    pub item: Option<ItemId>,
    pub title: String,
    pub done: bool,
    pub theme: RowTheme,
    pub placeholder: bool,
}

impl ItemRow {
    fn placeholder(base: Rgb) -> Self {
        Self {
            item: None,
            title: PLACEHOLDER_TEXT.to_string(),
            done: false,
            theme: RowTheme::for_base(base),
            placeholder: true,
        }
    }
}

/// Deferred UI effect reported by search-text changes.
///
/// The original app dismisses the keyboard on the next UI-thread cycle after
/// a cleared search; the effect value models that without a scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEffect {
    None,
    DismissKeyboard,
}

/// Presenter backing the item list screen of one category.
#[derive(Debug)]
pub struct ItemListPresenter<R: ItemRepository> {
    service: ItemService<R>,
    category: Category,
    base_color: Rgb,
    items: Vec<Item>,
    state: ListState,
}

impl<R: ItemRepository> ItemListPresenter<R> {
    /// Resolves the navigation context and opens the screen in one step.
    ///
    /// # Errors
    /// - [`PresenterError::MissingCategory`] when `category_id` does not
    ///   resolve.
    /// - [`PresenterError::Theme`] when the category color does not parse.
    pub fn open_for<C: CategoryRepository>(
        categories: &CategoryService<C>,
        service: ItemService<R>,
        category_id: CategoryId,
    ) -> Result<Self, PresenterError> {
        let category = categories
            .get_category(category_id)?
            .ok_or(PresenterError::MissingCategory(category_id))?;
        let mut presenter = Self::with_category(service, category)?;
        presenter.open()?;
        Ok(presenter)
    }

    /// Creates a presenter in the `Empty` state from an already resolved
    /// category.
    pub fn with_category(
        service: ItemService<R>,
        category: Category,
    ) -> Result<Self, PresenterError> {
        let base_color = parse_hex(&category.color_hex).map_err(PresenterError::Theme)?;
        Ok(Self {
            service,
            category,
            base_color,
            items: Vec::new(),
            state: ListState::Empty,
        })
    }

    /// Screen-open transition: query the store and enter `Loaded`.
    pub fn open(&mut self) -> Result<(), PresenterError> {
        self.reload()
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Navigation-bar colors while this screen is visible. The restore value
    /// for screen exit is [`default_bar_theme`](crate::presenter::default_bar_theme).
    pub fn bar_theme(&self) -> RowTheme {
        RowTheme::for_base(self.base_color)
    }

    /// Renders the current result set.
    ///
    /// Each row's background is the category base color darkened by
    /// `position / count`; the foreground is the contrast pick for that
    /// shade. A zero-length result set renders a single placeholder row.
    pub fn rows(&self) -> Vec<ItemRow> {
        if self.state == ListState::Empty || self.items.is_empty() {
            return vec![ItemRow::placeholder(self.base_color)];
        }

        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| ItemRow {
                item: Some(item.uuid),
                title: item.title.clone(),
                done: item.done,
                theme: row_theme(self.base_color, index, self.items.len()),
                placeholder: false,
            })
            .collect()
    }

    /// Confirm action of the add dialog. Empty input is accepted.
    ///
    /// A write failure is logged, not surfaced; the screen is refreshed
    /// best-effort either way.
    pub fn add_item(&mut self, title: &str) {
        if let Err(err) = self.service.add_item(self.category.uuid, title) {
            error!("event=item_save module=presenter status=error error={err}");
        }
        self.reload_best_effort();
    }

    /// Tap action: flip the row's done flag. Stale indexes are ignored.
    pub fn toggle_row(&mut self, index: usize) {
        let Some(item) = self.items.get(index) else {
            return;
        };
        if let Err(err) = self.service.toggle_done(item.uuid) {
            error!("event=item_toggle module=presenter status=error error={err}");
        }
        self.reload_best_effort();
    }

    /// Swipe-to-delete action for the given row. Stale indexes are ignored.
    pub fn delete_row(&mut self, index: usize) {
        let Some(item) = self.items.get(index) else {
            return;
        };
        if let Err(err) = self.service.delete_item(item.uuid) {
            error!("event=item_delete module=presenter status=error error={err}");
        }
        self.reload_best_effort();
    }

    /// Live search-field change.
    ///
    /// A non-blank term re-queries with the substring filter and the
    /// newest-first sort, entering `Filtered`. A blank term re-queries
    /// unfiltered, re-enters `Loaded` and asks the UI to dismiss the
    /// keyboard on its next cycle.
    pub fn set_search_text(&mut self, text: &str) -> Result<SearchEffect, PresenterError> {
        let term = text.trim();
        if term.is_empty() {
            self.reload()?;
            return Ok(SearchEffect::DismissKeyboard);
        }

        self.items = self.service.search_items(self.category.uuid, term)?;
        self.state = ListState::Filtered {
            term: term.to_string(),
        };
        Ok(SearchEffect::None)
    }

    fn reload(&mut self) -> Result<(), PresenterError> {
        self.items = self.service.screen_items(self.category.uuid)?;
        self.state = ListState::Loaded;
        Ok(())
    }

    fn reload_best_effort(&mut self) {
        if let Err(err) = self.reload() {
            error!("event=list_reload module=presenter status=error screen=items error={err}");
        }
    }
}
