//! UI parameters and the reducer that is their only way to change.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::{SortDirection, SortKey, SortSpec};

pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(5).expect("5 is non-zero");

/// Fixed choices of the page-size selector.
pub const PAGE_SIZE_CHOICES: [NonZeroUsize; 3] = [
    DEFAULT_PAGE_SIZE,
    NonZeroUsize::new(10).expect("10 is non-zero"),
    NonZeroUsize::new(20).expect("20 is non-zero"),
];

/// Everything the operator can change about the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewParams {
    pub query: String,
    pub sort: Option<SortSpec>,
    /// 1-based.
    pub page_index: NonZeroUsize,
    pub page_size: NonZeroUsize,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort: None,
            page_index: NonZeroUsize::MIN,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One operator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    SetQuery(String),
    /// Header click.
    ToggleSort(SortKey),
    SetPageSize(NonZeroUsize),
    GoToPage(usize),
    NextPage,
    PrevPage,
    Reset,
}

impl ViewParams {
    /// Apply `action` and return the new parameters.
    ///
    /// `total_pages` is the page count of the view derived from `self`; page moves are
    /// clamped into `1..=max(total_pages, 1)`.
    ///
    /// A query or page-size change goes back to page 1. A sort change keeps the page.
    pub fn reduce(&self, action: ViewAction, total_pages: usize) -> Self {
        let mut next = self.clone();
        match action {
            ViewAction::SetQuery(query) => {
                if query != self.query {
                    next.query = query;
                    next.page_index = NonZeroUsize::MIN;
                }
            }
            ViewAction::ToggleSort(key) => {
                next.sort = Some(match self.sort {
                    Some(active) if active.key == key => SortSpec {
                        key,
                        direction: active.direction.toggled(),
                    },
                    _ => SortSpec::asc(key),
                });
            }
            ViewAction::SetPageSize(page_size) => {
                if page_size != self.page_size {
                    next.page_size = page_size;
                    next.page_index = NonZeroUsize::MIN;
                }
            }
            ViewAction::GoToPage(page) => {
                next.page_index = clamp_page(page, total_pages);
            }
            ViewAction::NextPage => {
                next.page_index = clamp_page(self.page_index.get().saturating_add(1), total_pages);
            }
            ViewAction::PrevPage => {
                next.page_index = clamp_page(self.page_index.get() - 1, total_pages);
            }
            ViewAction::Reset => next = Self::default(),
        }
        next
    }

    /// Back to page 1 when the current page no longer exists (e.g. records were replaced).
    pub fn clamped(&self, total_pages: usize) -> Self {
        if total_pages >= 1 && self.page_index.get() > total_pages {
            Self {
                page_index: NonZeroUsize::MIN,
                ..self.clone()
            }
        } else {
            self.clone()
        }
    }

    pub fn sort_direction_of(&self, key: SortKey) -> Option<SortDirection> {
        self.sort
            .filter(|spec| spec.key == key)
            .map(|spec| spec.direction)
    }
}

fn clamp_page(page: usize, total_pages: usize) -> NonZeroUsize {
    NonZeroUsize::new(page.clamp(1, total_pages.max(1))).unwrap_or(NonZeroUsize::MIN)
}
