//! Filter -> sort -> paginate over the fetched records.
//!
//! Everything here is a pure function of `(records, ViewParams)`. The derived view is rebuilt
//! from scratch whenever either input changes and is never patched in place.

use std::cmp::Ordering;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::{UserRecord, ViewParams, contains_ignore_case};

/// Sortable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    Name,
    Email,
}

impl SortKey {
    pub fn field(self, record: &UserRecord) -> &str {
        match self {
            Self::Name => &record.name,
            Self::Email => &record.email,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "▲",
            Self::Desc => "▼",
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }

    fn compare(self, a: &UserRecord, b: &UserRecord) -> Ordering {
        let ordering = self.key.field(a).cmp(self.key.field(b));
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// The displayable projection of the records for one set of parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedView {
    /// Records matching the query, in fetch order.
    pub filtered: Vec<UserRecord>,
    /// `filtered` in display order.
    pub sorted: Vec<UserRecord>,
    /// The slice of `sorted` on the current page.
    pub page: Vec<UserRecord>,
    /// `ceil(sorted.len() / page_size)`, zero when nothing matches.
    pub total_pages: usize,
}

impl DerivedView {
    /// 1-based inclusive range of the rows on the current page, e.g. `(6, 10)`.
    pub fn row_range(&self, params: &ViewParams) -> Option<(usize, usize)> {
        if self.page.is_empty() {
            return None;
        }
        let first = (params.page_index.get() - 1) * params.page_size.get() + 1;
        Some((first, first + self.page.len() - 1))
    }
}

/// Recompute the whole view.
pub fn derive(records: &[UserRecord], params: &ViewParams) -> DerivedView {
    let filtered = filter_records(records, &params.query);
    let sorted = sort_records(filtered.clone(), params.sort);
    let total_pages = total_pages(sorted.len(), params.page_size);
    let page = page_slice(&sorted, params.page_index, params.page_size).to_vec();

    DerivedView {
        filtered,
        sorted,
        page,
        total_pages,
    }
}

/// Keep records whose name or email contains `query`, ignoring case with the same
/// per-character rule the highlighter uses. An empty query keeps everything.
pub fn filter_records(records: &[UserRecord], query: &str) -> Vec<UserRecord> {
    if query.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| {
            contains_ignore_case(&record.name, query) || contains_ignore_case(&record.email, query)
        })
        .cloned()
        .collect()
}

/// Stable sort. `Desc` reverses the comparison, so equal keys keep their input order in
/// both directions.
pub fn sort_records(mut records: Vec<UserRecord>, sort: Option<SortSpec>) -> Vec<UserRecord> {
    if let Some(spec) = sort {
        records.sort_by(|a, b| spec.compare(a, b));
    }
    records
}

pub fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get())
}

/// Rows of the 1-based page `page_index`; empty when the page is past the end.
pub fn page_slice<T>(items: &[T], page_index: NonZeroUsize, page_size: NonZeroUsize) -> &[T] {
    let start = (page_index.get() - 1).saturating_mul(page_size.get());
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size.get()).min(items.len());
    &items[start..end]
}
