use std::collections::BTreeMap;
use std::num::NonZeroUsize;

use thiserror::Error;

pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("page size must be greater than zero")]
    InvalidPageSize,

    #[error("page size {0} is not one of the offered options")]
    PageSizeNotOffered(usize),

    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("column is not sortable: {0}")]
    ColumnNotSortable(String),

    #[error("failed to build export payload: {0}")]
    Export(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    pub filterable: bool,
}

impl ColumnSpec {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            filterable: false,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }
}

pub fn find_column<'a>(columns: &'a [ColumnSpec], key: &str) -> Option<&'a ColumnSpec> {
    columns.iter().find(|column| column.key == key)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    pub fn new(size: usize) -> Result<Self, TableError> {
        NonZeroUsize::new(size)
            .map(PageSize)
            .ok_or(TableError::InvalidPageSize)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize(NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN))
    }
}

/// Search, filter, sort and paging configuration for one table.
///
/// Owned by the host; every mutation that changes the composition of the
/// matched set or the page length moves back to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    search_term: String,
    column_filters: BTreeMap<String, String>,
    sort: Option<SortSpec>,
    page: usize,
    page_size: PageSize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::with_page_size(PageSize::default())
    }
}

impl ViewState {
    pub fn with_page_size(page_size: PageSize) -> Self {
        Self {
            search_term: String::new(),
            column_filters: BTreeMap::new(),
            sort: None,
            page: 1,
            page_size,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn column_filters(&self) -> &BTreeMap<String, String> {
        &self.column_filters
    }

    pub fn column_filter(&self, key: &str) -> Option<&str> {
        self.column_filters.get(key).map(String::as_str)
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 1;
    }

    pub fn set_column_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if value.is_empty() {
            self.column_filters.remove(&key);
        } else {
            self.column_filters.insert(key, value);
        }
        self.page = 1;
    }

    pub fn clear_column_filter(&mut self, key: &str) {
        self.set_column_filter(key, "");
    }

    /// Cycles the sort on `key`: ascending, descending, then none. Switching to
    /// another column always starts ascending. The page is left untouched.
    pub fn toggle_sort(
        &mut self,
        columns: &[ColumnSpec],
        key: &str,
    ) -> Result<Option<&SortSpec>, TableError> {
        let column =
            find_column(columns, key).ok_or_else(|| TableError::UnknownColumn(key.to_string()))?;
        if !column.sortable {
            return Err(TableError::ColumnNotSortable(key.to_string()));
        }

        self.sort = match self.sort.take() {
            Some(current) if current.key == key => match current.direction {
                SortDirection::Asc => Some(SortSpec {
                    key: current.key,
                    direction: SortDirection::Desc,
                }),
                SortDirection::Desc => None,
            },
            _ => Some(SortSpec {
                key: key.to_string(),
                direction: SortDirection::Asc,
            }),
        };

        Ok(self.sort.as_ref())
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn clamp_page(&mut self, total_pages: usize) {
        self.page = self.page.clamp(1, total_pages.max(1));
    }

    pub fn first_page(&mut self) {
        self.page = 1;
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.page = self.page.saturating_add(1).min(total_pages.max(1));
    }

    pub fn last_page(&mut self, total_pages: usize) {
        self.page = total_pages.max(1);
    }
}

#[derive(Debug, PartialEq)]
pub struct ViewResult<'a, R> {
    pub page_records: Vec<&'a R>,
    pub total_matched: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<R> ViewResult<'_, R> {
    /// 1-based first and last row shown on this page, plus the matched total.
    pub fn showing_range(&self) -> (usize, usize, usize) {
        if self.page_records.is_empty() {
            return (0, 0, self.total_matched);
        }
        let first = (self.page - 1) * self.page_size + 1;
        let last = first + self.page_records.len() - 1;
        (first, last, self.total_matched)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
