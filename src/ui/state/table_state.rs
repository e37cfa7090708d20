use tracing::{debug, warn};

use crate::config::PageSizePolicy;
use crate::domain::engine::{apply_view, export_view, matched_records, total_pages, ExportPayload};
use crate::domain::entities::table::{
    find_column, ColumnSpec, PageSize, SortDirection, TableError, ViewResult, ViewState,
};
use crate::domain::record::Record;
use crate::ui::state::toast::ToastNotice;

/// Host-side state of one interactive table: the records it shows, its
/// columns and the user's current view.
#[derive(Debug, Clone)]
pub struct TableSession<R> {
    title: String,
    records: Vec<R>,
    columns: Vec<ColumnSpec>,
    view: ViewState,
    policy: PageSizePolicy,
}

impl<R: Record> TableSession<R> {
    pub fn new(
        title: impl Into<String>,
        columns: Vec<ColumnSpec>,
        policy: PageSizePolicy,
        page_size: PageSize,
    ) -> Self {
        Self {
            title: title.into(),
            records: Vec::new(),
            columns,
            view: ViewState::with_page_size(page_size),
            policy,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn page_size_options(&self) -> &[usize] {
        &self.policy.options
    }

    /// Replaces the records, e.g. after a refresh. The view is kept and the
    /// page is clamped to the new record count.
    pub fn set_records(&mut self, records: Vec<R>) -> Result<(), TableError> {
        debug!(table = %self.title, records = records.len(), "table records replaced");
        self.records = records;
        self.clamp_page()
    }

    pub fn search(&mut self, term: impl Into<String>) {
        self.view.set_search_term(term);
    }

    pub fn filter(&mut self, key: &str, value: impl Into<String>) -> Result<(), TableError> {
        if find_column(&self.columns, key).is_none() {
            warn!(table = %self.title, key, "filter on unknown column rejected");
            return Err(TableError::UnknownColumn(key.to_string()));
        }
        self.view.set_column_filter(key, value);
        Ok(())
    }

    pub fn clear_filter(&mut self, key: &str) {
        self.view.clear_column_filter(key);
    }

    pub fn toggle_sort(&mut self, key: &str) -> Result<ToastNotice, TableError> {
        let message = match self.view.toggle_sort(&self.columns, key)? {
            Some(sort) => match sort.direction {
                SortDirection::Asc => format!("Sorted by {key} ascending"),
                SortDirection::Desc => format!("Sorted by {key} descending"),
            },
            None => format!("Sorting on {key} removed"),
        };
        Ok(ToastNotice::info("Table Sorted", message))
    }

    pub fn set_page_size(&mut self, size: usize) -> Result<(), TableError> {
        let page_size = self.policy.check(size).inspect_err(|err| {
            warn!(table = %self.title, size, %err, "page size rejected");
        })?;
        self.view.set_page_size(page_size);
        Ok(())
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.view.set_page(page);
    }

    pub fn first_page(&mut self) {
        self.view.first_page();
    }

    pub fn previous_page(&mut self) {
        self.view.previous_page();
    }

    pub fn next_page(&mut self) -> Result<(), TableError> {
        let pages = self.total_pages()?;
        self.view.next_page(pages);
        Ok(())
    }

    pub fn last_page(&mut self) -> Result<(), TableError> {
        let pages = self.total_pages()?;
        self.view.last_page(pages);
        Ok(())
    }

    pub fn clamp_page(&mut self) -> Result<(), TableError> {
        let pages = self.total_pages()?;
        self.view.clamp_page(pages);
        Ok(())
    }

    /// Clamps the page into range and returns the rows to render.
    pub fn current(&mut self) -> Result<ViewResult<'_, R>, TableError> {
        self.clamp_page()?;
        let result = apply_view(&self.records, &self.columns, &self.view)?;
        debug!(
            table = %self.title,
            page = result.page,
            total_pages = result.total_pages,
            matched = result.total_matched,
            "table view computed"
        );
        Ok(result)
    }

    pub fn export(&self) -> Result<ExportPayload, TableError> {
        export_view(&self.records, &self.columns, &self.view, &self.title)
    }

    fn total_pages(&self) -> Result<usize, TableError> {
        let matched = matched_records(&self.records, &self.columns, &self.view)?.len();
        Ok(total_pages(matched, self.view.page_size().get()))
    }
}
