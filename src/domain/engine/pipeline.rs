use std::cmp::Ordering;

use crate::domain::entities::table::{
    find_column, ColumnSpec, SortDirection, SortSpec, TableError, ViewResult, ViewState,
};
use crate::domain::entities::value::FieldValue;
use crate::domain::record::Record;

/// Applies search, column filters and sort, returning every matching record in
/// display order. Pagination is left to [`apply_view`].
pub fn matched_records<'a, R: Record>(
    records: &'a [R],
    columns: &[ColumnSpec],
    view: &ViewState,
) -> Result<Vec<&'a R>, TableError> {
    if let Some(sort) = view.sort() {
        validate_sort(columns, sort)?;
    }

    let search = view.search_term().to_lowercase();
    let filters = view
        .column_filters()
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key.as_str(), value.to_lowercase()))
        .collect::<Vec<_>>();

    let mut matched = records
        .iter()
        .filter(|record| search.is_empty() || matches_search(*record, &search))
        .filter(|record| {
            filters
                .iter()
                .all(|(key, needle)| record.field(key).contains_ignore_case(needle))
        })
        .collect::<Vec<_>>();

    if let Some(sort) = view.sort() {
        // slice::sort_by is stable, so equal keys keep their filtered order.
        matched.sort_by(|a, b| {
            let ordering = compare_values(&a.field(&sort.key), &b.field(&sort.key));
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    Ok(matched)
}

/// Runs the full pipeline and slices out the current page.
///
/// A page past the end yields an empty `page_records`; the host is expected to
/// clamp its page with [`ViewState::clamp_page`] using `total_pages`.
pub fn apply_view<'a, R: Record>(
    records: &'a [R],
    columns: &[ColumnSpec],
    view: &ViewState,
) -> Result<ViewResult<'a, R>, TableError> {
    let matched = matched_records(records, columns, view)?;
    let page_size = view.page_size().get();
    let total_matched = matched.len();
    let total_pages = total_pages(total_matched, page_size);
    let start = (view.page() - 1).saturating_mul(page_size);

    let page_records = matched.into_iter().skip(start).take(page_size).collect();

    Ok(ViewResult {
        page_records,
        total_matched,
        total_pages,
        page: view.page(),
        page_size,
    })
}

pub fn total_pages(total_matched: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_matched.div_ceil(page_size).max(1)
}

pub fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    a.total_cmp(b)
}

fn matches_search<R: Record>(record: &R, needle_lower: &str) -> bool {
    record
        .values()
        .iter()
        .any(|value| value.contains_ignore_case(needle_lower))
}

fn validate_sort(columns: &[ColumnSpec], sort: &SortSpec) -> Result<(), TableError> {
    match find_column(columns, &sort.key) {
        None => Err(TableError::UnknownColumn(sort.key.clone())),
        Some(column) if !column.sortable => Err(TableError::ColumnNotSortable(sort.key.clone())),
        Some(_) => Ok(()),
    }
}
