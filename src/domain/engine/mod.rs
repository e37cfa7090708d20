pub mod export;
pub mod pipeline;

pub use export::{export_csv, export_filename, export_view, ExportPayload};
pub use pipeline::{apply_view, compare_values, matched_records, total_pages};
