use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::domain::engine::pipeline::matched_records;
use crate::domain::entities::table::{ColumnSpec, TableError, ViewState};
use crate::domain::record::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub filename: String,
    pub content: String,
}

/// Serializes `records` as CSV: a label header, then one line per record with
/// every field quoted. Embedded quotes are doubled.
pub fn export_csv<R: Record>(records: &[&R], columns: &[ColumnSpec]) -> Result<String, TableError> {
    if columns.is_empty() {
        return Ok(vec![""; records.len() + 1].join("\n"));
    }

    let header = write_lines(QuoteStyle::Necessary, |writer| {
        writer.write_record(columns.iter().map(|column| column.label.as_str()))
    })?;

    let body = write_lines(QuoteStyle::Always, |writer| {
        for record in records {
            writer.write_record(
                columns
                    .iter()
                    .map(|column| record.field(&column.key).to_string()),
            )?;
        }
        Ok(())
    })?;

    if body.is_empty() {
        Ok(header)
    } else {
        Ok(format!("{header}\n{body}"))
    }
}

/// Exports the whole filtered and sorted view, not just the current page.
pub fn export_view<R: Record>(
    records: &[R],
    columns: &[ColumnSpec],
    view: &ViewState,
    title: &str,
) -> Result<ExportPayload, TableError> {
    let matched = matched_records(records, columns, view)?;
    Ok(ExportPayload {
        filename: export_filename(title),
        content: export_csv(&matched, columns)?,
    })
}

/// `"Campaign Performance Data"` becomes `campaign-performance-data-data.csv`.
pub fn export_filename(title: &str) -> String {
    let mut slug = String::with_capacity(title.len() + 9);
    let mut in_whitespace = false;
    for ch in title.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.push(ch);
            in_whitespace = false;
        }
    }
    slug.push_str("-data.csv");
    slug
}

fn write_lines<F>(quote_style: QuoteStyle, write: F) -> Result<String, TableError>
where
    F: FnOnce(&mut csv::Writer<Vec<u8>>) -> csv::Result<()>,
{
    let mut writer = WriterBuilder::new()
        .quote_style(quote_style)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    write(&mut writer).map_err(|err| TableError::Export(err.to_string()))?;

    let bytes = writer
        .into_inner()
        .map_err(|err| TableError::Export(err.to_string()))?;
    let mut text = String::from_utf8(bytes).map_err(|err| TableError::Export(err.to_string()))?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::value::FieldValue;
    use crate::domain::record::{dynamic_record, DynamicRecord};

    fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::new("name", "Campaign Name"),
            ColumnSpec::new("spend", "Spend"),
        ]
    }

    #[test]
    fn header_is_plain_and_fields_are_quoted() {
        let record = dynamic_record([
            ("name", FieldValue::from("Summer Sale")),
            ("spend", FieldValue::from(8500_i64)),
        ]);

        let payload = export_csv(&[&record], &columns()).expect("export should succeed");

        assert_eq!(payload, "Campaign Name,Spend\n\"Summer Sale\",\"8500\"");
    }

    #[test]
    fn embedded_quotes_and_commas_are_escaped() {
        let record = dynamic_record([
            ("name", FieldValue::from("Say \"hi\", now")),
            ("spend", FieldValue::from(1_i64)),
        ]);

        let payload = export_csv(&[&record], &columns()).expect("export should succeed");

        assert_eq!(
            payload.lines().nth(1),
            Some("\"Say \"\"hi\"\", now\",\"1\"")
        );
    }

    #[test]
    fn missing_fields_export_as_empty_quoted_values() {
        let record = dynamic_record([("name", FieldValue::from("Solo"))]);

        let payload = export_csv(&[&record], &columns()).expect("export should succeed");

        assert_eq!(payload.lines().nth(1), Some("\"Solo\",\"\""));
    }

    #[test]
    fn no_records_exports_header_only() {
        let records: Vec<&DynamicRecord> = Vec::new();

        let payload = export_csv(&records, &columns()).expect("export should succeed");

        assert_eq!(payload, "Campaign Name,Spend");
    }

    #[test]
    fn filename_collapses_whitespace_runs() {
        assert_eq!(
            export_filename("Campaign Performance Data"),
            "campaign-performance-data-data.csv"
        );
        assert_eq!(export_filename("Top  Ads\tQ3"), "top-ads-q3-data.csv");
    }
}
