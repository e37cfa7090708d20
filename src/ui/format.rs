use crate::domain::entities::table::SortDirection;
use crate::domain::entities::value::{group_thousands, FieldValue};

/// Display text for a campaign table cell. Export uses the raw value instead.
pub fn format_cell(key: &str, value: &FieldValue) -> String {
    match (key, value) {
        ("spend" | "revenue", FieldValue::Number(amount)) => {
            format!("${}", group_thousands(amount.round()))
        }
        ("cpc", FieldValue::Number(amount)) => format!("${amount:.2}"),
        ("roas", FieldValue::Number(ratio)) => format!("{ratio:.2}x"),
        ("clicks" | "conversions", FieldValue::Number(count)) => group_thousands(*count),
        _ => value.to_string(),
    }
}

pub fn column_alignment(key: &str) -> &'static str {
    match key {
        "clicks" | "conversions" | "spend" | "revenue" | "roas" | "ctr" | "cpc" => "right",
        _ => "left",
    }
}

pub fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => "↑",
        Some(SortDirection::Desc) => "↓",
        None => "↕",
    }
}

/// Width of a bar as a percentage of the largest value in its chart.
pub fn bar_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}
