use std::cmp::Ordering;
use std::fmt;

/// A single scalar cell of a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Missing,
}

impl FieldValue {
    fn rank(&self) -> u8 {
        match self {
            FieldValue::Bool(_) => 0,
            FieldValue::Number(_) => 1,
            FieldValue::Text(_) => 2,
            FieldValue::Missing => 3,
        }
    }

    /// Total order used for sorting. Values of different kinds never compare
    /// equal, and `Missing` ranks after everything else.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            (FieldValue::Missing, FieldValue::Missing) => Ordering::Equal,
            _ => self.rank().cmp(&other.rank()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }

    /// Case-insensitive substring test against the canonical string form.
    pub fn contains_ignore_case(&self, needle_lower: &str) -> bool {
        self.to_string().to_lowercase().contains(needle_lower)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(value) => f.write_str(value),
            // Negative zero prints as "0".
            FieldValue::Number(value) if *value == 0.0 => f.write_str("0"),
            FieldValue::Number(value) => write!(f, "{value}"),
            FieldValue::Bool(value) => write!(f, "{value}"),
            FieldValue::Missing => Ok(()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Missing)
    }
}

/// Formats a number with `,` thousands separators and up to three decimals.
pub fn group_thousands(value: f64) -> String {
    let formatted = format!("{:.3}", value.abs());
    let (integer, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (idx, digit) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_thousands_matches_locale_style() {
        assert_eq!(group_thousands(124563.0), "124,563");
        assert_eq!(group_thousands(37368.9), "37,368.9");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1_000_000.0), "1,000,000");
        assert_eq!(group_thousands(-1234.5), "-1,234.5");
    }

    #[test]
    fn numbers_render_without_trailing_fraction() {
        assert_eq!(FieldValue::from(8500_i64).to_string(), "8500");
        assert_eq!(FieldValue::Number(2.59).to_string(), "2.59");
        assert_eq!(FieldValue::Missing.to_string(), "");
    }

    #[test]
    fn zero_and_extreme_magnitudes_print_in_decimal_form() {
        assert_eq!(FieldValue::Number(-0.0).to_string(), "0");
        assert_eq!(FieldValue::Number(0.0).to_string(), "0");
        assert_eq!(FieldValue::Number(1e21).to_string(), "1000000000000000000000");
        assert_eq!(FieldValue::Number(1e-7).to_string(), "0.0000001");
    }

    #[test]
    fn numeric_fields_match_decimal_substrings() {
        let value = FieldValue::Number(12500.0);
        assert!(value.contains_ignore_case("250"));
        assert!(!value.contains_ignore_case("12,500"));
    }

    #[test]
    fn mixed_kinds_follow_rank_order() {
        let mut values = vec![
            FieldValue::Missing,
            FieldValue::from("b"),
            FieldValue::Number(3.0),
            FieldValue::Bool(true),
            FieldValue::from("a"),
            FieldValue::Number(-1.0),
        ];
        values.sort_by(|a, b| a.total_cmp(b));

        assert_eq!(
            values,
            vec![
                FieldValue::Bool(true),
                FieldValue::Number(-1.0),
                FieldValue::Number(3.0),
                FieldValue::from("a"),
                FieldValue::from("b"),
                FieldValue::Missing,
            ]
        );
    }
}
