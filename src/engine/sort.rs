//! Stable column sorting
//!
//! Comparison rules, per column value pair:
//!
//! - two strings that both parse as dates compare chronologically, whatever
//!   their textual format (never rely on lexical ISO ordering)
//! - two other strings compare case-insensitively
//! - two numbers compare numerically, integers widening to float
//! - two booleans compare with `true > false`
//! - anything else (mismatched types, nulls, missing fields) compares equal,
//!   which the stable sort turns into "keep input order"

use crate::core::field::FieldValue;
use crate::core::record::Record;
use crate::engine::state::SortDirection;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::cmp::Ordering;

/// Sort records by the named column
///
/// With no column or no direction this is the identity: the insertion-order
/// state after the sort cycle clears. The sort is stable, and descending is
/// the exact reverse of ascending on unequal keys.
pub fn sort<R: Record>(
    mut records: Vec<R>,
    column: Option<&str>,
    direction: Option<SortDirection>,
) -> Vec<R> {
    let (Some(column), Some(direction)) = (column, direction) else {
        return records;
    };

    records.sort_by(|a, b| {
        let ordering = compare_values(
            a.field_value(column).as_ref(),
            b.field_value(column).as_ref(),
        );
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    records
}

/// Compare two optional field values under the column ordering rules
pub fn compare_values(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    match (a, b) {
        (Some(FieldValue::String(a)), Some(FieldValue::String(b))) => {
            if let (Some(a_ts), Some(b_ts)) = (parse_date(a), parse_date(b)) {
                a_ts.cmp(&b_ts)
            } else {
                a.to_lowercase().cmp(&b.to_lowercase())
            }
        }
        (Some(FieldValue::Boolean(a)), Some(FieldValue::Boolean(b))) => a.cmp(b),
        (Some(a), Some(b)) => match (a.as_number(), b.as_number()) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
        _ => Ordering::Equal,
    }
}

/// Try to read a string as a date, yielding a comparable timestamp
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS`, and the day-precision formats
/// `YYYY-MM-DD`, `YYYY/MM/DD`, `DD-MM-YYYY`.
fn parse_date(text: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc().timestamp_millis());
    }
    for format in ["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis());
        }
    }
    None
}
