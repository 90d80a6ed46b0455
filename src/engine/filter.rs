//! Free-text filtering over a searchable-field whitelist

use crate::core::record::Record;

/// Retain the records whose searchable fields match a free-text term
///
/// Matching is a case-insensitive substring test: a record survives when any
/// of its searchable fields, rendered as text, contains the lowercased term.
/// The empty term matches everything, and filtering never reorders.
pub fn filter<R: Record>(records: Vec<R>, term: &str, searchable_fields: &[&str]) -> Vec<R> {
    if term.is_empty() {
        return records;
    }

    let needle = term.to_lowercase();
    records
        .into_iter()
        .filter(|record| {
            searchable_fields.iter().any(|field| {
                record
                    .field_value(field)
                    .is_some_and(|value| value.search_text().to_lowercase().contains(&needle))
            })
        })
        .collect()
}
