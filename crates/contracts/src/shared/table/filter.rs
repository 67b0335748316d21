use super::config::FieldSelector;

/// Returns the records whose searchable fields contain `query`.
///
/// The query is trimmed first; an empty query keeps every record. Matching
/// is a case-insensitive substring test against each field, and the result
/// keeps the original order.
pub fn filter_records<'a, R>(
    records: &'a [R],
    fields: &[FieldSelector<R>],
    query: &str,
) -> Vec<&'a R> {
    let query = query.trim();
    if query.is_empty() {
        return records.iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches_query(*record, fields, &needle))
        .collect()
}

/// `needle` must already be trimmed and lowercased.
pub fn matches_query<R>(record: &R, fields: &[FieldSelector<R>], needle: &str) -> bool {
    fields
        .iter()
        .any(|field| field(record).to_lowercase().contains(needle))
}
