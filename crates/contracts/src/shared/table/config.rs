use super::view_row::ViewRow;

/// Projects one searchable text field out of a record.
pub type FieldSelector<R> = fn(&R) -> &str;

/// Per-domain table descriptor.
///
/// Each table on the dashboard differs only in which fields are searched,
/// how many rows fit on a page and how a record maps onto cells, so those
/// differences live here instead of behind a trait object.
pub struct TableConfig<R: 'static> {
    /// DOM id of the rendered `<table>`, also used as the log target.
    pub table_id: &'static str,
    /// Rows per page, always positive.
    pub page_size: usize,
    /// Header labels after the select-all checkbox column.
    pub columns: &'static [&'static str],
    /// Fields matched by the search box.
    pub searchable_fields: &'static [FieldSelector<R>],
    /// Record to display row projection.
    pub render_row: fn(&R) -> ViewRow,
    pub search_placeholder: &'static str,
}

impl<R: 'static> std::fmt::Debug for TableConfig<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableConfig")
            .field("table_id", &self.table_id)
            .field("page_size", &self.page_size)
            .field("columns", &self.columns)
            .field("searchable_fields", &self.searchable_fields.len())
            .finish()
    }
}
