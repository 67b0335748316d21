use super::config::TableConfig;
use super::filter::filter_records;
use super::paginator::{page_controls, paginate, PageControl};
use super::state::TableState;
use super::view_row::{render_rows, ViewRow};

/// Owns one table's state and turns it into a [`TableView`].
///
/// Every event mutates the state and the caller re-renders from scratch;
/// there is no incremental diffing at this level.
pub struct TableDriver<R: 'static> {
    config: &'static TableConfig<R>,
    records: &'static [R],
    state: TableState,
}

impl<R: 'static> Clone for TableDriver<R> {
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            records: self.records,
            state: self.state.clone(),
        }
    }
}

impl<R: 'static> std::fmt::Debug for TableDriver<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableDriver")
            .field("table_id", &self.config.table_id)
            .field("records", &self.records.len())
            .field("state", &self.state)
            .finish()
    }
}

/// Everything the view layer needs to draw a table and its pager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub table_id: &'static str,
    pub columns: &'static [&'static str],
    pub filter: String,
    pub rows: Vec<ViewRow>,
    pub controls: Vec<PageControl>,
    pub total_pages: usize,
    pub effective_page: usize,
    /// Rows matching the filter across all pages.
    pub total_count: usize,
}

impl TableView {
    pub fn row_keys(&self) -> Vec<u32> {
        self.rows.iter().map(|row| row.key).collect()
    }
}

impl<R: 'static> TableDriver<R> {
    pub fn new(config: &'static TableConfig<R>, records: &'static [R]) -> Self {
        Self {
            config,
            records,
            state: TableState::new(),
        }
    }

    pub fn config(&self) -> &'static TableConfig<R> {
        self.config
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn on_search_input(&mut self, text: &str) {
        self.state.on_search_input(text);
    }

    pub fn on_page_select(&mut self, page: usize) {
        self.state.on_page_select(page);
    }

    /// Checks or clears every row on the page currently shown.
    pub fn on_select_all(&mut self, checked: bool) {
        let visible = self.render().row_keys();
        self.state.on_select_all(checked, visible);
    }

    pub fn on_row_toggle(&mut self, key: u32, checked: bool) {
        self.state.on_row_toggle(key, checked);
    }

    /// Filter, paginate and project the current page.
    pub fn render(&self) -> TableView {
        let filtered = filter_records(
            self.records,
            self.config.searchable_fields,
            self.state.current_filter(),
        );
        let page = paginate(&filtered, self.config.page_size, self.state.current_page());
        let rows = render_rows(&page.items, self.config.render_row);

        TableView {
            table_id: self.config.table_id,
            columns: self.config.columns,
            filter: self.state.current_filter().to_string(),
            rows,
            controls: page_controls(page.total_pages, page.effective_page),
            total_pages: page.total_pages,
            effective_page: page.effective_page,
            total_count: page.total_count,
        }
    }
}
