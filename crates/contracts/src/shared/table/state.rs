use std::collections::BTreeSet;

/// View state of one table: the active search text, the requested page and
/// the checked rows.
///
/// The record list itself never changes; only this view over it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    current_filter: String,
    current_page: usize,
    selected: BTreeSet<u32>,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            current_filter: String::new(),
            current_page: 1,
            selected: BTreeSet::new(),
        }
    }
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_filter(&self) -> &str {
        &self.current_filter
    }

    /// Requested page as last set, before the paginator clamps it.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// New search text always restarts at page 1.
    pub fn on_search_input(&mut self, text: &str) {
        self.current_filter = text.trim().to_string();
        self.current_page = 1;
        self.selected.clear();
    }

    pub fn on_page_select(&mut self, page: usize) {
        self.current_page = page;
        self.selected.clear();
    }

    /// Master checkbox: checks or clears every visible row.
    pub fn on_select_all(&mut self, checked: bool, visible: impl IntoIterator<Item = u32>) {
        self.selected.clear();
        if checked {
            self.selected.extend(visible);
        }
    }

    pub fn on_row_toggle(&mut self, key: u32, checked: bool) {
        if checked {
            self.selected.insert(key);
        } else {
            self.selected.remove(&key);
        }
    }

    pub fn is_selected(&self, key: u32) -> bool {
        self.selected.contains(&key)
    }

    pub fn selected(&self) -> &BTreeSet<u32> {
        &self.selected
    }

    /// True when there is at least one visible row and all of them are checked.
    pub fn all_selected(&self, visible: &[u32]) -> bool {
        !visible.is_empty() && visible.iter().all(|key| self.selected.contains(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = TableState::new();
        assert_eq!(state.current_filter(), "");
        assert_eq!(state.current_page(), 1);
        assert!(state.selected().is_empty());
    }

    #[test]
    fn test_search_trims_and_resets_page() {
        let mut state = TableState::new();
        state.on_page_select(3);
        state.on_search_input("  Phone ");
        assert_eq!(state.current_filter(), "Phone");
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_page_select_keeps_filter_and_is_not_clamped_here() {
        let mut state = TableState::new();
        state.on_search_input("apple");
        state.on_page_select(42);
        assert_eq!(state.current_filter(), "apple");
        assert_eq!(state.current_page(), 42);
    }

    #[test]
    fn test_select_all_and_row_toggle() {
        let mut state = TableState::new();
        let visible = [1, 2, 3];
        state.on_select_all(true, visible);
        assert!(state.all_selected(&visible));

        state.on_row_toggle(2, false);
        assert!(!state.all_selected(&visible));
        assert!(state.is_selected(1));
        assert!(!state.is_selected(2));

        state.on_select_all(false, visible);
        assert!(state.selected().is_empty());
    }

    #[test]
    fn test_events_clear_selection() {
        let mut state = TableState::new();
        state.on_select_all(true, [1, 2]);
        state.on_page_select(2);
        assert!(state.selected().is_empty());

        state.on_row_toggle(9, true);
        state.on_search_input("x");
        assert!(state.selected().is_empty());
    }

    #[test]
    fn test_all_selected_false_for_empty_page() {
        let state = TableState::new();
        assert!(!state.all_selected(&[]));
    }
}
