//! Select-all checkbox in the table header.
//!
//! # Example
//!
//! ```ignore
//! <TableHeaderCheckbox
//!     visible=visible_keys
//!     selected=selected_keys
//!     on_change=Callback::new(move |check_all: bool| {
//!         driver.update(|d| d.on_select_all(check_all));
//!     })
//! />
//! ```

use leptos::prelude::*;
use std::collections::BTreeSet;
use thaw::*;
use wasm_bindgen::JsCast;

/// Header checkbox with three states: unchecked, checked, indeterminate.
///
/// The state is derived from the visible rows and the selection, so it
/// falls back to unchecked whenever the table clears its selection.
#[component]
pub fn TableHeaderCheckbox(
    /// Keys of the rows on the current page
    #[prop(into)]
    visible: Signal<Vec<u32>>,

    /// Checked keys
    #[prop(into)]
    selected: Signal<BTreeSet<u32>>,

    /// true = select all, false = clear all
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_state = Signal::derive(move || {
        let keys = visible.get();
        let sel = selected.get();
        CheckboxState::of(keys.iter().filter(|key| sel.contains(*key)).count(), keys.len())
    });

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate is a DOM property only, not an attribute
    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            let state = checkbox_state.get();
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(matches!(state, CheckboxState::Indeterminate));
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                id="selectAll"
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(checkbox_state.get(), CheckboxState::Checked)
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

impl CheckboxState {
    fn of(selected: usize, total: usize) -> Self {
        if total == 0 || selected == 0 {
            CheckboxState::Unchecked
        } else if selected >= total {
            CheckboxState::Checked
        } else {
            CheckboxState::Indeterminate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_state() {
        assert_eq!(CheckboxState::of(0, 0), CheckboxState::Unchecked);
        assert_eq!(CheckboxState::of(0, 6), CheckboxState::Unchecked);
        assert_eq!(CheckboxState::of(3, 6), CheckboxState::Indeterminate);
        assert_eq!(CheckboxState::of(6, 6), CheckboxState::Checked);
    }
}
