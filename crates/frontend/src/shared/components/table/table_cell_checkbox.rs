use leptos::prelude::*;
use thaw::*;

/// Row selection checkbox.
///
/// Stops click propagation so a row click handler never sees it.
#[component]
pub fn TableCellCheckbox(
    /// Record key of the row
    item_id: u32,

    #[prop(into)]
    checked: Signal<bool>,

    /// Callback with (item_id, checked)
    on_change: Callback<(u32, bool)>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox row-check"
                data-id=item_id.to_string()
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run((item_id, event_target_checked(&ev)))
            />
        </TableCell>
    }
}
