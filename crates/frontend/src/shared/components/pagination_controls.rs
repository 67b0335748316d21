use contracts::shared::table::PageControl;
use leptos::prelude::*;

/// One numbered button per page; the effective page carries `active`.
///
/// Clicking a button hands its page number to `on_page_change`, which is
/// expected to re-run the table with the filter unchanged.
#[component]
pub fn PaginationControls(
    /// Page buttons, in order.
    #[prop(into)]
    controls: Signal<Vec<PageControl>>,

    /// Rows matching the current filter.
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback when page changes (1-indexed)
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            {move || {
                controls
                    .get()
                    .into_iter()
                    .map(|control| {
                        let number = control.number;
                        view! {
                            <button
                                class="pagination-btn"
                                class:active=control.selected
                                aria-current=if control.selected { Some("page") } else { None }
                                on:click=move |_| on_page_change.run(number)
                            >
                                {number.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <span class="pagination-info">
                {move || format!("{} items", total_count.get())}
            </span>
        </div>
    }
}
