//! Searchable, paginated table bound to a [`TableDriver`].
//!
//! Search text changes and page clicks are fed to the driver, which
//! re-runs filter, paginate and row projection from scratch; the view
//! below just draws the resulting [`TableView`].

use contracts::shared::table::{TableDriver, TableView};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox, ViewCellContent};
use crate::shared::icons::icon;

#[component]
pub fn DataTable<R>(
    /// Table state plus its static descriptor and records.
    driver: RwSignal<TableDriver<R>>,
    /// Search box text. Other widgets may write it, e.g. a global search.
    search_text: RwSignal<String>,
) -> impl IntoView
where
    R: Send + Sync + 'static,
{
    let config = driver.with_untracked(|d| d.config());
    let table_id = config.table_id;

    Effect::watch(
        move || search_text.get(),
        move |text, _, _| driver.update(|d| d.on_search_input(text)),
        false,
    );

    let table_view: Memo<TableView> = Memo::new(move |_| {
        let view = driver.with(|d| d.render());
        log::debug!(
            "{}: filter={:?} page={}/{} rows={}",
            table_id,
            view.filter,
            view.effective_page,
            view.total_pages,
            view.rows.len()
        );
        view
    });

    let visible = Signal::derive(move || table_view.with(|v| v.row_keys()));
    let selected = Signal::derive(move || driver.with(|d| d.state().selected().clone()));

    let go_to_page = move |page: usize| driver.update(|d| d.on_page_select(page));
    let toggle_all = move |checked: bool| driver.update(|d| d.on_select_all(checked));
    let toggle_row = move |(key, checked): (u32, bool)| driver.update(|d| d.on_row_toggle(key, checked));

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left">
                    {icon("search")}
                    <div style="flex: 1; max-width: 320px;">
                        <Input value=search_text placeholder=config.search_placeholder />
                    </div>
                </div>
                <div class="filter-panel-header__right">
                    <PaginationControls
                        controls=Signal::derive(move || table_view.with(|v| v.controls.clone()))
                        total_count=Signal::derive(move || table_view.with(|v| v.total_count))
                        on_page_change=Callback::new(go_to_page)
                    />
                </div>
            </div>
        </div>

        <div class="table-wrapper">
            <Table attr:id=table_id attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCheckbox
                            visible=visible
                            selected=selected
                            on_change=Callback::new(toggle_all)
                        />
                        {config
                            .columns
                            .iter()
                            .map(|label| view! { <TableHeaderCell resizable=false>{*label}</TableHeaderCell> })
                            .collect_view()}
                    </TableRow>
                </TableHeader>

                <TableBody>
                    <For
                        each=move || table_view.get().rows
                        key=|row| row.key
                        children=move |row| {
                            let key = row.key;
                            view! {
                                <TableRow>
                                    <TableCellCheckbox
                                        item_id=key
                                        checked=Signal::derive(move || driver.with(|d| d.state().is_selected(key)))
                                        on_change=Callback::new(toggle_row)
                                    />
                                    {row
                                        .cells
                                        .into_iter()
                                        .map(|cell| view! { <ViewCellContent cell=cell /> })
                                        .collect_view()}
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>

            <Show when=move || table_view.with(|v| v.rows.is_empty())>
                <div class="table__empty">"No matching records"</div>
            </Show>
        </div>
    }
}
