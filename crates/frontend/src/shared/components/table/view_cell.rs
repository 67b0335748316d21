use contracts::shared::table::ViewCell;
use leptos::prelude::*;
use thaw::*;

/// Draws one projected cell. Every value goes in as a text node or an
/// attribute value, never as markup.
#[component]
pub fn ViewCellContent(cell: ViewCell) -> impl IntoView {
    let content = match cell {
        ViewCell::Text(text) => view! {
            <TableCellLayout truncate=true>{text}</TableCellLayout>
        }
        .into_any(),
        ViewCell::Strong(text) => view! {
            <TableCellLayout truncate=true>
                <span class="table__cell--strong">{text}</span>
            </TableCellLayout>
        }
        .into_any(),
        ViewCell::Image { src, alt } => view! {
            <img class="table__image" src=src alt=alt />
        }
        .into_any(),
        ViewCell::Identity { image, title, subtitle, round } => view! {
            <div class="table__identity">
                <img
                    class=if round { "table__thumb table__thumb--round" } else { "table__thumb" }
                    src=image
                    alt=title.clone()
                />
                <div>
                    <div class="table__identity-title">{title}</div>
                    {subtitle.map(|sub| view! { <div class="table__identity-subtitle">{sub}</div> })}
                </div>
            </div>
        }
        .into_any(),
        ViewCell::Action(label) => view! {
            <span class="table__action">{label}</span>
        }
        .into_any(),
    };

    view! { <TableCell>{content}</TableCell> }
}
