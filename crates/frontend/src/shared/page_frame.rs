//! PageFrame: standard root wrapper for every page.
//!
//! Sets two metadata attributes on the root DOM element:
//!   - `id`                  `"{entity}--{category}"`, e.g. `"a001_product--list"`
//!   - `data-page-category`  one of the PAGE_CAT_* constants

use leptos::prelude::*;

/// Table with search and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Charts and summary widgets.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div
            id=page_id
            class=class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
