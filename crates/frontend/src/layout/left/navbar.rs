use crate::layout::global_context::{page_href, AppGlobalContext, PageKey};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <nav class="main-nav-bar">
            <ul>
                {PageKey::ALL.into_iter().map(|page| {
                    view! {
                        <li>
                            <a
                                class="nav-link"
                                class:active=move || ctx.is_active(page)
                                href=page_href(page)
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    ctx.open_page(page);
                                }
                            >
                                {icon(page.key())}
                                <span>{page.title()}</span>
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
