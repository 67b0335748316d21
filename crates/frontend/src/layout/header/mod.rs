use crate::shared::api_utils::fetch_text;
use crate::shared::config::AppConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Header mount point, filled with the static header fragment.
///
/// The fragment is fetched once. On failure the error is logged and the
/// page keeps working without a header; there is no retry.
#[component]
pub fn IncludedHeader() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let (markup, set_markup) = signal(String::new());

    let url = config.header_include_url.clone();
    spawn_local(async move {
        match fetch_text(&url).await {
            Ok(html) => set_markup.set(html),
            Err(e) => log::error!("Error loading header: {}", e),
        }
    });

    view! {
        <header id="header" data-zone="header" class="header" inner_html=move || markup.get()></header>
    }
}
