mod state;

use contracts::domain::a001_product::activity::{recent_activity, ActivityEntry};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::data_table::DataTable;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use state::create_state;

#[component]
pub fn InventoryPage() -> impl IntoView {
    let driver = create_state();
    let search_text = RwSignal::new(String::new());
    let global_search = RwSignal::new(String::new());

    // top bar search drives the table's own search box
    Effect::watch(
        move || global_search.get(),
        move |text, _, _| search_text.set(text.trim().to_string()),
        false,
    );

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("inventory")}
                    <h1 class="page__title">"Inventory"</h1>
                </div>
                <div class="page__header-right">
                    <div id="globalSearch" style="width: 280px;">
                        <Input value=global_search placeholder="Search anything" />
                    </div>
                </div>
            </div>

            <div class="page__body">
                <div class="page__content">
                    <DataTable driver=driver search_text=search_text />
                </div>
                <RecentActivity entries=recent_activity() />
            </div>
        </PageFrame>
    }
}

#[component]
fn RecentActivity(entries: &'static [ActivityEntry]) -> impl IntoView {
    view! {
        <aside class="right-rail">
            <h3 class="right-rail__title">"Recent Activity"</h3>
            <ul class="activity-list">
                {entries
                    .iter()
                    .map(|entry| {
                        view! {
                            <li class="activity-list__item">
                                <img class="activity-list__thumb" src=entry.thumb.clone() alt="" />
                                <div>
                                    <div class="activity-list__text">{entry.text.clone()}</div>
                                    <div class="activity-list__detail">{entry.detail.clone()}</div>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}
