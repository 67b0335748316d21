mod state;

use leptos::prelude::*;

use crate::dashboards::d401_sales_overview::ui::{RecentSales, SalesChart};
use crate::shared::components::data_table::DataTable;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use state::create_state;

#[component]
pub fn SalesPage() -> impl IntoView {
    let driver = create_state();
    let search_text = RwSignal::new(String::new());

    view! {
        <PageFrame page_id="a002_sale_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("sales")}
                    <h1 class="page__title">"Sales"</h1>
                </div>
            </div>

            <div class="page__body">
                <div class="page__content">
                    <SalesChart />
                    <DataTable driver=driver search_text=search_text />
                </div>
                <RecentSales />
            </div>
        </PageFrame>
    }
}
