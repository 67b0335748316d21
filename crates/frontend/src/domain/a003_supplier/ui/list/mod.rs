mod state;

use leptos::prelude::*;

use crate::dashboards::d402_supplier_share::ui::TopSuppliers;
use crate::shared::components::data_table::DataTable;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use state::create_state;

#[component]
pub fn SuppliersPage() -> impl IntoView {
    let driver = create_state();
    let search_text = RwSignal::new(String::new());

    view! {
        <PageFrame page_id="a003_supplier--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("suppliers")}
                    <h1 class="page__title">"Suppliers"</h1>
                </div>
            </div>

            <div class="page__body">
                <div class="page__content">
                    <DataTable driver=driver search_text=search_text />
                </div>
                <TopSuppliers />
            </div>
        </PageFrame>
    }
}
