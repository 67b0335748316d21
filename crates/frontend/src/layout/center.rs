use crate::dashboards::d400_stock_overview::ui::StockOverviewDashboard;
use crate::domain::a001_product::ui::list::InventoryPage;
use crate::domain::a002_sale_order::ui::list::SalesPage;
use crate::domain::a003_supplier::ui::list::SuppliersPage;
use crate::layout::global_context::{AppGlobalContext, PageKey};
use leptos::prelude::*;

/// Renders the active page. Switching pages unmounts the previous one, so
/// every table starts from a fresh state, like a page reload.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <main data-zone="center" class="center">
            {move || match ctx.active.get() {
                PageKey::Dashboard => view! { <StockOverviewDashboard /> }.into_any(),
                PageKey::Inventory => view! { <InventoryPage /> }.into_any(),
                PageKey::Sales => view! { <SalesPage /> }.into_any(),
                PageKey::Suppliers => view! { <SuppliersPage /> }.into_any(),
            }}
        </main>
    }
}
