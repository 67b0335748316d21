use contracts::dashboards::d402_supplier_share::{supplier_share_chart, top_supplier_shares};
use contracts::domain::a003_supplier::suppliers;
use leptos::prelude::*;

use crate::shared::chart::ChartCanvas;

/// Doughnut of the largest suppliers with a colour-matched legend.
#[component]
pub fn TopSuppliers() -> impl IntoView {
    let shares = top_supplier_shares(suppliers());
    let chart = supplier_share_chart(&shares);

    view! {
        <aside class="right-rail">
            <h3 class="right-rail__title">"Top Suppliers"</h3>
            <ChartCanvas config=chart canvas_id="suppliersChart" />
            <ul class="supplier-legend">
                {shares
                    .into_iter()
                    .map(|share| {
                        let percent = share.percent_label();
                        view! {
                            <li class="supplier-legend__item">
                                <span
                                    class="supplier-legend__dot"
                                    style=format!("background: {};", share.color)
                                ></span>
                                <span class="supplier-legend__name">{share.name}</span>
                                <span class="supplier-legend__share" style=format!("color: {};", share.color)>
                                    {percent}
                                </span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}
