use contracts::dashboards::d401_sales_overview::{recent_sales, sales_chart};
use leptos::prelude::*;

use crate::shared::chart::ChartCanvas;
use crate::shared::icons::icon;

/// Monthly revenue per sales channel.
#[component]
pub fn SalesChart() -> impl IntoView {
    view! {
        <div class="card">
            <h3 class="card__title">"Sales Overview"</h3>
            <ChartCanvas config=sales_chart() canvas_id="salesChart" />
        </div>
    }
}

#[component]
pub fn RecentSales() -> impl IntoView {
    view! {
        <aside class="right-rail">
            <h3 class="right-rail__title">"Recent Sales"</h3>
            <ul class="activity-list">
                {recent_sales()
                    .iter()
                    .map(|entry| {
                        view! {
                            <li class="activity-list__item">
                                <span class="activity-list__avatar">{icon("user")}</span>
                                <div>
                                    <div class="activity-list__text">{entry.text.clone()}</div>
                                    <div class="activity-list__detail">
                                        {format!("{} • {}", entry.actor, entry.time)}
                                    </div>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}
