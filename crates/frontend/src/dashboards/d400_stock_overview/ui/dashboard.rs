use contracts::dashboards::d400_stock_overview::{fast_moving_items, stock_chart};
use leptos::prelude::*;

use crate::shared::chart::ChartCanvas;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};

#[component]
pub fn StockOverviewDashboard() -> impl IntoView {
    view! {
        <PageFrame page_id="d400_stock_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("dashboard")}
                    <h1 class="page__title">"Dashboard"</h1>
                </div>
            </div>

            <div class="page__body">
                <div class="page__content">
                    <div class="card">
                        <h3 class="card__title">"Stock Movement"</h3>
                        <ChartCanvas config=stock_chart() canvas_id="stockChart" />
                    </div>
                </div>

                <aside class="right-rail">
                    <h3 class="right-rail__title">"Fast Moving Items"</h3>
                    <ul class="fast-moving">
                        {fast_moving_items()
                            .iter()
                            .map(|item| {
                                view! {
                                    <li class="fast-moving__item">
                                        <span class="fast-moving__icon">{icon(&item.icon)}</span>
                                        <span>{item.name.clone()}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </aside>
            </div>
        </PageFrame>
    }
}
