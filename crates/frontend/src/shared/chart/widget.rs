use contracts::shared::chart::ChartConfig;
use leptos::prelude::*;

use super::adapter::ChartInstance;

/// Canvas that hosts one chart.
///
/// The chart is created once the canvas is mounted, follows window
/// resizes, and is destroyed with the component.
#[component]
pub fn ChartCanvas(
    config: ChartConfig,
    /// DOM id of the canvas, e.g. `"salesChart"`.
    canvas_id: &'static str,
) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    // ChartInstance holds JS handles, which are not Send
    let instance = StoredValue::new_local(None::<ChartInstance>);

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if instance.with_value(|i| i.is_some()) {
            return;
        }
        match ChartInstance::create(&canvas, &config) {
            Ok(chart) => instance.set_value(Some(chart)),
            Err(e) => log::error!("{}: {}", canvas_id, e),
        }
    });

    let resize = window_event_listener(leptos::ev::resize, move |_| {
        instance.with_value(|chart| {
            if let Some(chart) = chart {
                chart.resize();
            }
        });
    });
    on_cleanup(move || resize.remove());

    view! {
        <div class="chart-container">
            <canvas id=canvas_id node_ref=canvas_ref></canvas>
        </div>
    }
}
