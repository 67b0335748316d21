use contracts::shared::chart::{format_compact_tick, ChartConfig};
use js_sys::{Object, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// JS binding for Chart.js, expected as `window.Chart`.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    #[derive(Debug, Clone)]
    pub type ChartHandle;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<ChartHandle, JsValue>;

    #[wasm_bindgen(method, js_class = "Chart")]
    fn resize(this: &ChartHandle);

    #[wasm_bindgen(method, js_class = "Chart")]
    fn destroy(this: &ChartHandle);
}

/// A live chart. Dropping it destroys the Chart.js instance.
pub struct ChartInstance {
    handle: ChartHandle,
    // referenced from the JS options object, must outlive the chart
    _tick_format: Option<Closure<dyn Fn(f64) -> String>>,
}

impl ChartInstance {
    /// Builds a chart on `canvas`.
    ///
    /// Fails when the config cannot be converted or when Chart.js is not
    /// loaded; callers log the error and leave the canvas empty.
    pub fn create(canvas: &HtmlCanvasElement, config: &ChartConfig) -> Result<Self, String> {
        let js_config = config
            .serialize(&Serializer::json_compatible())
            .map_err(|e| format!("Failed to serialize chart config: {}", e))?;

        let tick_format = if config.compact_y_ticks {
            let closure = Closure::<dyn Fn(f64) -> String>::new(format_compact_tick);
            install_y_tick_callback(&js_config, closure.as_ref())
                .map_err(|e| format!("Failed to install tick formatter: {:?}", e))?;
            Some(closure)
        } else {
            None
        };

        let handle = ChartHandle::new(canvas, &js_config)
            .map_err(|e| format!("Failed to create chart: {:?}", e))?;

        Ok(Self {
            handle,
            _tick_format: tick_format,
        })
    }

    pub fn resize(&self) {
        self.handle.resize();
    }
}

impl Drop for ChartInstance {
    fn drop(&mut self) {
        self.handle.destroy();
    }
}

/// Sets `options.scales.y.ticks.callback`, creating missing objects on the way.
fn install_y_tick_callback(config: &JsValue, callback: &JsValue) -> Result<(), JsValue> {
    let options = child_object(config, "options")?;
    let scales = child_object(&options, "scales")?;
    let y = child_object(&scales, "y")?;
    let ticks = child_object(&y, "ticks")?;
    Reflect::set(&ticks, &JsValue::from_str("callback"), callback)?;
    Ok(())
}

fn child_object(parent: &JsValue, key: &str) -> Result<JsValue, JsValue> {
    let key = JsValue::from_str(key);
    let existing = Reflect::get(parent, &key)?;
    if existing.is_object() {
        return Ok(existing);
    }
    let created: JsValue = Object::new().into();
    Reflect::set(parent, &key, &created)?;
    Ok(created)
}
