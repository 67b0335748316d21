//! Bridge to the Chart.js global loaded by the host page.

pub mod adapter;
pub mod widget;

pub use adapter::ChartInstance;
pub use widget::ChartCanvas;
