//! Platform-independent half of the inventory admin dashboard.
//!
//! Holds the sample records, the list query pipeline (filter, paginate,
//! render rows) and the chart payloads handed to the browser charting
//! library. Nothing here touches the DOM, so everything is testable natively.

pub mod dashboards;
pub mod domain;
pub mod shared;
