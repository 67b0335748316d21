//! List query pipeline shared by every table on the dashboard.
//!
//! ```text
//! records --filter--> sublist --paginate--> page --render_rows--> view rows
//! ```
//!
//! A [`TableDriver`] owns the per-table [`TableState`] and re-runs the whole
//! pipeline on every event.

pub mod config;
pub mod driver;
pub mod filter;
pub mod paginator;
pub mod state;
pub mod view_row;

pub use config::{FieldSelector, TableConfig};
pub use driver::{TableDriver, TableView};
pub use filter::{filter_records, matches_query};
pub use paginator::{page_controls, paginate, total_pages, Page, PageControl};
pub use state::TableState;
pub use view_row::{render_rows, ViewCell, ViewRow};
