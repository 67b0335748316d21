mod widget;

pub use widget::{RecentSales, SalesChart};
