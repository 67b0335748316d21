mod dashboard;

pub use dashboard::StockOverviewDashboard;
