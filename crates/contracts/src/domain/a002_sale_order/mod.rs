pub mod aggregate;
pub mod sample;
pub mod table;

pub use aggregate::{SaleOrder, SaleOrderId};
pub use sample::sale_orders;
pub use table::SALE_ORDER_TABLE;
