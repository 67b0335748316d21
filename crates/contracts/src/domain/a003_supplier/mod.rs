pub mod aggregate;
pub mod ranking;
pub mod sample;
pub mod table;

pub use aggregate::{Supplier, SupplierId};
pub use ranking::top_by_share;
pub use sample::suppliers;
pub use table::SUPPLIER_TABLE;
