pub mod activity;
pub mod aggregate;
pub mod sample;
pub mod table;

pub use aggregate::{Product, ProductId};
pub use sample::products;
pub use table::PRODUCT_TABLE;
