pub mod a001_product;
pub mod a002_sale_order;
pub mod a003_supplier;
