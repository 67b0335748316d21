pub mod d400_stock_overview;
pub mod d401_sales_overview;
pub mod d402_supplier_share;
