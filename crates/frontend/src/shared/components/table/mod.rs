pub mod table_cell_checkbox;
pub mod table_header_checkbox;
pub mod view_cell;

pub use table_cell_checkbox::TableCellCheckbox;
pub use table_header_checkbox::TableHeaderCheckbox;
pub use view_cell::ViewCellContent;
