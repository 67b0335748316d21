mod widget;

pub use widget::TopSuppliers;
