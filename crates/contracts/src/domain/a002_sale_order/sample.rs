use once_cell::sync::Lazy;

use super::aggregate::SaleOrder;

static SALE_ORDERS: Lazy<Vec<SaleOrder>> = Lazy::new(|| {
    vec![
        SaleOrder::new(1, "Macbook Pro", "#0001", "Laptop", 1, "$1,241"),
        SaleOrder::new(2, "iPhone 14 pro", "#0002", "Phone", 2, "$2,998"),
        SaleOrder::new(3, "Zoom75", "#0003", "Keyboard", 3, "$645"),
        SaleOrder::new(4, "Airpods Pro", "#0004", "Earphones", 1, "$249"),
        SaleOrder::new(5, "Samsung Galaxy Fold", "#0005", "Phone", 1, "$1,199"),
        SaleOrder::new(6, "Logitech Superlight", "#0007", "Mouse", 2, "$300"),
        SaleOrder::new(7, "Dell Monitor", "#0008", "Displays", 1, "$350"),
        SaleOrder::new(8, "Accessory Kit", "#0009", "Accessory", 5, "$125"),
    ]
});

pub fn sale_orders() -> &'static [SaleOrder] {
    &SALE_ORDERS
}
