use once_cell::sync::Lazy;

use super::aggregate::Product;

static PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product::new(1, "Macbook Pro", "#0001", "Laptop", "$1,241", 44, "https://via.placeholder.com/80x60?text=MBP"),
        Product::new(2, "iPhone 14 pro", "#0002", "Phone", "$1,499", 23, "https://via.placeholder.com/80x60?text=iPhone"),
        Product::new(3, "Zoom75", "#0003", "Keyboard", "$215", 23, "https://via.placeholder.com/80x60?text=Zoom75"),
        Product::new(4, "Airpods Pro", "#0004", "Earphones", "$249", 23, "https://via.placeholder.com/80x60?text=Airpods"),
        Product::new(5, "Samsung Galaxy Fold", "#0005", "Phone", "$1,199", 23, "https://via.placeholder.com/80x60?text=Fold"),
        Product::new(6, "Samsung Odyssey", "#0006", "Displays", "$500", 23, "https://via.placeholder.com/80x60?text=Odyssey"),
        Product::new(7, "Logitech Superlight", "#0007", "Mouse", "$150", 28, "https://via.placeholder.com/80x60?text=Mouse"),
        Product::new(8, "Dell Monitor", "#0008", "Displays", "$350", 15, "https://via.placeholder.com/80x60?text=Dell"),
    ]
});

/// Inventory sample set, in display order.
pub fn products() -> &'static [Product] {
    &PRODUCTS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = products().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), products().len());
        assert_eq!(products().len(), 8);
    }
}
