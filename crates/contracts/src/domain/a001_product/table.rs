use crate::shared::table::{FieldSelector, TableConfig, ViewCell, ViewRow};

use super::aggregate::Product;

fn name(p: &Product) -> &str {
    &p.name
}

fn code(p: &Product) -> &str {
    &p.code
}

fn product_type(p: &Product) -> &str {
    &p.product_type
}

static SEARCHABLE: [FieldSelector<Product>; 3] = [name, code, product_type];

fn render_row(p: &Product) -> ViewRow {
    ViewRow {
        key: p.id.value(),
        cells: vec![
            ViewCell::Identity {
                image: p.image.clone(),
                title: p.name.clone(),
                subtitle: Some(p.code.clone()),
                round: false,
            },
            ViewCell::text(&p.code),
            ViewCell::text(&p.product_type),
            ViewCell::Strong(p.price.clone()),
            ViewCell::text(p.qty),
            ViewCell::Image {
                src: p.image.clone(),
                alt: String::new(),
            },
        ],
    }
}

pub static PRODUCT_TABLE: TableConfig<Product> = TableConfig {
    table_id: "productTable",
    page_size: 6,
    columns: &["Product Name", "Product Code", "Type", "Price", "Quantity", "Image"],
    searchable_fields: &SEARCHABLE,
    render_row,
    search_placeholder: "Search product, code or type",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::products;
    use crate::shared::table::{filter_records, TableDriver};

    fn names(found: &[&Product]) -> Vec<String> {
        found.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_phone_search_is_substring_over_all_fields() {
        let found = filter_records(products(), PRODUCT_TABLE.searchable_fields, "phone");
        // "Earphones" contains "phone" too.
        assert_eq!(
            names(&found),
            vec!["iPhone 14 pro", "Airpods Pro", "Samsung Galaxy Fold"]
        );

        let upper = filter_records(products(), PRODUCT_TABLE.searchable_fields, "PHONE");
        assert_eq!(names(&upper), names(&found));

        let phones: Vec<_> = found.iter().filter(|p| p.product_type == "Phone").collect();
        assert_eq!(phones.len(), 2);
    }

    #[test]
    fn test_search_by_code() {
        let found = filter_records(products(), PRODUCT_TABLE.searchable_fields, "#0007");
        assert_eq!(names(&found), vec!["Logitech Superlight"]);
    }

    #[test]
    fn test_price_is_not_searchable() {
        assert!(filter_records(products(), PRODUCT_TABLE.searchable_fields, "$1,241").is_empty());
    }

    #[test]
    fn test_two_pages_of_six() {
        let mut driver = TableDriver::new(&PRODUCT_TABLE, products());
        let first = driver.render();
        assert_eq!(first.rows.len(), 6);
        assert_eq!(first.total_pages, 2);

        driver.on_page_select(2);
        let second = driver.render();
        assert_eq!(second.row_keys(), vec![7, 8]);
    }

    #[test]
    fn test_row_layout() {
        let driver = TableDriver::new(&PRODUCT_TABLE, products());
        let row = &driver.render().rows[0];
        assert_eq!(row.key, 1);
        assert_eq!(row.cells.len(), PRODUCT_TABLE.columns.len());
        assert_eq!(row.cells[3], ViewCell::Strong("$1,241".to_string()));
        assert_eq!(row.cells[4], ViewCell::Text("44".to_string()));
    }
}
