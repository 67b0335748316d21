use crate::shared::table::{FieldSelector, TableConfig, ViewCell, ViewRow};

use super::aggregate::SaleOrder;

fn product(s: &SaleOrder) -> &str {
    &s.product
}

fn code(s: &SaleOrder) -> &str {
    &s.code
}

fn category(s: &SaleOrder) -> &str {
    &s.category
}

static SEARCHABLE: [FieldSelector<SaleOrder>; 3] = [product, code, category];

fn render_row(s: &SaleOrder) -> ViewRow {
    ViewRow {
        key: s.id.value(),
        cells: vec![
            ViewCell::text(&s.product),
            ViewCell::text(&s.code),
            ViewCell::text(&s.category),
            ViewCell::text(s.quantity),
            ViewCell::text(&s.total),
            ViewCell::Action("View Invoice".to_string()),
        ],
    }
}

pub static SALE_ORDER_TABLE: TableConfig<SaleOrder> = TableConfig {
    table_id: "salesTable",
    page_size: 6,
    columns: &["Product", "Product Code", "Category", "Quantity", "Total", "Invoice"],
    searchable_fields: &SEARCHABLE,
    render_row,
    search_placeholder: "Search product, code or category",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_sale_order::sale_orders;
    use crate::shared::table::TableDriver;

    #[test]
    fn test_search_is_paginated_and_resets_page() {
        let mut driver = TableDriver::new(&SALE_ORDER_TABLE, sale_orders());
        driver.on_page_select(2);
        assert_eq!(driver.render().row_keys(), vec![7, 8]);

        driver.on_search_input("phone");
        let view = driver.render();
        assert_eq!(view.effective_page, 1);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.row_keys(), vec![2, 4, 5]);
    }

    #[test]
    fn test_category_search() {
        let mut driver = TableDriver::new(&SALE_ORDER_TABLE, sale_orders());
        driver.on_search_input("ACCESS");
        assert_eq!(driver.render().row_keys(), vec![8]);
    }

    #[test]
    fn test_row_layout() {
        let driver = TableDriver::new(&SALE_ORDER_TABLE, sale_orders());
        let view = driver.render();
        let row = &view.rows[1];
        assert_eq!(row.cells.len(), SALE_ORDER_TABLE.columns.len());
        assert_eq!(row.cells[3], ViewCell::Text("2".to_string()));
        assert_eq!(row.cells[4], ViewCell::Text("$2,998".to_string()));
        assert_eq!(row.cells[5], ViewCell::Action("View Invoice".to_string()));
    }
}
