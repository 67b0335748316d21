use crate::shared::table::{FieldSelector, TableConfig, ViewCell, ViewRow};

use super::aggregate::Supplier;

fn name(s: &Supplier) -> &str {
    &s.name
}

fn email(s: &Supplier) -> &str {
    &s.email
}

fn phone(s: &Supplier) -> &str {
    &s.phone
}

static SEARCHABLE: [FieldSelector<Supplier>; 3] = [name, email, phone];

fn render_row(s: &Supplier) -> ViewRow {
    ViewRow {
        key: s.id.value(),
        cells: vec![
            ViewCell::Identity {
                image: s.logo.clone(),
                title: s.name.clone(),
                subtitle: None,
                round: true,
            },
            ViewCell::text(&s.email),
            ViewCell::text(&s.phone),
            ViewCell::Action("Order History".to_string()),
        ],
    }
}

pub static SUPPLIER_TABLE: TableConfig<Supplier> = TableConfig {
    table_id: "suppliersTable",
    page_size: 8,
    columns: &["Supplier", "Email", "Phone", "Orders"],
    searchable_fields: &SEARCHABLE,
    render_row,
    search_placeholder: "Search name, email or phone",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_supplier::suppliers;
    use crate::shared::table::TableDriver;

    #[test]
    fn test_eleven_suppliers_make_two_pages() {
        let mut driver = TableDriver::new(&SUPPLIER_TABLE, suppliers());
        let first = driver.render();
        assert_eq!(first.rows.len(), 8);
        assert_eq!(first.total_pages, 2);

        driver.on_page_select(2);
        assert_eq!(driver.render().row_keys(), vec![9, 10, 11]);
    }

    #[test]
    fn test_search_email_and_phone() {
        let mut driver = TableDriver::new(&SUPPLIER_TABLE, suppliers());
        driver.on_search_input("mugna");
        // name of one supplier, email domain of another
        assert_eq!(driver.render().row_keys(), vec![3, 7]);

        driver.on_search_input("433");
        assert_eq!(driver.render().row_keys(), vec![3, 4]);
    }

    #[test]
    fn test_row_layout() {
        let driver = TableDriver::new(&SUPPLIER_TABLE, suppliers());
        let row = &driver.render().rows[0];
        assert_eq!(row.cells.len(), SUPPLIER_TABLE.columns.len());
        assert_eq!(row.cells[0].plain_text(), "Apple");
        assert_eq!(row.cells[3], ViewCell::Action("Order History".to_string()));
    }
}
