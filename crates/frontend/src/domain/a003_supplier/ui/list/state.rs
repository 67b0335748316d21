use contracts::domain::a003_supplier::{suppliers, Supplier, SUPPLIER_TABLE};
use contracts::shared::table::TableDriver;
use leptos::prelude::*;

pub fn create_state() -> RwSignal<TableDriver<Supplier>> {
    RwSignal::new(TableDriver::new(&SUPPLIER_TABLE, suppliers()))
}
