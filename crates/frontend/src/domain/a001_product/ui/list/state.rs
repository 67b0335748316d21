use contracts::domain::a001_product::{products, Product, PRODUCT_TABLE};
use contracts::shared::table::TableDriver;
use leptos::prelude::*;

pub fn create_state() -> RwSignal<TableDriver<Product>> {
    RwSignal::new(TableDriver::new(&PRODUCT_TABLE, products()))
}
