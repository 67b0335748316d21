use contracts::domain::a002_sale_order::{sale_orders, SaleOrder, SALE_ORDER_TABLE};
use contracts::shared::table::TableDriver;
use leptos::prelude::*;

pub fn create_state() -> RwSignal<TableDriver<SaleOrder>> {
    RwSignal::new(TableDriver::new(&SALE_ORDER_TABLE, sale_orders()))
}
