use wasm_bindgen::prelude::*;

mod layout;
mod widget;

use widget::PeriodicTable;

eduvision_web::export_widget!(PeriodicTable, "periodic-table");
