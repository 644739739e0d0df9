use wasm_bindgen::prelude::*;

mod modes;
mod shells;
mod widget;

use widget::AtomicModel;

eduvision_web::export_widget!(AtomicModel, "atomic-model");
