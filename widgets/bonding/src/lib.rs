use wasm_bindgen::prelude::*;

mod bond;
mod builder;
mod molecule;
mod widget;

use widget::BondingSandbox;

eduvision_web::export_widget!(BondingSandbox, "bonding");
