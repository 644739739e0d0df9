use wasm_bindgen::prelude::*;

mod lattice;
mod sea;
mod widget;

use widget::MetallicBonding;

eduvision_web::export_widget!(MetallicBonding, "metallic-bonding");
