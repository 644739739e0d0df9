pub mod types;
pub mod widget;
