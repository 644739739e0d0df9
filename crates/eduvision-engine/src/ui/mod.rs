pub mod modal;
pub mod quiz;
