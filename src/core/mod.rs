pub mod selector;
pub mod strategy;
