mod bounded_selector;
mod selector_metrics;

pub use bounded_selector::BoundedSelector;
pub use selector_metrics::SelectorMetrics;
