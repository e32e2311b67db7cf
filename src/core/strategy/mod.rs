mod collector;
mod parallel;
mod request;
mod select;


pub use collector::{Reduction, TopKCollector};
pub use parallel::ParallelSelection;
pub use request::SelectRequest;
pub use select::{
    natural_order, reverse_order, select_top_k, select_top_k_by, select_top_k_descending, OrderFn, TopKSorter,
};
