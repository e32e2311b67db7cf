//! Top-k selection in memory proportional to `k`.
//!
//! [`BoundedSelector`] keeps the best `k` elements seen so far in a sorted buffer and rejects
//! anything that can't beat its last element with one comparison. The entry points
//! ([`select_top_k`], [`select_top_k_by`], [`select_top_k_descending`]) pick between that and a
//! full sort, [`TopKCollector`] drives it from streams and partitions, and
//! [`ParallelSelection`] runs partitions on a rayon pool.
//!
//! `None` elements are skipped by every entry point.

mod common;
mod core;

pub use crate::common::config::SelectionConfig;
pub use crate::common::constants::{COLLECTOR_LIMIT_CEILING, FULL_SORT_THRESHOLD};
pub use crate::common::errors::TopKError;
pub use crate::core::selector::{BoundedSelector, SelectorMetrics};
pub use crate::core::strategy::{
    natural_order, reverse_order, select_top_k, select_top_k_by, select_top_k_descending, OrderFn,
    ParallelSelection, Reduction, SelectRequest, TopKCollector, TopKSorter,
};

pub type Result<T> = std::result::Result<T, TopKError>;
