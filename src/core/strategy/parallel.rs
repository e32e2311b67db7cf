use std::cmp::Ordering;

use log::{debug, info};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use rayon::{ThreadPool, ThreadPoolBuilder};

use super::collector::{Reduction, TopKCollector};
use super::select::sort_all;
use crate::common::config::SelectionConfig;
use crate::common::errors::TopKError;
use crate::common::utils::checked_limit;

/// Runs reductions on a dedicated rayon pool.
///
/// Every split of the source is accumulated into a state owned by exactly one worker,
/// partial states are combined pairwise as the splits join. Nothing is shared between
/// workers, so no locking is involved.
pub struct ParallelSelection {
    pool: ThreadPool,
    config: SelectionConfig,
}

impl ParallelSelection {
    pub fn new(config: SelectionConfig) -> Result<Self, TopKError> {
        let num_threads = config.effective_threads();
        let pool = ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|index| format!("topk_select_{index}"))
            .build()?;
        info!("[ParallelSelection] selection pool ready, threads: {}", num_threads);
        Ok(ParallelSelection { pool, config })
    }

    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Run `reduction` over `source`, one state per rayon split.
    pub fn collect<R, I>(&self, reduction: &R, source: I) -> R::Output
    where
        R: Reduction + Sync,
        R::State: Send,
        R::Output: Send,
        I: IntoParallelIterator + Send,
        I::Item: Into<Option<R::Element>>,
    {
        self.pool.install(|| {
            let state = source
                .into_par_iter()
                .fold(
                    || reduction.supplier(),
                    |mut state, element| {
                        reduction.accumulator(&mut state, element);
                        state
                    },
                )
                .reduce(|| reduction.supplier(), |left, right| reduction.combiner(left, right));
            reduction.finisher(state)
        })
    }

    /// Parallel counterpart of [`crate::select_top_k_by`].
    pub fn select_top_k_by<T, E, C>(&self, source: Vec<E>, limit: i64, order: C) -> Result<Vec<T>, TopKError>
    where
        T: Send,
        E: Into<Option<T>> + Send,
        C: Fn(&T, &T) -> Ordering + Clone + Send + Sync,
    {
        let limit = checked_limit(limit)?;
        if limit == 0 || source.is_empty() {
            return Ok(vec![]);
        }

        let len = source.len();
        if limit >= len && len > self.config.full_sort_threshold {
            debug!("[select_top_k_by] limit {} covers all {} elements, sorting fully", limit, len);
            return Ok(self.pool.install(|| {
                let present: Vec<T> = source.into_par_iter().filter_map(|element| element.into()).collect();
                sort_all(present, &order)
            }));
        }

        let collector = TopKCollector::with_limit(limit.min(len), order);
        Ok(self.collect(&collector, source))
    }
}
