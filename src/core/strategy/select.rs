use std::cmp::Ordering;

use log::debug;
use rayon::slice::ParallelSliceMut;

use crate::common::config::SelectionConfig;
use crate::common::errors::TopKError;
use crate::common::utils::checked_limit;
use crate::core::selector::BoundedSelector;

/// Order relation as a plain function pointer.
pub type OrderFn<T> = fn(&T, &T) -> Ordering;

/// Ascending natural order of `T`.
pub fn natural_order<T: Ord>() -> OrderFn<T> {
    |a, b| a.cmp(b)
}

/// Descending natural order of `T`.
pub fn reverse_order<T: Ord>() -> OrderFn<T> {
    |a, b| b.cmp(a)
}

/// Sort every element with rayon's stable parallel sort.
pub(crate) fn sort_all<T, C>(mut elements: Vec<T>, order: &C) -> Vec<T>
where
    T: Send,
    C: Fn(&T, &T) -> Ordering + Sync,
{
    elements.par_sort_by(|a, b| order(a, b));
    elements
}

/// Picks between a full sort and bounded selection for each request.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopKSorter {
    config: SelectionConfig,
}

impl TopKSorter {
    pub fn new(config: SelectionConfig) -> Self {
        TopKSorter { config }
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Up to `limit` elements of `source` ranking first under `order`, sorted by `order`.
    /// `None` elements are skipped.
    pub fn select_by<T, E, C>(&self, source: &[E], limit: i64, order: C) -> Result<Vec<T>, TopKError>
    where
        T: Send,
        E: Clone + Into<Option<T>>,
        C: Fn(&T, &T) -> Ordering + Sync,
    {
        let limit = checked_limit(limit)?;
        if limit == 0 || source.is_empty() {
            return Ok(vec![]);
        }

        // Sorting everything beats many bounded insertions once nearly every element is kept.
        if limit >= source.len() && source.len() > self.config.full_sort_threshold {
            debug!("[select_by] limit {} covers all {} elements, sorting fully", limit, source.len());
            let present: Vec<T> = source.iter().cloned().filter_map(|element| element.into()).collect();
            return Ok(sort_all(present, &order));
        }

        let mut selector = BoundedSelector::with_capacity(limit.min(source.len()), order);
        selector.extend(source.iter().cloned());
        Ok(selector.drain())
    }

    pub fn select<T, E>(&self, source: &[E], limit: i64) -> Result<Vec<T>, TopKError>
    where
        T: Ord + Send,
        E: Clone + Into<Option<T>>,
    {
        self.select_by(source, limit, natural_order())
    }

    pub fn select_descending<T, E>(&self, source: &[E], limit: i64) -> Result<Vec<T>, TopKError>
    where
        T: Ord + Send,
        E: Clone + Into<Option<T>>,
    {
        self.select_by(source, limit, reverse_order())
    }
}

/// Select the first `k` elements of `source` under `order`, using the default config.
///
/// ```
/// let scores = [3.5, 9.0, -1.0, 7.25];
/// let best = bounded_topk::select_top_k_by(&scores, 2, |a: &f64, b: &f64| b.total_cmp(a)).unwrap();
/// assert_eq!(best, vec![9.0, 7.25]);
/// ```
pub fn select_top_k_by<T, E, C>(source: &[E], k: i64, order: C) -> Result<Vec<T>, TopKError>
where
    T: Send,
    E: Clone + Into<Option<T>>,
    C: Fn(&T, &T) -> Ordering + Sync,
{
    TopKSorter::default().select_by(source, k, order)
}

/// The `k` smallest elements in ascending order.
pub fn select_top_k<T, E>(source: &[E], k: i64) -> Result<Vec<T>, TopKError>
where
    T: Ord + Send,
    E: Clone + Into<Option<T>>,
{
    TopKSorter::default().select(source, k)
}

/// The `k` largest elements in descending order.
pub fn select_top_k_descending<T, E>(source: &[E], k: i64) -> Result<Vec<T>, TopKError>
where
    T: Ord + Send,
    E: Clone + Into<Option<T>>,
{
    TopKSorter::default().select_descending(source, k)
}
