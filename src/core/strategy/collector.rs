use std::cmp::Ordering;
use std::marker::PhantomData;

use log::trace;

use super::select::{natural_order, reverse_order, OrderFn};
use crate::common::config::SelectionConfig;
use crate::common::errors::TopKError;
use crate::common::utils::checked_limit;
use crate::core::selector::BoundedSelector;

/// A mutable reduction split into four steps, so that a source can be cut into partitions,
/// each partition accumulated into its own state, and the states combined pairwise.
///
/// - `supplier` creates an empty state; accumulating nothing into it changes nothing.
/// - `combiner` may be applied in any grouping.
/// - `finisher` consumes the state, so it runs at most once per state.
///
/// Elements are offered as `Into<Option<Self::Element>>`, `None` is skipped.
pub trait Reduction {
    type Element;
    type State;
    type Output;

    fn supplier(&self) -> Self::State;

    fn accumulator<E>(&self, state: &mut Self::State, element: E)
    where
        E: Into<Option<Self::Element>>;

    /// Absorb `right` into `left` and return the survivor.
    fn combiner(&self, left: Self::State, right: Self::State) -> Self::State;

    fn finisher(&self, state: Self::State) -> Self::Output;

    /// Run the reduction over a single sequential source.
    fn collect<I>(&self, source: I) -> Self::Output
    where
        I: IntoIterator,
        I::Item: Into<Option<Self::Element>>,
    {
        let mut state = self.supplier();
        for element in source {
            self.accumulator(&mut state, element);
        }
        self.finisher(state)
    }

    /// Accumulate every partition into its own state, then fold the states left to right.
    fn collect_partitioned<P>(&self, partitions: P) -> Self::Output
    where
        P: IntoIterator,
        P::Item: IntoIterator,
        <P::Item as IntoIterator>::Item: Into<Option<Self::Element>>,
    {
        let state = partitions
            .into_iter()
            .map(|partition| {
                let mut state = self.supplier();
                for element in partition {
                    self.accumulator(&mut state, element);
                }
                state
            })
            .reduce(|left, right| self.combiner(left, right))
            .unwrap_or_else(|| self.supplier());
        self.finisher(state)
    }
}

/// Collects the first `limit` elements of a stream under `order` into a sorted `Vec`.
///
/// The size of a stream is unknown up front, so `limit` is capped by
/// [`SelectionConfig::collector_limit_ceiling`].
pub struct TopKCollector<T, C> {
    limit: usize,
    order: C,
    _marker: PhantomData<fn() -> T>,
}

impl<T, C> TopKCollector<T, C>
where
    C: Fn(&T, &T) -> Ordering + Clone,
{
    pub fn new(limit: i64, order: C) -> Result<Self, TopKError> {
        Self::with_config(limit, order, &SelectionConfig::default())
    }

    pub fn with_config(limit: i64, order: C, config: &SelectionConfig) -> Result<Self, TopKError> {
        let checked = checked_limit(limit)?;
        if checked > config.collector_limit_ceiling {
            return Err(TopKError::InvalidArgument(format!(
                "Requested limit of {} is too large for reliable operation.",
                limit
            )));
        }
        Ok(Self::with_limit(checked, order))
    }

    /// Skip the ceiling, for callers that already bounded `limit` by the source size.
    pub(crate) fn with_limit(limit: usize, order: C) -> Self {
        TopKCollector { limit, order, _marker: PhantomData }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl<T: Ord> TopKCollector<T, OrderFn<T>> {
    /// Collects the `limit` smallest elements, ascending.
    pub fn natural(limit: i64) -> Result<Self, TopKError> {
        Self::new(limit, natural_order())
    }

    /// Collects the `limit` largest elements, descending.
    pub fn reverse(limit: i64) -> Result<Self, TopKError> {
        Self::new(limit, reverse_order())
    }
}

impl<T, C> Reduction for TopKCollector<T, C>
where
    C: Fn(&T, &T) -> Ordering + Clone,
{
    type Element = T;
    type State = BoundedSelector<T, C>;
    type Output = Vec<T>;

    fn supplier(&self) -> Self::State {
        BoundedSelector::with_capacity(self.limit, self.order.clone())
    }

    fn accumulator<E>(&self, state: &mut Self::State, element: E)
    where
        E: Into<Option<T>>,
    {
        state.offer(element);
    }

    fn combiner(&self, mut left: Self::State, right: Self::State) -> Self::State {
        // Both sides are owned here, so absorbing the smaller one is free.
        if right.len() > left.len() {
            let mut right = right;
            right.merge(left);
            return right;
        }
        left.merge(right);
        left
    }

    fn finisher(&self, state: Self::State) -> Self::Output {
        trace!("[finisher] collected {} of {} elements", state.len(), self.limit);
        state.drain()
    }
}
