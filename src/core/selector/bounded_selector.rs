use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use super::SelectorMetrics;
use crate::common::constants::PREALLOCATE_LIMIT;
use crate::common::errors::TopKError;
use crate::common::utils::checked_limit;

/// Keeps the first `capacity` elements under `order` out of everything offered to it.
///
/// The retained elements live in a contiguous buffer that is sorted ascending by `order`
/// at every observable point. Until the buffer fills up, each element is inserted at its
/// sorted position. Once it is full, the last element is the boundary: a candidate has to
/// rank strictly before it to be admitted, everything else is discarded after a single
/// comparison.
///
/// ```
/// use bounded_topk::BoundedSelector;
///
/// let mut selector = BoundedSelector::new(3, |a: &u32, b: &u32| a.cmp(b)).unwrap();
/// for value in [9_u32, 4, 7, 1, 8, 2] {
///     selector.offer(value);
/// }
/// selector.offer(None::<u32>);
/// assert_eq!(selector.drain(), vec![1, 2, 4]);
/// ```
pub struct BoundedSelector<T, C> {
    capacity: usize,
    order: C,
    // Invariant: sorted ascending by `order`, `buffer.len() <= capacity`.
    buffer: Vec<T>,
    metrics: SelectorMetrics,
}

impl<T, C> BoundedSelector<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Create a selector retaining at most `capacity` elements.
    ///
    /// A negative capacity is rejected with [`TopKError::InvalidArgument`].
    pub fn new(capacity: i64, order: C) -> Result<Self, TopKError> {
        Ok(Self::with_capacity(checked_limit(capacity)?, order))
    }

    pub fn with_capacity(capacity: usize, order: C) -> Self {
        BoundedSelector {
            capacity,
            order,
            buffer: Vec::with_capacity(capacity.min(PREALLOCATE_LIMIT)),
            metrics: SelectorMetrics::default(),
        }
    }

    /// Offer one element, `None` is ignored.
    pub fn offer<E: Into<Option<T>>>(&mut self, element: E) {
        self.metrics.increase_offered();
        let element = match element.into() {
            Some(element) => element,
            None => {
                self.metrics.increase_absent();
                return;
            }
        };

        if self.capacity == 0 {
            self.metrics.increase_early_discarded();
        } else if self.buffer.len() < self.capacity {
            self.insert_while_filling(element);
        } else {
            self.insert_past_boundary(element);
        }
    }

    /// Insert at the sorted position, after any elements comparing equal.
    fn insert_while_filling(&mut self, element: T) {
        let order = &self.order;
        let position = self.buffer.partition_point(|probe| order(probe, &element) != Ordering::Greater);
        let len = self.buffer.len();
        if len == self.buffer.capacity() {
            // Grow geometrically but never past `capacity` slots.
            self.buffer.reserve_exact(len.clamp(1, self.capacity - len));
        }
        self.buffer.insert(position, element);
        self.metrics.increase_admitted();

        if self.buffer.len() == self.capacity {
            trace!("[insert_while_filling] selector filled up, capacity: {}, boundary established", self.capacity);
        }
    }

    fn insert_past_boundary(&mut self, element: T) {
        let order = &self.order;
        let boundary = match self.buffer.last() {
            Some(boundary) => boundary,
            None => return,
        };
        if order(&element, boundary) != Ordering::Less {
            self.metrics.increase_early_discarded();
            return;
        }

        let position = match self.buffer.binary_search_by(|probe| order(probe, &element)) {
            Ok(position) | Err(position) => position,
        };
        // The order said `element` precedes the boundary and also follows every retained element.
        if position >= self.capacity {
            debug!(
                "[insert_past_boundary] inconsistent order, candidate ranks before the boundary but after all {} retained elements; discarding it",
                self.capacity
            );
            self.metrics.increase_guard_discarded();
            return;
        }

        // Shift `buffer[position..]` right by one, the old boundary lands at `position` and gets overwritten.
        self.buffer[position..].rotate_right(1);
        self.buffer[position] = element;
        self.metrics.increase_admitted();
    }

    /// Offer every element retained by `other`, in its ascending order.
    pub fn merge(&mut self, other: BoundedSelector<T, C>) {
        trace!("[merge] absorbing {} elements into a selector holding {}", other.buffer.len(), self.buffer.len());
        for element in other.buffer {
            self.offer(element);
        }
    }

    /// Consume the selector and return the retained elements in ascending order.
    pub fn drain(self) -> Vec<T> {
        trace!(
            "[drain] returning {} of {} requested elements, {:?}",
            self.buffer.len(),
            self.capacity,
            self.metrics
        );
        self.buffer
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.buffer.len() == self.capacity
    }

    /// The element a candidate must beat, only defined once the selector is full.
    pub fn boundary(&self) -> Option<&T> {
        if self.is_full() {
            self.buffer.last()
        } else {
            None
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.buffer
    }

    pub fn metrics(&self) -> &SelectorMetrics {
        &self.metrics
    }
}

impl<T, C, E> Extend<E> for BoundedSelector<T, C>
where
    C: Fn(&T, &T) -> Ordering,
    E: Into<Option<T>>,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for element in iter {
            self.offer(element);
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BoundedSelector<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedSelector")
            .field("capacity", &self.capacity)
            .field("buffer", &self.buffer)
            .field("metrics", &self.metrics)
            .finish()
    }
}
