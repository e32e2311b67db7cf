use std::cmp::Ordering;

use typed_builder::TypedBuilder;

use super::select::TopKSorter;
use crate::common::config::SelectionConfig;
use crate::common::errors::TopKError;

/// A selection assembled at runtime, where the source or the order may not have been provided.
///
/// Missing pieces are reported as [`TopKError::NullReference`] before any element is looked at.
///
/// ```
/// use bounded_topk::SelectRequest;
///
/// let values = vec![Some(4), None, Some(1), Some(3)];
/// let request = SelectRequest::builder()
///     .source(&values[..])
///     .limit(2)
///     .order(|a: &i32, b: &i32| a.cmp(b))
///     .build();
/// let result: Vec<i32> = request.run().unwrap();
/// assert_eq!(result, vec![1, 3]);
/// ```
#[derive(TypedBuilder)]
pub struct SelectRequest<'a, E: 'a, C> {
    #[builder(default, setter(strip_option))]
    source: Option<&'a [E]>,

    limit: i64,

    #[builder(default, setter(strip_option))]
    order: Option<C>,

    #[builder(default)]
    config: SelectionConfig,
}

impl<'a, E, C> SelectRequest<'a, E, C> {
    pub fn run<T>(self) -> Result<Vec<T>, TopKError>
    where
        T: Send,
        E: Clone + Into<Option<T>>,
        C: Fn(&T, &T) -> Ordering + Sync,
    {
        let source = self.source.ok_or_else(|| TopKError::missing("source collection"))?;
        let order = self.order.ok_or_else(|| TopKError::missing("order"))?;
        TopKSorter::new(self.config).select_by(source, self.limit, order)
    }
}
