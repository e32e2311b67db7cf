use crate::common::errors::TopKError;

/// Validate a caller supplied limit.
/// Negative limits are rejected, limits beyond the address space saturate.
pub fn checked_limit(limit: i64) -> Result<usize, TopKError> {
    if limit < 0 {
        return Err(TopKError::invalid_limit(limit));
    }
    Ok(usize::try_from(limit).unwrap_or(usize::MAX))
}
