use thiserror::Error;

/// An index or window that falls outside a view.
///
/// Returned by the `try_*` operations on [`ArrayRef`](crate::ArrayRef). The
/// panicking operations use the same message, so a failed `slice` and a failed
/// `try_slice` describe the problem identically.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsError {
    #[error("index {index} out of bounds for view of length {len}")]
    Index { index: usize, len: usize },

    #[error("window of {len} elements at {start} out of bounds for view of length {size}")]
    Range { start: usize, len: usize, size: usize },

    /// `drop_*` or `take_*` asked for more elements than the view has.
    #[error("count {count} out of bounds for view of length {len}")]
    Count { count: usize, len: usize },

    /// A range index whose start lies past its end.
    #[error("range {start}..{end} is reversed")]
    Reversed { start: usize, end: usize },
}

impl BoundsError {
    /// Checks that `start..start + len` fits in a view of `size` elements.
    pub(crate) fn check_range(start: usize, len: usize, size: usize) -> Result<(), Self> {
        match start.checked_add(len) {
            Some(end) if end <= size => Ok(()),
            _ => Err(BoundsError::Range { start, len, size }),
        }
    }

    /// Checks that `count` elements can be taken from or dropped off a view of `len`.
    pub(crate) fn check_count(count: usize, len: usize) -> Result<(), Self> {
        if count <= len {
            Ok(())
        } else {
            Err(BoundsError::Count { count, len })
        }
    }
}
