//! Paging window over an already-ordered result.

use crate::errors::{GridError, GridResult};

/// Validated skip/take window.
///
/// Must be applied strictly after ordering; a window over an unordered
/// result has no stable page boundaries and that is the caller's fault,
/// not this type's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    start: usize,
    take: Option<usize>,
}

impl PageWindow {
    /// Validates raw offset and length into a window.
    ///
    /// A length of -1 means everything past the offset; any other negative
    /// length is malformed. A negative offset is a request fault, never
    /// clamped to zero.
    pub fn new(start: i64, length: i64) -> GridResult<Self> {
        if start < 0 {
            return Err(GridError::NegativePagingOffset(start));
        }
        let take = match length {
            -1 => None,
            n if n < 0 => return Err(GridError::InvalidDisplayLength(length)),
            n => Some(n as usize),
        };
        Ok(Self {
            start: start as usize,
            take,
        })
    }

    /// Records skipped before the page begins
    pub fn start(&self) -> usize {
        self.start
    }

    /// Maximum records in the page, or `None` for unbounded
    pub fn take(&self) -> Option<usize> {
        self.take
    }

    /// Slices an ordered in-memory sequence down to this window
    pub fn apply<T>(&self, rows: Vec<T>) -> Vec<T> {
        let skipped = rows.into_iter().skip(self.start);
        match self.take {
            Some(n) => skipped.take(n).collect(),
            None => skipped.collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_slices_page() {
        let window = PageWindow::new(2, 3).unwrap();
        assert_eq!(window.apply(vec![0, 1, 2, 3, 4, 5, 6]), vec![2, 3, 4]);
    }

    #[test]
    fn test_short_tail_returns_fewer() {
        let window = PageWindow::new(5, 10).unwrap();
        assert_eq!(window.apply(vec![0, 1, 2, 3, 4, 5, 6]), vec![5, 6]);
    }

    #[test]
    fn test_unbounded_length() {
        let window = PageWindow::new(3, -1).unwrap();
        assert_eq!(window.take(), None);
        assert_eq!(window.apply(vec![0, 1, 2, 3, 4]), vec![3, 4]);
    }

    #[test]
    fn test_offset_past_end_is_empty() {
        let window = PageWindow::new(10, 5).unwrap();
        assert_eq!(window.apply(vec![0, 1]), Vec::<i32>::new());
    }

    #[test]
    fn test_negative_offset_faults() {
        assert_eq!(
            PageWindow::new(-1, 10).unwrap_err(),
            GridError::NegativePagingOffset(-1)
        );
    }

    #[test]
    fn test_malformed_length_faults() {
        assert_eq!(
            PageWindow::new(0, -2).unwrap_err(),
            GridError::InvalidDisplayLength(-2)
        );
    }

    #[test]
    fn test_zero_length_page_is_empty() {
        let window = PageWindow::new(0, 0).unwrap();
        assert_eq!(window.apply(vec![1, 2, 3]), Vec::<i32>::new());
    }
}
