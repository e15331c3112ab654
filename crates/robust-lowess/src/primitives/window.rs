//! Nearest-neighbor window tracking over sorted x-values.
//!
//! Each local fit uses the `span` points closest in x to the query. Queries
//! are visited in ascending order, so the best window only ever slides to the
//! right and a two-pointer walk covers a whole pass in O(n).

// External dependencies
use num_traits::Float;

/// Half-open window bounds `[lo, hi)` into the sorted samples.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window {
    /// First index inside the window.
    pub lo: usize,

    /// One past the last index inside the window.
    pub hi: usize,
}

impl Window {
    /// Leftmost window of `span` points, the nearest set for query index 0.
    #[inline]
    pub fn initialize(span: usize, n: usize) -> Self {
        debug_assert!(span >= 1, "Window::initialize: span must be at least 1");

        Self {
            lo: 0,
            hi: span.min(n),
        }
    }

    /// Slide right until the window holds the nearest neighbors of `x[query]`.
    ///
    /// The point just past `hi` replaces `lo` only when it is strictly closer.
    /// Equidistant candidates therefore keep the lower index.
    #[inline]
    pub fn advance<T: Float>(&mut self, x: &[T], query: usize) {
        let n = x.len();
        debug_assert!(query < n, "Window::advance: query index out of bounds");

        let x_query = x[query];
        while self.hi < n {
            let d_left = x_query - x[self.lo];
            let d_right = x[self.hi] - x_query;

            if d_left <= d_right {
                break;
            }

            self.lo += 1;
            self.hi += 1;
        }
    }

    /// Distance from `x_query` to the farthest point inside the window.
    #[inline]
    pub fn bandwidth<T: Float>(&self, x: &[T], x_query: T) -> T {
        T::max(
            (x_query - x[self.lo]).abs(),
            (x[self.hi - 1] - x_query).abs(),
        )
    }

    /// Window size `r = round(frac * n)`, clamped to `[2, n]`.
    #[inline]
    pub fn calculate_span<T: Float>(n: usize, frac: T) -> usize {
        let frac_n = (frac * T::from(n).unwrap_or_else(T::zero)).round();
        let span = frac_n.to_usize().unwrap_or(0);
        usize::max(2, span).min(n)
    }

    /// Number of points in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.hi - self.lo
    }

    /// Check if the window is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hi <= self.lo
    }
}
