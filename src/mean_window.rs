use crate::Price;
use std::collections::VecDeque;

/// NaN-aware sliding simple-mean window.
///
/// Structural readiness and value quality are tracked separately:
/// [`push`](MeanWindow::push) returns `None` until `size` values have
/// been seen, and `Some(f64::NAN)` while the window contains at least
/// one NaN. NaN entries are counted rather than summed, so the running
/// sum is never poisoned and recovers as soon as the last NaN is
/// evicted.
#[derive(Clone, Debug)]
pub(crate) struct MeanWindow {
    size: usize,
    window: VecDeque<Price>,
    /// Running sum of the finite values in the window. Maintained
    /// incrementally via add/subtract, may accumulate FP rounding drift
    /// over very long runs, but negligible for typical window sizes on
    /// financial data.
    sum: Price,
    nan_count: usize,
    size_reciprocal: f64,
}

impl MeanWindow {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            window: VecDeque::with_capacity(size),
            sum: 0.0,
            nan_count: 0,
            #[allow(clippy::cast_precision_loss)]
            size_reciprocal: 1.0 / size as f64,
        }
    }

    /// Pushes a value, evicting the oldest when full, and returns the
    /// window mean.
    #[inline]
    pub fn push(&mut self, value: Price) -> Option<Price> {
        if self.window.len() == self.size {
            let old = self
                .window
                .pop_front()
                .expect("MeanWindow invariant violation: window should be full");

            if old.is_nan() {
                self.nan_count -= 1;
            } else {
                self.sum -= old;
            }
        }

        if value.is_nan() {
            self.nan_count += 1;
        } else {
            self.sum += value;
        }
        self.window.push_back(value);

        if self.window.len() < self.size {
            None
        } else if self.nan_count > 0 {
            Some(f64::NAN)
        } else {
            Some(self.sum * self.size_reciprocal)
        }
    }
}
