//! Early stopping for runs that stop making progress.

use rootline_core::Observer;

use crate::traits::{CanStopEarly, HasResidual};

/// An observer that stops a run once `|residual|` has failed to improve for
/// `patience` consecutive iterations.
///
/// Useful for Newton-Raphson from a poor starting point, where the iterates
/// can wander without ever meeting the tolerance.
#[derive(Debug, Clone, Copy)]
pub struct Stall {
    patience: usize,
    best: f64,
    misses: usize,
}

impl Stall {
    /// Creates a stall detector that tolerates `patience` non-improving
    /// iterations in a row.
    ///
    /// A `patience` of zero is treated as one.
    #[must_use]
    pub fn new(patience: usize) -> Self {
        Self {
            patience: patience.max(1),
            best: f64::INFINITY,
            misses: 0,
        }
    }

    #[must_use]
    pub fn patience(&self) -> usize {
        self.patience
    }
}

impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for Stall {
    fn observe(&mut self, event: &E) -> Option<A> {
        let residual = event.residual().abs();

        if residual < self.best {
            self.best = residual;
            self.misses = 0;
            return None;
        }

        self.misses += 1;
        if self.misses >= self.patience {
            tracing::warn!(
                best = self.best,
                misses = self.misses,
                "residual stalled, stopping early"
            );
            Some(A::stop_early())
        } else {
            None
        }
    }
}
