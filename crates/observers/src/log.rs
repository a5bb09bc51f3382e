//! Per-iteration logging through `tracing`.

use rootline_core::Observer;
use rootline_solvers::equation::Event;

/// An observer that emits one `tracing` debug event per iteration.
///
/// The solvers themselves never log; attach this observer to see each step
/// under `RUST_LOG=debug`. It never requests an action.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver {
    count: usize,
}

impl LogObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many iterations have been logged.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<A> Observer<Event<'_>, A> for LogObserver {
    fn observe(&mut self, event: &Event<'_>) -> Option<A> {
        self.count += 1;
        let record = event.record;

        tracing::debug!(
            method = %event.method,
            iteration = record.index,
            lower = record.lower,
            upper = ?record.upper,
            candidate = record.candidate,
            residual = record.residual,
            "iteration",
        );

        None
    }
}

/// Allows `&mut LogObserver` to be passed to solvers that take an observer by
/// value, so the count can be read after the run.
impl<A> Observer<Event<'_>, A> for &mut LogObserver {
    fn observe(&mut self, event: &Event<'_>) -> Option<A> {
        (**self).observe(event)
    }
}
