//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once and attached to any method.
//!
//! # Event traits
//!
//! - [`HasIteration`]: events that carry a 1-based iteration number
//! - [`HasResidual`]: events that carry a residual value
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use rootline_core::Observer;
//! use rootline_observers::traits::{CanStopEarly, HasIteration, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//! }
//!
//! impl<E: HasIteration + HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.iteration() >= self.min_iters && event.residual().abs() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use rootline_solvers::equation::{Action, Event};

/// An event that carries its iteration number.
pub trait HasIteration {
    /// Returns the 1-based iteration number for this event.
    fn iteration(&self) -> usize;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasIteration for Event<'_> {
    fn iteration(&self) -> usize {
        self.index()
    }
}

impl HasResidual for Event<'_> {
    fn residual(&self) -> f64 {
        self.record.residual
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
