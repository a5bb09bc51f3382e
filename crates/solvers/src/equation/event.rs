use super::{IterationRecord, Method};

/// Control actions supported by the root-finding solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the records gathered so far.
    StopEarly,
}

/// Iteration event emitted after each record is appended.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The method being run.
    pub method: Method,
    /// The record just appended to the trace.
    pub record: &'a IterationRecord,
}

impl Event<'_> {
    /// Returns the 1-based iteration number.
    #[must_use]
    pub fn index(&self) -> usize {
        self.record.index
    }

    /// Returns the candidate produced by this iteration.
    #[must_use]
    pub fn candidate(&self) -> f64 {
        self.record.candidate
    }

    /// Returns the residual at the candidate.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.record.residual
    }
}
