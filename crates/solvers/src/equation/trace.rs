use std::fmt;

use super::Method;

/// One step of a root-finding run.
///
/// For bracketing methods `lower` and `upper` are the bracket the candidate
/// was computed from. For Newton-Raphson `lower` is the iterate the step
/// started from and `upper` is always `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationRecord {
    /// 1-based step number.
    pub index: usize,
    pub lower: f64,
    pub upper: Option<f64>,
    /// Point produced by this step.
    pub candidate: f64,
    /// Function value at `candidate`.
    pub residual: f64,
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Termination {
    /// A convergence test passed; the last candidate is the root.
    Converged,

    /// The iteration limit was reached without converging.
    Exhausted,

    /// Newton-Raphson met a derivative of exactly zero.
    DegenerateDerivative,

    /// An observer returned [`Action::StopEarly`](super::Action::StopEarly).
    StoppedByObserver,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Termination::Converged => "converged",
            Termination::Exhausted => "iteration limit reached",
            Termination::DegenerateDerivative => "derivative became zero",
            Termination::StoppedByObserver => "stopped by observer",
        })
    }
}

/// The complete, ordered record of one solver run.
///
/// A trace owns its records and holds no reference to the solver or the
/// function. The root is present exactly when the run converged.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationTrace {
    method: Method,
    records: Vec<IterationRecord>,
    termination: Termination,
}

impl IterationTrace {
    pub(crate) fn new(
        method: Method,
        records: Vec<IterationRecord>,
        termination: Termination,
    ) -> Self {
        debug_assert!(
            termination != Termination::Converged || !records.is_empty(),
            "a converged trace has at least one record"
        );
        Self {
            method,
            records,
            termination,
        }
    }

    /// Returns the method that produced this trace.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the records in step order.
    #[must_use]
    pub fn records(&self) -> &[IterationRecord] {
        &self.records
    }

    /// Consumes the trace and returns its records.
    #[must_use]
    pub fn into_records(self) -> Vec<IterationRecord> {
        self.records
    }

    #[must_use]
    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// Returns the root if the run converged.
    #[must_use]
    pub fn root(&self) -> Option<f64> {
        match self.termination {
            Termination::Converged => self.records.last().map(|record| record.candidate),
            _ => None,
        }
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns `[index, |residual|]` points for a convergence plot.
    #[must_use]
    pub fn convergence(&self) -> Vec<[f64; 2]> {
        self.records
            .iter()
            .map(|record| [record.index as f64, record.residual.abs()])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(index: usize, candidate: f64, residual: f64) -> IterationRecord {
        IterationRecord {
            index,
            lower: 0.0,
            upper: Some(1.0),
            candidate,
            residual,
        }
    }

    #[test]
    fn root_is_last_candidate_when_converged() {
        let trace = IterationTrace::new(
            Method::Bisection,
            vec![record(1, 0.5, 0.1), record(2, 0.25, -1e-9)],
            Termination::Converged,
        );
        assert_eq!(trace.root(), Some(0.25));
        assert_eq!(trace.len(), 2);
    }

    #[test]
    fn no_root_unless_converged() {
        for termination in [
            Termination::Exhausted,
            Termination::DegenerateDerivative,
            Termination::StoppedByObserver,
        ] {
            let trace = IterationTrace::new(
                Method::Bisection,
                vec![record(1, 0.5, 0.1)],
                termination,
            );
            assert_eq!(trace.root(), None);
        }
    }

    #[test]
    fn convergence_uses_absolute_residuals() {
        let trace = IterationTrace::new(
            Method::FalsePosition,
            vec![record(1, 0.5, -0.5), record(2, 0.6, 0.25)],
            Termination::Exhausted,
        );
        assert_eq!(trace.convergence(), [[1.0, 0.5], [2.0, 0.25]]);
    }
}
