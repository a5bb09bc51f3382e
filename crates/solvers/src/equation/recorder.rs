use rootline_core::{Function, Observer};

use super::{
    Action, Config, Error, Event, IterationRecord, IterationTrace, Method, Termination,
};

/// Builds a trace for one run: numbers records, notifies the observer, and
/// attaches the records gathered so far to evaluation errors.
pub(crate) struct Recorder<Obs> {
    method: Method,
    records: Vec<IterationRecord>,
    observer: Obs,
}

impl<Obs> Recorder<Obs>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    pub(crate) fn new(method: Method, config: &Config, observer: Obs) -> Self {
        Self {
            method,
            // Cap the reservation; most runs stop long before a large limit.
            records: Vec::with_capacity(config.max_iters().min(64)),
            observer,
        }
    }

    /// Appends a record and returns the observer's action.
    pub(crate) fn record(
        &mut self,
        lower: f64,
        upper: Option<f64>,
        candidate: f64,
        residual: f64,
    ) -> Option<Action> {
        let record = IterationRecord {
            index: self.records.len() + 1,
            lower,
            upper,
            candidate,
            residual,
        };
        self.records.push(record);

        let event = Event {
            method: self.method,
            record: &record,
        };
        self.observer.observe(&event)
    }

    /// Evaluates `f` at `x`, requiring a finite result.
    pub(crate) fn function<F: Function>(&mut self, f: &F, x: f64) -> Result<f64, Error> {
        let value = f.call(x).map_err(|source| Error::Function {
            x,
            source: Box::new(source),
            records: self.take_records(),
        })?;
        self.finite(x, value)
    }

    /// Evaluates the derivative `df` at `x`, requiring a finite result.
    pub(crate) fn derivative<D: Function>(&mut self, df: &D, x: f64) -> Result<f64, Error> {
        let value = df.call(x).map_err(|source| Error::Derivative {
            x,
            source: Box::new(source),
            records: self.take_records(),
        })?;
        self.finite(x, value)
    }

    /// Builds a flat-secant error carrying the records so far.
    pub(crate) fn flat_secant(&mut self, lower: f64, upper: f64, value: f64) -> Error {
        Error::FlatSecant {
            lower,
            upper,
            value,
            records: self.take_records(),
        }
    }

    /// Builds a divergence error carrying the records so far.
    pub(crate) fn diverged(&mut self, x: f64) -> Error {
        Error::Diverged {
            x,
            records: self.take_records(),
        }
    }

    pub(crate) fn finish(self, termination: Termination) -> IterationTrace {
        IterationTrace::new(self.method, self.records, termination)
    }

    fn finite(&mut self, x: f64, value: f64) -> Result<f64, Error> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Error::NonFiniteResidual {
                x,
                residual: value,
                records: self.take_records(),
            })
        }
    }

    fn take_records(&mut self) -> Vec<IterationRecord> {
        std::mem::take(&mut self.records)
    }
}
