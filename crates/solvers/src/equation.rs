//! Solvers for scalar equations `f(x) = 0`.
//!
//! Every solver produces an [`IterationTrace`]: one [`IterationRecord`] per
//! step, a [`Termination`] reason, and the root when the run converged.
//!
//! # Solvers
//!
//! - [`bisection`]: halves a sign-changing bracket; stops on a small
//!   residual or a narrow bracket
//! - [`false_position`]: shrinks a sign-changing bracket at the secant
//!   through its endpoints; stops on a small residual only
//! - [`newton_raphson`]: follows the tangent from an initial guess; needs the
//!   derivative
//!
//! [`run`] selects one of them from a validated [`MethodParameters`].
//!
//! # Observers
//!
//! Each solver emits an [`Event`] after appending a record. Observers may
//! return [`Action::StopEarly`], which ends the run with
//! [`Termination::StoppedByObserver`] unless that step already converged.

mod bracket;
mod config;
mod error;
mod event;
mod method;
mod recorder;
mod run;
mod trace;

pub mod bisection;
pub mod false_position;
pub mod newton_raphson;

pub use bracket::{BracketError, Endpoints, check_bracket};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Action, Event};
pub use method::{Method, MethodParameters, ParamsError, UnknownMethod};
pub use newton_raphson::check_derivative;
pub use run::{run, run_observed};
pub use trace::{IterationRecord, IterationTrace, Termination};
