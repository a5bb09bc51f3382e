//! Root-finding solvers for the rootline workspace.
//!
//! See the [`equation`] module for the available methods and the [`run`]
//! entry point that dispatches on a [`Method`].
//!
//! # Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`Method`],
//!   [`IterationRecord`], and [`Termination`].
//!
//! [`run`]: equation::run
//! [`Method`]: equation::Method
//! [`IterationRecord`]: equation::IterationRecord
//! [`Termination`]: equation::Termination

pub mod equation;
