//! Reusable observers for the rootline solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the root-finding methods.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasResidual`], [`CanStopEarly`])
//! - [`log`]: [`LogObserver`], one `tracing` event per iteration
//! - [`stall`]: [`Stall`], stops a run whose residual stops shrinking
//!
//! # Features
//!
//! - `plot`: Enables [`PlotObserver`] and [`show_convergence`] for
//!   visualizing solver behavior via egui. This feature adds dependencies on
//!   `eframe` and `egui_plot`.
//!
//! [`Observer`]: rootline_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`LogObserver`]: log::LogObserver
//! [`Stall`]: stall::Stall

pub mod log;
pub mod stall;
pub mod traits;

#[cfg(feature = "plot")]
mod plot;

pub use log::LogObserver;
pub use stall::Stall;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig, show_convergence};
