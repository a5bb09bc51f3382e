//! Core traits for the rootline workspace.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! expression compilers build on:
//!
//! - [`Function`]: a fallible scalar function `f64 -> f64`
//! - [`from_fn`], [`try_from_fn`]: adapters turning closures into functions
//! - [`Observer`]: receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::{FromFn, Function, TryFromFn, from_fn, try_from_fn};
pub use observer::Observer;
