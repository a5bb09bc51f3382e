//! The boundary between raw user input and the root-finding engine.
//!
//! A front-end collects the six fields of the input form as strings in a
//! [`RawInput`] and calls [`validate`]. Validation either yields a
//! [`Prepared`] run, with the method selected, the expression compiled, and
//! every precondition checked, or a [`ValidationError`] naming the
//! offending [`Field`]. Invalid input never reaches a solver.
//!
//! # Example
//!
//! ```
//! use rootline_input::{RawInput, validate};
//!
//! let raw = RawInput {
//!     method: "bisection".into(),
//!     expression: "x^2 - 4".into(),
//!     lower: "0".into(),
//!     upper: "5".into(),
//!     tolerance: "1e-6".into(),
//!     max_iterations: "50".into(),
//! };
//!
//! let trace = validate(&raw)?.run()?;
//! let root = trace.root().ok_or("no root")?;
//! assert!((root - 2.0).abs() < 1e-6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod prepared;
mod raw;

pub use error::{ValidationError, ValidationKind};
pub use prepared::{Prepared, validate};
pub use raw::{Field, RawInput};
