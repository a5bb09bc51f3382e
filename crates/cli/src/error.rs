use rootline_input::ValidationError;
use rootline_solvers::equation;
use thiserror::Error;

/// Errors that end a `rootline` invocation.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("solver stopped: {0}")]
    Solver(#[from] equation::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "plot")]
    #[error("failed to open plot window: {0}")]
    Plot(String),

    #[cfg(not(feature = "plot"))]
    #[error("plotting is unavailable; rebuild with the `plot` feature")]
    PlotUnavailable,
}

pub type Result<T> = std::result::Result<T, CliError>;
