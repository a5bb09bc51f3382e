use clap::{Parser, ValueEnum};
use rootline_input::RawInput;

/// Find a root of f(x) = 0 by bisection, false position or Newton-Raphson.
#[derive(Debug, Parser)]
#[command(name = "rootline", author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Args {
    /// Method: bisection, false-position or newton-raphson
    #[arg(short, long, env = "ROOTLINE_METHOD", default_value = "bisection")]
    pub method: String,

    /// Function of x, e.g. "x^2 - 4"
    #[arg(short = 'f', long = "function", env = "ROOTLINE_FUNCTION")]
    pub expression: Option<String>,

    /// Lower bound a, or the initial guess x0 for Newton-Raphson
    #[arg(short = 'a', long, env = "ROOTLINE_LOWER")]
    pub lower: Option<String>,

    /// Upper bound b (bisection and false position only)
    #[arg(short = 'b', long, env = "ROOTLINE_UPPER")]
    pub upper: Option<String>,

    /// Convergence tolerance
    #[arg(short, long, env = "ROOTLINE_TOLERANCE", default_value = "1e-6")]
    pub tolerance: String,

    /// Maximum number of iterations
    #[arg(
        short = 'n',
        long = "max-iter",
        env = "ROOTLINE_MAX_ITER",
        default_value = "100"
    )]
    pub max_iterations: String,

    /// Output format
    #[arg(long, value_enum, env = "ROOTLINE_FORMAT", default_value_t = Format::Table)]
    pub format: Format,

    /// Open a convergence plot window after solving (needs the `plot` feature)
    #[arg(long)]
    pub plot: bool,

    /// Plot |f(c)| on a log scale
    #[arg(long, requires = "plot")]
    pub log_y: bool,

    /// Stop early after N iterations without a smaller |f(c)|
    #[arg(long, value_name = "N")]
    pub stall: Option<usize>,

    /// Log each iteration (same as RUST_LOG=debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Aligned iteration table and a summary line
    Table,
    /// The full trace as JSON
    Json,
}

impl Args {
    /// Collects the form fields for validation.
    pub fn raw_input(&self) -> RawInput {
        RawInput {
            method: self.method.clone(),
            expression: self.expression.clone().unwrap_or_default(),
            lower: self.lower.clone().unwrap_or_default(),
            upper: self.upper.clone().unwrap_or_default(),
            tolerance: self.tolerance.clone(),
            max_iterations: self.max_iterations.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_negative_bounds() {
        let args = Args::try_parse_from([
            "rootline", "-m", "bisection", "-f", "x^2 + 1", "-a", "-1", "-b", "1",
        ])
        .expect("valid arguments");

        let raw = args.raw_input();
        assert_eq!(raw.lower, "-1");
        assert_eq!(raw.upper, "1");
        assert_eq!(raw.tolerance, "1e-6");
        assert_eq!(raw.max_iterations, "100");
        assert_eq!(args.format, Format::Table);
    }

    #[test]
    fn absent_fields_become_blank() {
        let args = Args::try_parse_from(["rootline", "--method", "newton", "-f", "x - 1"])
            .expect("valid arguments");

        let raw = args.raw_input();
        assert!(raw.lower.is_empty());
        assert!(raw.upper.is_empty());
    }

    #[test]
    fn log_y_requires_plot() {
        assert!(Args::try_parse_from(["rootline", "--log-y"]).is_err());
        assert!(Args::try_parse_from(["rootline", "--plot", "--log-y"]).is_ok());
    }

    #[test]
    fn parses_json_format() {
        let args = Args::try_parse_from(["rootline", "--format", "json"]).expect("valid arguments");
        assert_eq!(args.format, Format::Json);
    }
}
