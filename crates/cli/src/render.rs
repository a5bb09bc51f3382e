//! Text and JSON rendering of iteration traces.

use std::fmt::Write as _;

use rootline_solvers::equation::{IterationRecord, IterationTrace, Method, Termination};
use serde::Serialize;

const HEADERS: [&str; 5] = ["Iteration", "a", "b", "c", "f(c)"];

/// Renders records as an aligned table with the columns
/// `Iteration | a | b | c | f(c)`.
///
/// An absent `b` (Newton-Raphson) is shown as `-`.
pub fn table(records: &[IterationRecord]) -> String {
    let rows: Vec<[String; 5]> = records
        .iter()
        .map(|record| {
            [
                record.index.to_string(),
                record.lower.to_string(),
                record.upper.map_or_else(|| "-".to_owned(), |b| b.to_string()),
                record.candidate.to_string(),
                record.residual.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS, &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S; 5], widths: &[usize; 5]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:>width$}", cell.as_ref()))
        .collect();
    let _ = writeln!(out, "{}", line.join(" | "));
}

/// Everything a front-end needs to display one run.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub method: Method,
    pub function: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derivative: Option<String>,
    pub termination: Option<Termination>,
    pub root: Option<f64>,
    pub records: &'a [IterationRecord],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> Report<'a> {
    /// Builds the report for a run that finished.
    pub fn finished(function: String, derivative: Option<String>, trace: &'a IterationTrace) -> Self {
        Self {
            method: trace.method(),
            function,
            derivative,
            termination: Some(trace.termination()),
            root: trace.root(),
            records: trace.records(),
            error: None,
        }
    }

    /// Builds the report for a run that failed part way.
    pub fn failed(
        method: Method,
        function: String,
        derivative: Option<String>,
        records: &'a [IterationRecord],
        error: String,
    ) -> Self {
        Self {
            method,
            function,
            derivative,
            termination: None,
            root: None,
            records,
            error: Some(error),
        }
    }

    /// Returns `Root found: r` (six decimals) or `No root found (reason)`.
    pub fn summary(&self) -> String {
        match (self.root, self.termination, &self.error) {
            (Some(root), _, _) => format!("Root found: {root:.6}"),
            (None, Some(termination), _) => format!("No root found ({termination})"),
            (None, None, Some(error)) => format!("No root found ({error})"),
            (None, None, None) => "No root found".to_owned(),
        }
    }

    /// Renders the derivative (if any), the iteration table and the summary.
    pub fn to_table(&self) -> String {
        let mut out = String::new();
        if let Some(derivative) = &self.derivative {
            let _ = writeln!(out, "f'(x) = {derivative}");
        }
        out.push_str(&table(self.records));
        let _ = writeln!(out, "{}", self.summary());
        out
    }

    /// Encodes the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
