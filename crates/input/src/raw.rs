use std::fmt;

/// The input form, exactly as typed.
///
/// Every field is free text. Surrounding whitespace is ignored and a blank
/// field counts as missing. `upper` is only read for the bracketing methods;
/// for Newton-Raphson `lower` is the initial guess `x0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    pub method: String,
    pub expression: String,
    pub lower: String,
    pub upper: String,
    pub tolerance: String,
    pub max_iterations: String,
}

impl RawInput {
    /// Returns the text of `field`.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Method => &self.method,
            Field::Expression => &self.expression,
            Field::Lower => &self.lower,
            Field::Upper => &self.upper,
            Field::Tolerance => &self.tolerance,
            Field::MaxIterations => &self.max_iterations,
        }
    }
}

/// A field of the input form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Method,
    Expression,
    Lower,
    Upper,
    Tolerance,
    MaxIterations,
}

impl Field {
    /// Form fields in display order.
    pub const ALL: [Field; 6] = [
        Field::Method,
        Field::Expression,
        Field::Lower,
        Field::Upper,
        Field::Tolerance,
        Field::MaxIterations,
    ];

    /// Returns the label shown next to the field.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Field::Method => "method",
            Field::Expression => "f(x)",
            Field::Lower => "a (or x0)",
            Field::Upper => "b",
            Field::Tolerance => "tolerance",
            Field::MaxIterations => "max iterations",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_reads_each_field() {
        let raw = RawInput {
            method: "m".into(),
            expression: "e".into(),
            lower: "l".into(),
            upper: "u".into(),
            tolerance: "t".into(),
            max_iterations: "n".into(),
        };
        let texts: Vec<_> = Field::ALL.iter().map(|&field| raw.get(field)).collect();
        assert_eq!(texts, ["m", "e", "l", "u", "t", "n"]);
    }
}
