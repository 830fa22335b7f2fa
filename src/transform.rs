use crate::consts::ZERO_PAD_RE;
use std::fmt;

/// A named string transform that can be chained inside a placeholder.
///
/// Every operation is total: input it cannot handle (a non-numeric value fed to
/// [`Operation::IntNormalize`] or [`Operation::ZeroPad`]) comes back unchanged.
///
/// # Examples
///
/// ```rust
/// use batch_rename::transform::Operation;
///
/// let op = Operation::parse("04i").unwrap();
/// assert_eq!(op, Operation::ZeroPad(4));
/// assert_eq!(op.apply("7"), "0007");
/// assert_eq!(op.apply("abc"), "abc");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `lower`
    Lower,
    /// `upper`
    Upper,
    /// `i`: canonical base-10 rendering (leading zeros stripped, sign kept).
    IntNormalize,
    /// `0<width>i`: base-10 rendering padded with zeros to at least `width` characters.
    ZeroPad(usize),
}

impl Operation {
    /// Parse an operation specifier. Returns `None` for anything unrecognized,
    /// including a zero-pad specifier whose width does not parse.
    pub fn parse(spec: &str) -> Option<Self> {
        match spec {
            "lower" => Some(Self::Lower),
            "upper" => Some(Self::Upper),
            "i" => Some(Self::IntNormalize),
            _ => {
                let width = ZERO_PAD_RE
                    .captures(spec)
                    .and_then(|caps| caps.get(1))
                    .and_then(|m| m.as_str().parse::<usize>().ok())?;
                Some(Self::ZeroPad(width))
            }
        }
    }

    pub fn apply(&self, value: &str) -> String {
        match self {
            Self::Lower => value.to_lowercase(),
            Self::Upper => value.to_uppercase(),
            Self::IntNormalize => match parse_int(value) {
                Some(n) => n.to_string(),
                None => value.to_string(),
            },
            Self::ZeroPad(width) => match parse_int(value) {
                Some(n) => format!("{n:0width$}", width = *width),
                None => value.to_string(),
            },
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lower => f.write_str("lower"),
            Self::Upper => f.write_str("upper"),
            Self::IntNormalize => f.write_str("i"),
            Self::ZeroPad(width) => write!(f, "0{width}i"),
        }
    }
}

/// Apply the operation named by `spec` to `value`, or return `value` unchanged
/// when the specifier is not recognized.
pub fn apply_operation(value: &str, spec: &str) -> String {
    match Operation::parse(spec) {
        Some(op) => op.apply(value),
        None => {
            tracing::trace!(spec, "unrecognized operation, passing value through");
            value.to_string()
        }
    }
}

fn parse_int(value: &str) -> Option<i128> {
    value.parse::<i128>().ok()
}
