use regex::Regex;
use std::sync::LazyLock;

/// Matches a placeholder token like `:1:` or `:3,lower,04i:`, capturing the index digits
/// and the raw option tail (including its leading comma, if any).
pub static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([0-9]+)((?:,[A-Za-z0-9_]+)*):").unwrap());

/// Matches a zero-pad specifier like `04i`, capturing the width digits.
pub static ZERO_PAD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^0([0-9]+)i$").unwrap());
