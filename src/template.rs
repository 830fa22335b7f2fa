//! Output template rendering.
//!
//! A template is literal text with placeholder tokens of the form `:index[,op]*:`.
//! `index` selects a captured group (0 is the whole match) and each `op` is a
//! [`Operation`] specifier applied left to right. Tokens that cannot be resolved are
//! left in the output exactly as written.

use crate::consts::PLACEHOLDER_RE;
use crate::transform::Operation;
use regex::Captures;

/// A parsed placeholder token.
///
/// Unrecognized operation specifiers are dropped while parsing, which is the same as
/// applying an identity transform in their place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub index: usize,
    pub ops: Vec<Operation>,
}

impl Placeholder {
    #[cfg(test)]
    fn parse(token: &str) -> Option<Self> {
        let caps = PLACEHOLDER_RE.captures(token)?;
        let whole = caps.get(0)?;
        if whole.start() != 0 || whole.end() != token.len() {
            return None;
        }
        Self::from_captures(&caps)
    }

    fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        let index = caps.get(1)?.as_str().parse::<usize>().ok()?;
        let ops = caps
            .get(2)
            .map(|m| m.as_str())
            .unwrap_or_default()
            .split(',')
            .filter(|spec| !spec.is_empty())
            .filter_map(|spec| {
                let op = Operation::parse(spec);
                if op.is_none() {
                    tracing::trace!(spec, "dropping unrecognized operation");
                }
                op
            })
            .collect();
        Some(Self { index, ops })
    }

    /// Look up the group this placeholder points at and run the transform chain over it.
    /// Returns `None` when the index is out of range for `groups`.
    pub fn resolve<S: AsRef<str>>(&self, groups: &[S]) -> Option<String> {
        let value = groups.get(self.index)?.as_ref().to_string();
        Some(self.ops.iter().fold(value, |acc, op| op.apply(&acc)))
    }
}

/// Render `template` against one match's captured groups.
///
/// # Examples
///
/// ```rust
/// use batch_rename::template::render;
///
/// let out = render("holidays_:1,04i:.jpg", &["img_7.jpg", "7"]);
/// assert_eq!(out, "holidays_0007.jpg");
///
/// // out of range: left untouched
/// assert_eq!(render(":9:", &["a"]), ":9:");
/// ```
pub fn render<S: AsRef<str>>(template: &str, groups: &[S]) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures<'_>| {
            let token = &caps[0];
            match Placeholder::from_captures(caps).and_then(|p| p.resolve(groups)) {
                Some(value) => value,
                None => {
                    tracing::trace!(token, groups = groups.len(), "leaving placeholder as-is");
                    token.to_string()
                }
            }
        })
        .into_owned()
}

/// All well-formed placeholders in `template`, in order of appearance.
/// Tokens whose index does not parse are skipped.
pub fn placeholders(template: &str) -> Vec<Placeholder> {
    PLACEHOLDER_RE
        .captures_iter(template)
        .filter_map(|caps| Placeholder::from_captures(&caps))
        .collect()
}
