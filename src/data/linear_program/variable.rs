//! # Variables and their ordering
//!
//! Columns of the tableau are assigned to the variables of a linear program in a fixed order:
//! alphabetically by the name without its trailing digits, then numerically by those trailing
//! digits. That way `x2` comes before `x10`.
use std::cmp::Ordering;

/// A variable of the original problem, as placed in the tableau.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Variable {
    /// Name as used in the linear program.
    pub name: String,
    /// Column index in the tableau. Stable for the lifetime of a solve.
    pub index: usize,
}

/// Split a name into its alphabetic prefix and numeric suffix.
///
/// The suffix is returned without leading zeros; names without trailing digits have suffix "".
fn split(name: &str) -> (&str, &str) {
    let prefix = name.trim_end_matches(|c: char| c.is_ascii_digit());
    let suffix = &name[prefix.len()..];

    (prefix, suffix.trim_start_matches('0'))
}

/// Compare two decimal digit strings without leading zeros as integers.
///
/// An empty string is zero. Works for suffixes of any length.
fn compare_numeric(left: &str, right: &str) -> Ordering {
    left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}

/// Total order on variable names.
///
/// Names are compared on their alphabetic prefix first and their numeric suffix second. Names that
/// are equal in both (like `x1` and `x01`) are ordered as plain strings.
pub fn compare_names(left: &str, right: &str) -> Ordering {
    let (left_prefix, left_suffix) = split(left);
    let (right_prefix, right_suffix) = split(right);

    left_prefix.cmp(right_prefix)
        .then_with(|| compare_numeric(left_suffix, right_suffix))
        .then_with(|| left.cmp(right))
}

/// Assign column indices to the variables of a problem.
///
/// # Return value
///
/// The variables sorted with `compare_names`, with their index equal to their position.
pub fn ordered<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<Variable> {
    let mut names = names.into_iter().collect::<Vec<_>>();
    names.sort_by(|left, right| compare_names(left, right));

    names.into_iter()
        .enumerate()
        .map(|(index, name)| Variable { name: name.to_string(), index })
        .collect()
}
