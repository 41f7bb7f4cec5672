//! # Tableau columns
//!
//! Each column of the tableau, except for the right-hand side, represents a variable. Next to the
//! variables of the original problem, the tableau contains slack (or surplus) variables and, when
//! the origin is not feasible, artificial variables.

/// What a tableau column represents.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ColumnKind {
    /// A decision variable of the linear program.
    Original,
    /// Slack of a `<=` row, or surplus of a row that was multiplied by `-1`.
    Slack,
    /// Only used to find an initial basic feasible solution.
    Artificial,
}

/// A column of the tableau.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ColumnInfo {
    /// Name of the variable. Slacks are called `s1`, `s2`, ... and artificial variables `a1`,
    /// `a2`, ..., both numbered by the constraint they belong to.
    pub name: String,
    /// Type of the variable.
    pub kind: ColumnKind,
}

impl ColumnInfo {
    pub(crate) fn original(name: impl Into<String>) -> Self {
        Self { name: name.into(), kind: ColumnKind::Original }
    }

    pub(crate) fn slack(constraint: usize) -> Self {
        Self { name: format!("s{}", constraint + 1), kind: ColumnKind::Slack }
    }

    pub(crate) fn artificial(constraint: usize) -> Self {
        Self { name: format!("a{}", constraint + 1), kind: ColumnKind::Artificial }
    }

    /// Whether this column is an artificial variable.
    pub fn is_artificial(&self) -> bool {
        self.kind == ColumnKind::Artificial
    }
}
