//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
//!
//! A pivot rule chooses the column that enters the basis. Once the column has been selected, the
//! row is found by the ratio test of the tableau; a rule only influences how ties in that test are
//! broken.
use std::fmt::{Display, Formatter, Result as FormatResult};

use num_traits::Zero;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::algorithm::two_phase::tableau::{RatioTieBreak, Tableau};
use crate::data::number_types::rational::Rational;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
pub trait PivotRule {
    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// The index of a non-basic column with a negative relative cost, together with that cost. If
    /// there is no such column, `None`: the current basis is optimal.
    fn select_primal_pivot_column<'t>(&mut self, tableau: &'t Tableau) -> Option<(usize, &'t Rational)>;

    /// How the ratio test should choose between rows attaining the minimum ratio.
    fn ratio_tie_break(&self) -> RatioTieBreak {
        RatioTieBreak::FirstRow
    }
}

/// Simply pivot on the first column, which has a negative relative cost.
///
/// Together with choosing the leaving variable with the lowest index, this is Bland's rule, which
/// never cycles.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn select_primal_pivot_column<'t>(&mut self, tableau: &'t Tableau) -> Option<(usize, &'t Rational)> {
        tableau.profitable_columns().next()
    }

    fn ratio_tie_break(&self) -> RatioTieBreak {
        RatioTieBreak::LowestBasicColumn
    }
}

/// Simply pivot on the column, which has the most negative relative cost.
///
/// Dantzig's rule. Of several columns with the same relative cost, the first one is taken.
pub struct SteepestDescentAlongVariable;
impl PivotRule for SteepestDescentAlongVariable {
    fn select_primal_pivot_column<'t>(&mut self, tableau: &'t Tableau) -> Option<(usize, &'t Rational)> {
        let mut smallest: Option<(usize, &Rational)> = None;
        for (j, cost) in tableau.profitable_columns() {
            if let Some((existing_j, existing_cost)) = smallest.as_mut() {
                if cost < *existing_cost {
                    *existing_j = j;
                    *existing_cost = cost;
                }
            } else {
                smallest = Some((j, cost))
            }
        }

        smallest
    }
}

/// Pivot on a uniformly chosen column with a negative relative cost.
pub struct RandomProfitable<R> {
    rng: R,
}

impl<R: RngCore> RandomProfitable<R> {
    /// Create a new instance drawing from a random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomProfitable<ChaCha8Rng> {
    /// Create a new instance that is reproducible through its seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> PivotRule for RandomProfitable<R> {
    fn select_primal_pivot_column<'t>(&mut self, tableau: &'t Tableau) -> Option<(usize, &'t Rational)> {
        let candidates = tableau.profitable_columns().collect::<Vec<_>>();
        if candidates.is_empty() {
            None
        } else {
            let chosen = self.rng.random_range(0..candidates.len());
            Some(candidates[chosen])
        }
    }
}

/// Pivot on the column that decreases the objective fastest per unit of distance travelled.
///
/// The relative cost of each candidate is normalized by the Euclidean norm of its column in the
/// current tableau. As everything is exact, squares are compared instead. Of several columns with
/// the same score, the first one is taken.
///
/// A candidate column without any nonzero constraint entry is chosen immediately: the objective is
/// unbounded in its direction.
pub struct SteepestEdge;
impl PivotRule for SteepestEdge {
    fn select_primal_pivot_column<'t>(&mut self, tableau: &'t Tableau) -> Option<(usize, &'t Rational)> {
        let mut steepest: Option<(usize, &Rational, Rational)> = None;
        for (j, cost) in tableau.profitable_columns() {
            let norm = tableau.column_squared_norm(j);
            if norm.is_zero() {
                return Some((j, cost));
            }

            // Both sides are positive, so a larger square means a steeper edge
            let score = cost * cost / norm;
            if steepest.as_ref().is_none_or(|(_, _, best)| &score > best) {
                steepest = Some((j, cost, score));
            }
        }

        steepest.map(|(j, cost, _)| (j, cost))
    }
}

/// The available pivot rules, to be selected through the solve options.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum PivotRuleKind {
    /// The column with the most negative relative cost (Dantzig), see
    /// `SteepestDescentAlongVariable`.
    #[default]
    MostNegative,
    /// The lowest-indexed column with a negative relative cost, with Bland's leaving variable
    /// choice, see `FirstProfitable`.
    FirstNegative,
    /// A uniformly random column with a negative relative cost, see `RandomProfitable`.
    RandomNegative,
    /// The column with the best relative cost per unit of column norm, see `SteepestEdge`.
    SteepestEdge,
}

impl PivotRuleKind {
    /// All available rules.
    pub const ALL: [Self; 4] = [
        Self::MostNegative,
        Self::FirstNegative,
        Self::RandomNegative,
        Self::SteepestEdge,
    ];

    /// Create the rule.
    ///
    /// # Arguments
    ///
    /// * `seed`: Used to seed the random number generator of randomized rules, ignored otherwise.
    pub fn build(self, seed: u64) -> Box<dyn PivotRule> {
        match self {
            Self::MostNegative => Box::new(SteepestDescentAlongVariable),
            Self::FirstNegative => Box::new(FirstProfitable),
            Self::RandomNegative => Box::new(RandomProfitable::seeded(seed)),
            Self::SteepestEdge => Box::new(SteepestEdge),
        }
    }
}

impl Display for PivotRuleKind {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        f.write_str(match self {
            Self::MostNegative => "most negative",
            Self::FirstNegative => "first negative",
            Self::RandomNegative => "random negative",
            Self::SteepestEdge => "steepest edge",
        })
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, PivotRule, PivotRuleKind, RandomProfitable, SteepestDescentAlongVariable, SteepestEdge};
    use crate::algorithm::two_phase::tableau::{RatioTieBreak, Tableau};
    use crate::data::linear_program::elements::Objective;
    use crate::data::linear_program::model::LinearProgram;
    use crate::RB;
    use crate::tests::problem_1;

    fn selected(rule: &mut dyn PivotRule, tableau: &Tableau) -> Option<usize> {
        rule.select_primal_pivot_column(tableau).map(|(j, _)| j)
    }

    /// Maximize 2 a + 3 b subject to a <= 1 and 10 b <= 1.
    fn long_edge() -> Tableau {
        let mut program = LinearProgram::new(Objective::Maximize);
        program.add_variables(["a", "b"]).unwrap();
        program.set_cost([("a", RB!(2)), ("b", RB!(3))]).unwrap();
        program.add_constraint([("a", RB!(1))], RB!(1)).unwrap();
        program.add_constraint([("b", RB!(10))], RB!(1)).unwrap();

        Tableau::new(&program)
    }

    #[test]
    fn find_profitable_column() {
        let tableau = Tableau::new(&problem_1::linear_program());
        assert_eq!(selected(&mut FirstProfitable, &tableau), Some(0));
        assert_eq!(selected(&mut SteepestDescentAlongVariable, &tableau), Some(1));
        assert_eq!(
            SteepestDescentAlongVariable.select_primal_pivot_column(&tableau),
            Some((1, &RB!(-5))),
        );
    }

    #[test]
    fn optimal_tableau() {
        let mut tableau = Tableau::new(&problem_1::linear_program());
        tableau.bring_into_basis(1, 1);
        tableau.bring_into_basis(0, 2);
        for kind in PivotRuleKind::ALL {
            assert_eq!(selected(kind.build(0).as_mut(), &tableau), None, "{}", kind);
        }
    }

    #[test]
    fn steepest_edge() {
        let tableau = long_edge();
        assert_eq!(selected(&mut SteepestDescentAlongVariable, &tableau), Some(1));
        // 2^2 / 1 > 3^2 / 10^2
        assert_eq!(selected(&mut SteepestEdge, &tableau), Some(0));

        // 5^2 / 8 > 3^2 / 10
        let tableau = Tableau::new(&problem_1::linear_program());
        assert_eq!(selected(&mut SteepestEdge, &tableau), Some(1));
    }

    #[test]
    fn random() {
        let tableau = Tableau::new(&problem_1::linear_program());
        let mut rule = RandomProfitable::seeded(42);
        let chosen = (0..64)
            .filter_map(|_| selected(&mut rule, &tableau))
            .collect::<HashSet<_>>();
        assert!(chosen.is_subset(&[0, 1].into_iter().collect()));
        assert_eq!(chosen.len(), 2);

        let sequence = |seed| {
            let mut rule = RandomProfitable::seeded(seed);
            (0..16).map(|_| selected(&mut rule, &tableau)).collect::<Vec<_>>()
        };
        assert_eq!(sequence(7), sequence(7));
    }

    #[test]
    fn tie_breaks() {
        assert_eq!(FirstProfitable.ratio_tie_break(), RatioTieBreak::LowestBasicColumn);
        assert_eq!(SteepestDescentAlongVariable.ratio_tie_break(), RatioTieBreak::FirstRow);
        assert_eq!(SteepestEdge.ratio_tie_break(), RatioTieBreak::FirstRow);
    }
}
