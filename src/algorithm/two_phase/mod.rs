//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the two phase simplex algorithm.
//! The algorithm is implemented as described in chapters 2 and 4 of Combinatorial Optimization, a
//! book by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! The tableau always maximizes. If the origin is not feasible, the first phase looks for a basic
//! feasible solution using artificial variables. The second phase then optimizes the actual
//! objective from there.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::time::{Duration, Instant};

use enum_map::{enum_map, Enum};
use log::debug;

use crate::algorithm::Status;
use crate::algorithm::two_phase::phase_one::{Rank, RankedFeasibilityResult};
use crate::algorithm::two_phase::primal::{PivotEvent, PrimalResult};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRuleKind;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::model::LinearProgram;
use crate::data::linear_program::solution::Solution;

pub mod extraction;
pub mod phase_one;
pub mod phase_two;
pub mod primal;
pub mod strategy;
pub mod tableau;

/// The two phases of the method.
#[derive(Enum, Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Finding a basic feasible solution.
    One,
    /// Optimizing the objective function.
    Two,
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        f.write_str(match self {
            Phase::One => "one",
            Phase::Two => "two",
        })
    }
}

/// Settings of a solve.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct SolveOptions {
    /// Rule used to select the entering variable, in both phases.
    pub pivot_rule: PivotRuleKind,
    /// Seed of the random number generator of randomized pivot rules.
    pub seed: u64,
}

impl SolveOptions {
    /// Use a different pivot rule.
    #[must_use]
    pub fn with_pivot_rule(mut self, pivot_rule: PivotRuleKind) -> Self {
        self.pivot_rule = pivot_rule;
        self
    }

    /// Use a different seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Solves linear programs, optionally reporting every pivot.
pub struct Solver<'a> {
    options: SolveOptions,
    observer: Box<dyn FnMut(&PivotEvent<'_>) + 'a>,
}

fn ignore(_: &PivotEvent<'_>) {}

impl<'a> Solver<'a> {
    /// Create a new solver without observer.
    pub fn new(options: SolveOptions) -> Self {
        Self { options, observer: Box::new(ignore) }
    }

    /// Call a function after every pivot.
    ///
    /// Replaces an observer set earlier.
    #[must_use]
    pub fn with_observer(mut self, observer: impl FnMut(&PivotEvent<'_>) + 'a) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Solve a linear program.
    ///
    /// The pivot rule is created once and used for both phases.
    pub fn solve(&mut self, program: &LinearProgram) -> Solution {
        debug!(
            "Solving a {} problem with {} variables and {} constraints using the {} rule",
            program.objective(), program.nr_variables(), program.nr_constraints(), self.options.pivot_rule,
        );

        let mut rule = self.options.pivot_rule.build(self.options.seed);
        let mut pivots = enum_map! { _ => 0 };
        let mut elapsed = enum_map! { _ => Duration::ZERO };

        let mut tableau = Tableau::new(program);

        if tableau.nr_artificial_variables() > 0 {
            let start = Instant::now();
            let (result, nr_pivots) = phase_one::primal(&mut tableau, rule.as_mut(), self.observer.as_mut());
            pivots[Phase::One] = nr_pivots;
            elapsed[Phase::One] = start.elapsed();

            match result {
                RankedFeasibilityResult::Feasible { rank } => {
                    if let Rank::Deficient(rows) = rank {
                        debug!("Phase one: {} redundant rows removed", rows.len());
                    }
                    debug!("Phase one: feasible after {} pivots", nr_pivots);
                    phase_two::restore_cost(&mut tableau);
                },
                RankedFeasibilityResult::Infeasible => {
                    debug!("Phase one: infeasible after {} pivots", nr_pivots);
                    return extraction::solution(program, &tableau, Status::Infeasible, pivots, elapsed);
                },
            }
        } else {
            debug!("Origin is feasible, skipping phase one");
        }

        let start = Instant::now();
        let (result, nr_pivots) = phase_two::primal(&mut tableau, rule.as_mut(), self.observer.as_mut());
        pivots[Phase::Two] = nr_pivots;
        elapsed[Phase::Two] = start.elapsed();

        let status = match result {
            PrimalResult::Optimal => Status::Optimal,
            PrimalResult::Unbounded => Status::Unbounded,
            PrimalResult::CycleDetected => Status::CycleDetected,
        };
        extraction::solution(program, &tableau, status, pivots, elapsed)
    }
}

/// Solve a linear program.
///
/// Shorthand for creating a `Solver` without observer.
pub fn solve(program: &LinearProgram, options: &SolveOptions) -> Solution {
    Solver::new(*options).solve(program)
}
