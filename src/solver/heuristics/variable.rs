//! Strategies for choosing which unassigned variable to branch on next.

use std::cell::RefCell;
use std::cmp::Reverse;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::solver::{
    assignment::Assignment,
    engine::{Csp, VariableId},
    value::ValueEquality,
};

/// A variable-selection strategy.
///
/// Implementors choose which unassigned variable the solver branches on
/// next. A good choice can shrink the search tree dramatically; a bad one
/// only costs time, never correctness.
pub trait VariableSelectionHeuristic<V: ValueEquality> {
    /// Selects the next variable to assign.
    ///
    /// Returns `None` when `assignment` already covers every variable.
    fn select_variable(&self, csp: &Csp<V>, assignment: &Assignment<V>) -> Option<VariableId>;
}

/// Picks the first unassigned variable in declaration order.
pub struct SelectFirstHeuristic;

impl<V: ValueEquality> VariableSelectionHeuristic<V> for SelectFirstHeuristic {
    fn select_variable(&self, csp: &Csp<V>, assignment: &Assignment<V>) -> Option<VariableId> {
        csp.unassigned_variables(assignment).into_iter().next()
    }
}

/// Minimum Remaining Values: picks the unassigned variable with the fewest
/// values left in its current domain, the classic fail-first strategy.
/// Ties go to the first-declared variable.
pub struct MinimumRemainingValuesHeuristic;

impl<V: ValueEquality> VariableSelectionHeuristic<V> for MinimumRemainingValuesHeuristic {
    fn select_variable(&self, csp: &Csp<V>, assignment: &Assignment<V>) -> Option<VariableId> {
        csp.unassigned_variables(assignment)
            .into_iter()
            .min_by_key(|&var| csp.current_domain(var).len())
    }
}

/// Degree heuristic: picks the unassigned variable registered against the
/// most constraints. Ties go to the first-declared variable.
pub struct DegreeHeuristic;

impl<V: ValueEquality> VariableSelectionHeuristic<V> for DegreeHeuristic {
    fn select_variable(&self, csp: &Csp<V>, assignment: &Assignment<V>) -> Option<VariableId> {
        csp.unassigned_variables(assignment)
            .into_iter()
            .min_by_key(|&var| Reverse(csp.degree(var)))
    }
}

/// Picks an unassigned variable at random from an explicitly seeded
/// generator, so runs remain reproducible.
pub struct RandomVariableHeuristic {
    rng: RefCell<ChaCha8Rng>,
}

impl RandomVariableHeuristic {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: RefCell::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl<V: ValueEquality> VariableSelectionHeuristic<V> for RandomVariableHeuristic {
    fn select_variable(&self, csp: &Csp<V>, assignment: &Assignment<V>) -> Option<VariableId> {
        let unassigned = csp.unassigned_variables(assignment);
        unassigned.choose(&mut *self.rng.borrow_mut()).copied()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{
        DegreeHeuristic, MinimumRemainingValuesHeuristic, RandomVariableHeuristic,
        SelectFirstHeuristic, VariableSelectionHeuristic,
    };
    use crate::solver::{
        assignment::Assignment, constraints::not_equal::NotEqualConstraint, engine::Csp,
    };

    #[test]
    fn select_first_follows_declaration_order() {
        let csp: Csp<i64> = Csp::new(vec![vec![1, 2], vec![1, 2], vec![1, 2]]);
        let assignment = Assignment::new().set(0, 1);
        let picked = SelectFirstHeuristic.select_variable(&csp, &assignment);
        assert_eq!(picked, Some(1));
    }

    #[test]
    fn mrv_prefers_the_smallest_current_domain() {
        let mut csp: Csp<i64> = Csp::new(vec![vec![1, 2, 3], vec![9]]);
        csp.add_constraint(Box::new(NotEqualConstraint::new(0, 1)))
            .unwrap();

        let picked = MinimumRemainingValuesHeuristic.select_variable(&csp, &Assignment::new());
        assert_eq!(picked, Some(1));
    }

    #[test]
    fn mrv_breaks_ties_by_declaration_order() {
        let csp: Csp<i64> = Csp::new(vec![vec![1, 2], vec![1, 2]]);
        let picked = MinimumRemainingValuesHeuristic.select_variable(&csp, &Assignment::new());
        assert_eq!(picked, Some(0));
    }

    #[test]
    fn degree_prefers_the_most_constrained_variable() {
        let mut csp: Csp<i64> = Csp::new(vec![vec![1, 2], vec![1, 2], vec![1, 2]]);
        csp.add_constraint(Box::new(NotEqualConstraint::new(1, 0)))
            .unwrap();
        csp.add_constraint(Box::new(NotEqualConstraint::new(1, 2)))
            .unwrap();

        let picked = DegreeHeuristic.select_variable(&csp, &Assignment::new());
        assert_eq!(picked, Some(1));
    }

    #[test]
    fn all_heuristics_report_exhaustion_with_none() {
        let csp: Csp<i64> = Csp::new(vec![vec![1]]);
        let full = Assignment::new().set(0, 1);

        assert_eq!(SelectFirstHeuristic.select_variable(&csp, &full), None);
        assert_eq!(
            MinimumRemainingValuesHeuristic.select_variable(&csp, &full),
            None
        );
        assert_eq!(DegreeHeuristic.select_variable(&csp, &full), None);
        assert_eq!(
            RandomVariableHeuristic::from_seed(7).select_variable(&csp, &full),
            None
        );
    }

    #[test]
    fn seeded_random_selection_is_reproducible() {
        let csp: Csp<i64> = Csp::new(vec![vec![1, 2]; 8]);
        let empty = Assignment::new();

        let first = RandomVariableHeuristic::from_seed(42);
        let second = RandomVariableHeuristic::from_seed(42);
        let picks_a: Vec<_> = (0..5).map(|_| first.select_variable(&csp, &empty)).collect();
        let picks_b: Vec<_> = (0..5)
            .map(|_| second.select_variable(&csp, &empty))
            .collect();
        assert_eq!(picks_a, picks_b);
    }
}
