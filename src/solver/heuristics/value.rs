//! Strategies for ordering the values tried for a chosen variable.

use crate::solver::{
    assignment::Assignment,
    engine::{Csp, VariableId},
    value::ValueEquality,
};

/// A value-ordering strategy.
///
/// Given the variable the solver is about to branch on, implementors return
/// the values of its current domain in the order they should be tried.
pub trait ValueOrderingHeuristic<V: ValueEquality> {
    fn order_values(&self, csp: &Csp<V>, var: VariableId, assignment: &Assignment<V>) -> Vec<V>;
}

/// Tries values in current-domain order.
pub struct IdentityValueHeuristic;

impl<V: ValueEquality> ValueOrderingHeuristic<V> for IdentityValueHeuristic {
    fn order_values(&self, csp: &Csp<V>, var: VariableId, _assignment: &Assignment<V>) -> Vec<V> {
        csp.current_domain(var).iter().cloned().collect()
    }
}

/// Least Constraining Value: tries first the value that rules out the
/// fewest options for unassigned neighbours.
///
/// A value's conflict count is the number of (constraint, neighbour)
/// occurrences for which the neighbour is unassigned and still has that
/// value in its current domain; a neighbour shared with `var` through
/// several constraints is counted once per constraint. The sort is stable,
/// so ties keep current-domain order.
pub struct LeastConstrainingValueHeuristic;

impl LeastConstrainingValueHeuristic {
    fn conflicts<V: ValueEquality>(
        csp: &Csp<V>,
        var: VariableId,
        assignment: &Assignment<V>,
        value: &V,
    ) -> usize {
        let mut count = 0;
        for &constraint_id in csp.constraints_on(var) {
            for &neighbour in csp.constraint(constraint_id).scope() {
                if neighbour != var
                    && !assignment.contains(neighbour)
                    && csp.current_domain(neighbour).contains(value)
                {
                    count += 1;
                }
            }
        }
        count
    }
}

impl<V: ValueEquality> ValueOrderingHeuristic<V> for LeastConstrainingValueHeuristic {
    fn order_values(&self, csp: &Csp<V>, var: VariableId, assignment: &Assignment<V>) -> Vec<V> {
        let mut values: Vec<V> = csp.current_domain(var).iter().cloned().collect();
        values.sort_by_key(|value| Self::conflicts(csp, var, assignment, value));
        values
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{IdentityValueHeuristic, LeastConstrainingValueHeuristic, ValueOrderingHeuristic};
    use crate::solver::{
        assignment::Assignment, constraints::not_equal::NotEqualConstraint, engine::Csp,
    };

    #[test]
    fn identity_keeps_current_domain_order() {
        let csp: Csp<i64> = Csp::new(vec![vec![3, 1, 2]]);
        let ordered = IdentityValueHeuristic.order_values(&csp, 0, &Assignment::new());
        assert_eq!(ordered, vec![3, 1, 2]);
    }

    #[test]
    fn lcv_puts_the_least_constraining_value_first() {
        // ?0 ranges over [1, 2, 3]; its neighbours hold [1] and [3], so
        // value 2 conflicts with nothing and must sort first. 1 and 3 tie
        // on one conflict each and keep domain order.
        let mut csp: Csp<i64> = Csp::new(vec![vec![1, 2, 3], vec![1], vec![3]]);
        csp.add_constraint(Box::new(NotEqualConstraint::new(0, 1)))
            .unwrap();
        csp.add_constraint(Box::new(NotEqualConstraint::new(0, 2)))
            .unwrap();

        let ordered = LeastConstrainingValueHeuristic.order_values(&csp, 0, &Assignment::new());
        assert_eq!(ordered, vec![2, 1, 3]);
    }

    #[test]
    fn lcv_ignores_assigned_neighbours() {
        let mut csp: Csp<i64> = Csp::new(vec![vec![1, 2], vec![1, 2]]);
        csp.add_constraint(Box::new(NotEqualConstraint::new(0, 1)))
            .unwrap();

        let assignment = Assignment::new().set(1, 1);
        let ordered = LeastConstrainingValueHeuristic.order_values(&csp, 0, &assignment);
        // With ?1 already assigned there are no conflicts to count, so the
        // domain order survives.
        assert_eq!(ordered, vec![1, 2]);
    }

    #[test]
    fn lcv_counts_each_shared_constraint_separately() {
        // ?0 and ?1 share two constraints, so a value still open for ?1 is
        // counted twice; value 2 has left ?1's current domain and wins.
        let mut csp: Csp<i64> = Csp::new(vec![vec![1, 2], vec![1]]);
        csp.add_constraint(Box::new(NotEqualConstraint::new(0, 1)))
            .unwrap();
        csp.add_constraint(Box::new(NotEqualConstraint::new(0, 1)))
            .unwrap();

        let ordered = LeastConstrainingValueHeuristic.order_values(&csp, 0, &Assignment::new());
        assert_eq!(ordered, vec![2, 1]);
    }
}
