use std::fmt;

use crate::solver::{
    assignment::Assignment,
    constraint::{Constraint, ConstraintDescriptor},
    engine::VariableId,
    value::ValueEquality,
};

/// A constraint backed by an arbitrary closure over the assignment.
///
/// This is the escape hatch for rules the named constraint structs don't
/// cover (arithmetic relations, domain-specific predicates). The closure is
/// only consulted once the whole scope is bound; it must be pure.
pub struct PredicateConstraint<V: ValueEquality> {
    scope: Vec<VariableId>,
    label: String,
    predicate: Box<dyn Fn(&Assignment<V>) -> bool>,
}

impl<V: ValueEquality> PredicateConstraint<V> {
    pub fn new<F>(scope: Vec<VariableId>, predicate: F) -> Self
    where
        F: Fn(&Assignment<V>) -> bool + 'static,
    {
        Self::named("predicate", scope, predicate)
    }

    pub fn named<F>(label: impl Into<String>, scope: Vec<VariableId>, predicate: F) -> Self
    where
        F: Fn(&Assignment<V>) -> bool + 'static,
    {
        Self {
            scope,
            label: label.into(),
            predicate: Box::new(predicate),
        }
    }
}

impl<V: ValueEquality> fmt::Debug for PredicateConstraint<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateConstraint")
            .field("scope", &self.scope)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl<V: ValueEquality> Constraint<V> for PredicateConstraint<V> {
    fn scope(&self) -> &[VariableId] {
        &self.scope
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        let vars_str = self
            .scope
            .iter()
            .map(|v| format!("?{}", v))
            .collect::<Vec<_>>()
            .join(", ");
        ConstraintDescriptor {
            name: "PredicateConstraint".to_string(),
            description: format!("{}({})", self.label, vars_str),
        }
    }

    fn is_satisfied(&self, assignment: &Assignment<V>) -> bool {
        (self.predicate)(assignment)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::PredicateConstraint;
    use crate::solver::{assignment::Assignment, constraint::Constraint, engine::Csp};

    #[test]
    fn closure_is_only_consulted_once_bound() {
        let constraint: PredicateConstraint<i64> =
            PredicateConstraint::new(vec![0, 1], |a| match (a.get(0), a.get(1)) {
                (Some(&x), Some(&y)) => x + y == 5,
                _ => unreachable!("check guards the scope"),
            });

        let partial: Assignment<i64> = Assignment::new().set(0, 2);
        assert!(constraint.check(&partial));
        assert!(constraint.check(&partial.set(1, 3)));
        assert!(!constraint.check(&partial.set(1, 4)));
    }

    #[test]
    fn solver_honours_an_arithmetic_relation() {
        let mut csp: Csp<i64> = Csp::new(vec![vec![1, 2, 3], vec![1, 2, 3]]);
        csp.add_predicate(vec![0, 1], |a| match (a.get(0), a.get(1)) {
            (Some(&x), Some(&y)) => x > y,
            _ => true,
        })
        .unwrap();

        let (solution, _stats) = csp.solve(Assignment::new()).unwrap();
        let solution = solution.unwrap();
        let x = *solution.get(0).unwrap();
        let y = *solution.get(1).unwrap();
        assert!(x > y);
        assert_eq!((x - y).signum(), 1);
    }
}
