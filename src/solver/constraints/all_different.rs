use std::collections::HashSet;

use crate::solver::{
    assignment::Assignment,
    constraint::{Constraint, ConstraintDescriptor},
    engine::VariableId,
    value::ValueEquality,
};

/// An n-ary constraint requiring every variable in the set to take a unique
/// value.
///
/// This is the usual global constraint for puzzles like Sudoku. Under the
/// lazy partial-check semantics it only starts rejecting once the whole
/// scope is bound; before that, forward checking probes it with hypothetical
/// two-variable extensions and gets a vacuous pass for the rest.
#[derive(Debug, Clone)]
pub struct AllDifferentConstraint {
    pub vars: Vec<VariableId>,
}

impl AllDifferentConstraint {
    pub fn new(vars: Vec<VariableId>) -> Self {
        Self { vars }
    }
}

impl<V: ValueEquality> Constraint<V> for AllDifferentConstraint {
    fn scope(&self) -> &[VariableId] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        let vars_str = self
            .vars
            .iter()
            .map(|v| format!("?{}", v))
            .collect::<Vec<_>>()
            .join(", ");
        ConstraintDescriptor {
            name: "AllDifferentConstraint".to_string(),
            description: format!("AllDifferent({})", vars_str),
        }
    }

    fn is_satisfied(&self, assignment: &Assignment<V>) -> bool {
        let mut seen = HashSet::with_capacity(self.vars.len());
        for &var in &self.vars {
            if let Some(value) = assignment.get(var) {
                if !seen.insert(value) {
                    return false;
                }
            }
        }
        true
    }
}
