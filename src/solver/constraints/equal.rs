use crate::solver::{
    assignment::Assignment,
    constraint::{Constraint, ConstraintDescriptor},
    engine::VariableId,
    value::ValueEquality,
};

/// The binary `?a == ?b` constraint.
#[derive(Debug, Clone)]
pub struct EqualConstraint {
    vars: [VariableId; 2],
}

impl EqualConstraint {
    pub fn new(a: VariableId, b: VariableId) -> Self {
        Self { vars: [a, b] }
    }
}

impl<V: ValueEquality> Constraint<V> for EqualConstraint {
    fn scope(&self) -> &[VariableId] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "EqualConstraint".to_string(),
            description: format!("?{} == ?{}", self.vars[0], self.vars[1]),
        }
    }

    fn is_satisfied(&self, assignment: &Assignment<V>) -> bool {
        assignment.get(self.vars[0]) == assignment.get(self.vars[1])
    }
}
