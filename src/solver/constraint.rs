use crate::solver::{assignment::Assignment, engine::VariableId, value::ValueEquality};

#[derive(Debug, Clone)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

/// A rule over a fixed, ordered subset of variables.
///
/// Constraints are checked lazily against partial assignments: while any
/// variable in the scope is still unassigned, [`Constraint::check`] reports
/// the constraint as not-yet-violated. This is what lets the engine test
/// constraints incrementally as each assignment is extended, and lets
/// forward checking probe hypothetical extensions speculatively.
///
/// Implementations must be pure: no side effects, and a stable verdict
/// across repeated calls with equivalent assignments.
pub trait Constraint<V: ValueEquality>: std::fmt::Debug {
    /// The variables this constraint ranges over.
    fn scope(&self) -> &[VariableId];

    fn descriptor(&self) -> ConstraintDescriptor;

    /// Evaluates the predicate. Only called by [`Constraint::check`] once
    /// every variable in the scope is bound.
    fn is_satisfied(&self, assignment: &Assignment<V>) -> bool;

    /// Vacuously true while the scope is not fully bound, otherwise the
    /// predicate's verdict.
    fn check(&self, assignment: &Assignment<V>) -> bool {
        if self.scope().iter().any(|&var| !assignment.contains(var)) {
            return true;
        }
        self.is_satisfied(assignment)
    }
}
