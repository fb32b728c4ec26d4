use std::collections::HashMap;

use tracing::debug;

use crate::{
    error::{Error, Result, SolverError},
    solver::{
        assignment::Assignment,
        constraint::Constraint,
        constraints::predicate::PredicateConstraint,
        domain::{DomainStore, RemovalLog},
        heuristics::{
            value::{LeastConstrainingValueHeuristic, ValueOrderingHeuristic},
            variable::{SelectFirstHeuristic, VariableSelectionHeuristic},
        },
        stats::SearchStats,
        value::ValueEquality,
    },
};

pub type VariableId = u32;
pub type ConstraintId = usize;

/// A hook invoked with the extended assignment after every successful
/// forward-checked extension. Purely observational; it cannot touch solver
/// state.
pub type ObservationHook<V> = Box<dyn Fn(&Assignment<V>)>;

pub(crate) fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn trace(depth: usize, message: std::fmt::Arguments<'_>) {
    debug!(target: "resilio::search", "{}{}", indent(depth), message);
}

/// A constraint satisfaction problem and the engine that solves it.
///
/// A `Csp` holds a fixed set of variables (dense ids `0..n`, in declaration
/// order), their original and current domains, the registered constraints
/// indexed per variable, and the configured heuristic strategies. Solving is
/// a depth-first backtracking search with forward checking: each assignment
/// narrows the chosen variable's domain to a singleton, prunes values from
/// unassigned neighbours that can no longer participate in a solution, and
/// rolls all of it back from a removal log when the branch dead-ends.
///
/// One instance serves one search at a time; concurrent solves need their
/// own instances.
pub struct Csp<V: ValueEquality> {
    domains: DomainStore<V>,
    constraints: Vec<Box<dyn Constraint<V>>>,
    index: HashMap<VariableId, Vec<ConstraintId>>,
    variable_heuristic: Box<dyn VariableSelectionHeuristic<V>>,
    value_heuristic: Box<dyn ValueOrderingHeuristic<V>>,
    observer: Option<ObservationHook<V>>,
}

impl<V: ValueEquality> Csp<V> {
    /// Creates a problem over `domains.len()` variables, variable `i` taking
    /// its ordered candidate values from `domains[i]`. Defaults to
    /// declaration-order variable selection and least-constraining-value
    /// ordering.
    pub fn new(domains: Vec<Vec<V>>) -> Self {
        Self {
            domains: DomainStore::new(domains),
            constraints: Vec::new(),
            index: HashMap::new(),
            variable_heuristic: Box::new(SelectFirstHeuristic),
            value_heuristic: Box::new(LeastConstrainingValueHeuristic),
            observer: None,
        }
    }

    pub fn with_variable_heuristic(
        mut self,
        heuristic: Box<dyn VariableSelectionHeuristic<V>>,
    ) -> Self {
        self.variable_heuristic = heuristic;
        self
    }

    pub fn with_value_heuristic(mut self, heuristic: Box<dyn ValueOrderingHeuristic<V>>) -> Self {
        self.value_heuristic = heuristic;
        self
    }

    pub fn with_observer(mut self, hook: ObservationHook<V>) -> Self {
        self.observer = Some(hook);
        self
    }

    pub fn variable_count(&self) -> usize {
        self.domains.variable_count()
    }

    pub fn variables(&self) -> impl Iterator<Item = VariableId> {
        0..self.variable_count() as VariableId
    }

    /// The variables absent from `assignment`, in declaration order.
    pub fn unassigned_variables(&self, assignment: &Assignment<V>) -> Vec<VariableId> {
        self.variables()
            .filter(|&var| !assignment.contains(var))
            .collect()
    }

    pub fn current_domain(&self, var: VariableId) -> &im::Vector<V> {
        self.domains.current(var)
    }

    pub fn original_domain(&self, var: VariableId) -> &im::Vector<V> {
        self.domains.original(var)
    }

    /// The number of constraints registered against `var`.
    pub fn degree(&self, var: VariableId) -> usize {
        self.constraints_on(var).len()
    }

    pub fn constraints_on(&self, var: VariableId) -> &[ConstraintId] {
        self.index.get(&var).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn constraint(&self, id: ConstraintId) -> &dyn Constraint<V> {
        self.constraints[id].as_ref()
    }

    pub fn constraints(&self) -> &[Box<dyn Constraint<V>>] {
        &self.constraints
    }

    /// Registers a constraint against every variable in its scope, so a
    /// constraint over k variables lands in k index buckets. Rejects scopes
    /// that mention undeclared variables.
    pub fn add_constraint(&mut self, constraint: Box<dyn Constraint<V>>) -> Result<ConstraintId> {
        for &var in constraint.scope() {
            if !self.domains.contains_variable(var) {
                return Err(Error::from(SolverError::UnknownVariable(var)));
            }
        }
        let id = self.constraints.len();
        for &var in constraint.scope() {
            self.index.entry(var).or_default().push(id);
        }
        self.constraints.push(constraint);
        Ok(id)
    }

    /// Registration shorthand for a closure-backed constraint.
    pub fn add_predicate<F>(&mut self, scope: Vec<VariableId>, predicate: F) -> Result<ConstraintId>
    where
        F: Fn(&Assignment<V>) -> bool + 'static,
    {
        self.add_constraint(Box::new(PredicateConstraint::new(scope, predicate)))
    }

    /// Narrows the current domain of `var` to the single `value`, the
    /// caller-side seeding step for pre-assigned variables. Must be applied
    /// for every entry of a non-empty initial assignment before calling
    /// [`Csp::solve`].
    pub fn pin(&mut self, var: VariableId, value: V) -> Result<()> {
        if !self.domains.contains_variable(var) {
            return Err(Error::from(SolverError::UnknownVariable(var)));
        }
        if !self.domains.original(var).contains(&value) {
            return Err(Error::from(SolverError::ValueOutsideDomain(var)));
        }
        self.domains.pin(var, value);
        Ok(())
    }

    /// Resets every current domain to its original baseline, making the
    /// instance reusable for a fresh solve after a previous search narrowed
    /// or pinned domains.
    pub fn reset_domains(&mut self) {
        self.domains.reset();
    }

    /// Would extending `assignment` with `var = value` violate any
    /// constraint indexed under `var`? Short-circuits on the first
    /// violation. Constraints whose scope is not yet fully bound pass
    /// vacuously.
    pub fn is_consistent(&self, var: VariableId, value: &V, assignment: &Assignment<V>) -> bool {
        debug_assert!(
            !self.domains.current(var).is_empty(),
            "current domain of ?{var} is empty"
        );
        let hypothetical = assignment.set(var, value.clone());
        self.constraints_on(var)
            .iter()
            .all(|&id| self.constraints[id].check(&hypothetical))
    }

    /// Selects the next variable to branch on via the configured heuristic.
    /// Calling this with a complete assignment is a contract violation and
    /// fails with [`SolverError::NoUnassignedVariable`].
    pub fn select_unassigned_variable(&self, assignment: &Assignment<V>) -> Result<VariableId> {
        self.variable_heuristic
            .select_variable(self, assignment)
            .ok_or_else(|| Error::from(SolverError::NoUnassignedVariable))
    }

    /// Orders the current domain of `var` via the configured heuristic. A
    /// singleton domain is returned as-is: a forced value is not worth
    /// re-scoring.
    pub fn order_domain_values(&self, var: VariableId, assignment: &Assignment<V>) -> Vec<V> {
        let current = self.domains.current(var);
        assert!(!current.is_empty(), "current domain of ?{var} is empty");
        if current.len() == 1 {
            return current.iter().cloned().collect();
        }
        self.value_heuristic.order_values(self, var, assignment)
    }

    /// Propagates the tentative `var = value` through every constraint
    /// indexed under `var`: any value of an unassigned neighbour that can no
    /// longer satisfy the constraint is pruned from the neighbour's current
    /// domain and recorded in `log`. Returns `false` as soon as some
    /// neighbour's domain is wiped out.
    ///
    /// Each probe rebuilds the hypothetical assignment from scratch; the
    /// constraints see exactly the same shape of query as at assignment
    /// time.
    pub fn forward_check(
        &mut self,
        var: VariableId,
        value: &V,
        assignment: &Assignment<V>,
        log: &mut RemovalLog<V>,
        depth: usize,
        stats: &mut SearchStats,
    ) -> bool {
        let constraint_ids: Vec<ConstraintId> = self.constraints_on(var).to_vec();
        for constraint_id in constraint_ids {
            let scope: Vec<VariableId> = self.constraints[constraint_id].scope().to_vec();
            for neighbour in scope {
                if neighbour == var || assignment.contains(neighbour) {
                    continue;
                }
                let candidates: Vec<V> =
                    self.domains.current(neighbour).iter().cloned().collect();
                for neighbour_value in candidates {
                    let hypothetical = assignment
                        .set(neighbour, neighbour_value.clone())
                        .set(var, value.clone());
                    let entry = stats.constraint_stats.entry(constraint_id).or_default();
                    entry.checks += 1;
                    if !self.constraints[constraint_id].check(&hypothetical) {
                        self.domains.remove(neighbour, &neighbour_value, log);
                        entry.prunings += 1;
                    }
                }
                if self.domains.current(neighbour).is_empty() {
                    trace(
                        depth,
                        format_args!("Failure: domain wiped out for ?{neighbour}"),
                    );
                    stats.wipeouts += 1;
                    return false;
                }
            }
        }
        true
    }

    /// Replays a removal log, reinstating every pruned value.
    pub fn restore_domains(&mut self, log: RemovalLog<V>) {
        self.domains.restore(log);
    }

    /// The recursive search. `assignment` carries the choices committed so
    /// far; `depth` only feeds the diagnostic trace indentation.
    ///
    /// Every candidate value goes through a consistency pre-check, then a
    /// narrowing of the chosen variable's domain plus a forward-checking
    /// pass, both logged in one removal log per frame. A branch that fails
    /// restores the log and moves to the next value; a branch that succeeds
    /// propagates the solution upward untouched, since the whole stack is
    /// unwinding with a definitive result.
    pub fn backtrack(
        &mut self,
        assignment: Assignment<V>,
        depth: usize,
        stats: &mut SearchStats,
    ) -> Result<Option<Assignment<V>>> {
        stats.nodes_visited += 1;

        if assignment.len() == self.variable_count() {
            return Ok(Some(assignment));
        }

        let var = self.select_unassigned_variable(&assignment)?;
        trace(depth, format_args!("Selecting variable ?{var}"));

        for value in self.order_domain_values(var, &assignment) {
            trace(depth, format_args!("Trying ?{var} = {value:?}"));
            if self.is_consistent(var, &value, &assignment) {
                let extended = assignment.set(var, value.clone());
                let mut removals = RemovalLog::new();
                self.domains.narrow(var, &value, &mut removals);

                if self.forward_check(var, &value, &extended, &mut removals, depth, stats) {
                    if let Some(hook) = &self.observer {
                        hook(&extended);
                    }
                    if let Some(solution) = self.backtrack(extended, depth + 1, stats)? {
                        return Ok(Some(solution));
                    }
                }

                self.domains.restore(removals);
            } else {
                trace(depth, format_args!("?{var} = {value:?} is inconsistent"));
            }
        }

        trace(depth, format_args!("Backtracking from variable ?{var}"));
        stats.backtracks += 1;
        Ok(None)
    }

    /// Runs the search from `initial_assignment` (empty for a fresh
    /// problem; for pre-seeded variables, [`Csp::pin`] each one first).
    /// `Ok((None, _))` means the space was exhausted without a complete
    /// consistent assignment — an outcome, not an error.
    pub fn solve(
        &mut self,
        initial_assignment: Assignment<V>,
    ) -> Result<(Option<Assignment<V>>, SearchStats)> {
        let mut stats = SearchStats::default();
        let solution = self.backtrack(initial_assignment, 0, &mut stats)?;
        Ok((solution, stats))
    }
}
