use std::collections::HashMap;

use prettytable::{Cell, Row, Table};
use serde::Serialize;

use crate::solver::{constraint::Constraint, engine::ConstraintId, value::ValueEquality};

/// Forward-checking workload attributed to a single constraint.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PerConstraintStats {
    /// Hypothetical-assignment probes evaluated against the constraint.
    pub checks: u64,
    /// Values pruned from neighbour domains on its behalf.
    pub prunings: u64,
}

/// Counters accumulated over one `solve` call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchStats {
    /// Search-tree nodes entered (one per `backtrack` frame).
    pub nodes_visited: u64,
    /// Dead-ends that returned control to a parent frame.
    pub backtracks: u64,
    /// Forward-checking passes aborted by an emptied domain.
    pub wipeouts: u64,
    pub constraint_stats: HashMap<ConstraintId, PerConstraintStats>,
}

/// Renders the per-constraint counters as a text table, one row per
/// registered constraint that did any work.
pub fn render_stats_table<V: ValueEquality>(
    stats: &SearchStats,
    constraints: &[Box<dyn Constraint<V>>],
) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Constraint Type"),
        Cell::new("ID"),
        Cell::new("Description"),
        Cell::new("Checks"),
        Cell::new("Prunings"),
    ]));

    let mut sorted_stats: Vec<(&ConstraintId, &PerConstraintStats)> =
        stats.constraint_stats.iter().collect();
    sorted_stats.sort_by_key(|(id, _)| **id);

    for (constraint_id, constraint_stats) in sorted_stats {
        let descriptor = constraints[*constraint_id].descriptor();
        table.add_row(Row::new(vec![
            Cell::new(&descriptor.name),
            Cell::new(&constraint_id.to_string()),
            Cell::new(&descriptor.description),
            Cell::new(&constraint_stats.checks.to_string()),
            Cell::new(&constraint_stats.prunings.to_string()),
        ]));
    }

    table.to_string()
}
