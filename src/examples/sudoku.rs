//! A 4x4 sudoku frontend: the classic showcase for the backtracking engine.
//!
//! Cells are named `X{row}{col}` with row and col in `1..=4`, declared in
//! row-major order. Every cell ranges over `1..=4`; each row, each column,
//! and each 2x2 block carries a not-equal constraint per pair of cells.

use crate::{
    error::Result,
    solver::{
        assignment::Assignment,
        constraints::not_equal::NotEqualConstraint,
        engine::{Csp, VariableId},
    },
};

pub const GRID: usize = 4;
pub const BLOCK: usize = 2;

/// The variable id of the cell at 1-based `(row, col)`.
pub fn cell(row: usize, col: usize) -> VariableId {
    ((row - 1) * GRID + (col - 1)) as VariableId
}

/// The `X{row}{col}` display name of a cell.
pub fn cell_name(var: VariableId) -> String {
    let row = var as usize / GRID + 1;
    let col = var as usize % GRID + 1;
    format!("X{}{}", row, col)
}

fn add_pairwise_not_equal(csp: &mut Csp<i64>, unit: &[VariableId]) -> Result<()> {
    for (i, &a) in unit.iter().enumerate() {
        for &b in &unit[i + 1..] {
            csp.add_constraint(Box::new(NotEqualConstraint::new(a, b)))?;
        }
    }
    Ok(())
}

/// Builds the empty 4x4 grid with all row, column, and block constraints.
pub fn build_csp() -> Result<Csp<i64>> {
    let domains = vec![(1..=GRID as i64).collect(); GRID * GRID];
    let mut csp = Csp::new(domains);

    for row in 1..=GRID {
        let unit: Vec<VariableId> = (1..=GRID).map(|col| cell(row, col)).collect();
        add_pairwise_not_equal(&mut csp, &unit)?;
    }

    for col in 1..=GRID {
        let unit: Vec<VariableId> = (1..=GRID).map(|row| cell(row, col)).collect();
        add_pairwise_not_equal(&mut csp, &unit)?;
    }

    for block_row in (1..=GRID).step_by(BLOCK) {
        for block_col in (1..=GRID).step_by(BLOCK) {
            let unit: Vec<VariableId> = (0..BLOCK)
                .flat_map(|dr| (0..BLOCK).map(move |dc| cell(block_row + dr, block_col + dc)))
                .collect();
            add_pairwise_not_equal(&mut csp, &unit)?;
        }
    }

    Ok(csp)
}

/// Pins each given cell's current domain to its value and returns the
/// matching initial assignment, ready to hand to [`Csp::solve`].
pub fn seed_givens(
    csp: &mut Csp<i64>,
    givens: &[(usize, usize, i64)],
) -> Result<Assignment<i64>> {
    let mut assignment = Assignment::new();
    for &(row, col, value) in givens {
        let var = cell(row, col);
        csp.pin(var, value)?;
        assignment = assignment.set(var, value);
    }
    Ok(assignment)
}

/// Renders the grid, one row per line, `_` for unassigned cells.
pub fn render(assignment: &Assignment<i64>) -> String {
    let mut out = String::new();
    for row in 1..=GRID {
        let line: Vec<String> = (1..=GRID)
            .map(|col| match assignment.get(cell(row, col)) {
                Some(value) => value.to_string(),
                None => "_".to_string(),
            })
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}
