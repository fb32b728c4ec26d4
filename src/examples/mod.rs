//! Worked problem frontends built on the generic solver.

pub mod map_colouring;
pub mod sudoku;
