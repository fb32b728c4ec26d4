//! Colouring the Australian map: no two adjacent regions share a colour.

use crate::{
    error::Result,
    solver::{
        constraints::not_equal::NotEqualConstraint,
        engine::{Csp, VariableId},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    Red,
    Green,
    Blue,
}

pub const WA: VariableId = 0;
pub const NT: VariableId = 1;
pub const SA: VariableId = 2;
pub const Q: VariableId = 3;
pub const NSW: VariableId = 4;
pub const V: VariableId = 5;
pub const T: VariableId = 6;

pub const REGION_COUNT: usize = 7;

pub fn adjacencies() -> Vec<(VariableId, VariableId)> {
    vec![
        (WA, NT),
        (WA, SA),
        (NT, SA),
        (NT, Q),
        (SA, Q),
        (SA, NSW),
        (SA, V),
        (Q, NSW),
        (NSW, V),
    ]
}

pub fn build_csp() -> Result<Csp<Colour>> {
    let palette = vec![Colour::Red, Colour::Green, Colour::Blue];
    let mut csp = Csp::new(vec![palette; REGION_COUNT]);
    for (a, b) in adjacencies() {
        csp.add_constraint(Box::new(NotEqualConstraint::new(a, b)))?;
    }
    Ok(csp)
}
