use std::backtrace::Backtrace;

use crate::solver::engine::VariableId;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Misuse conditions surfaced by the solver. Search outcomes (a rejected
/// value, an exhausted search) are not errors; only broken call contracts
/// are.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("constraint references undeclared variable ?{0}")]
    UnknownVariable(VariableId),
    #[error("value is not in the original domain of ?{0}")]
    ValueOutsideDomain(VariableId),
    #[error("current domain of ?{0} is empty")]
    EmptyDomain(VariableId),
    #[error("no unassigned variable to select")]
    NoUnassignedVariable,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<SolverError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<SolverError> for Error {
    fn from(inner: SolverError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
