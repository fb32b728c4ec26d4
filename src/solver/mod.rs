pub mod assignment;
pub mod constraint;
pub mod constraints;
pub mod domain;
pub mod engine;
pub mod heuristics;
pub mod stats;
pub mod value;
