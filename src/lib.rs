//! Resilio is a generic, reusable constraint satisfaction problem (CSP)
//! solver built around backtracking search with forward checking.
//!
//! The engine is problem-agnostic: a caller declares variables with finite
//! ordered domains, registers arbitrary n-ary constraints over them, and
//! asks for a complete consistent assignment. The search is deterministic
//! for the deterministic heuristics, and each dead-end rolls its domain
//! prunings back from a removal log before the next value is tried.
//!
//! # Core Concepts
//!
//! - **[`Csp`]**: the problem container and search engine — variables,
//!   domains, constraints, and the backtracking loop.
//! - **[`Constraint`]**: a rule over a subset of variables, checked lazily
//!   against partial assignments. The crate ships standard constraints like
//!   [`NotEqualConstraint`] and [`AllDifferentConstraint`], plus a
//!   closure-backed [`PredicateConstraint`] for everything else.
//! - **Heuristics**: pluggable variable-selection (declaration order,
//!   minimum remaining values, degree) and value-ordering (identity, least
//!   constraining value) strategies.
//! - **Observation hook**: an optional callback fired on every committed
//!   extension of the assignment, for tracing and visualization.
//!
//! [`Csp`]: solver::engine::Csp
//! [`Constraint`]: solver::constraint::Constraint
//! [`NotEqualConstraint`]: solver::constraints::not_equal::NotEqualConstraint
//! [`AllDifferentConstraint`]: solver::constraints::all_different::AllDifferentConstraint
//! [`PredicateConstraint`]: solver::constraints::predicate::PredicateConstraint
//!
//! # Example: A Simple 2-Variable Problem
//!
//! Solving `?0 != ?1` where `?0` can be `1` or `2` and `?1` can only be
//! `1`. The solver deduces that `?0` must be `2`.
//!
//! ```
//! use resilio::solver::assignment::Assignment;
//! use resilio::solver::constraints::not_equal::NotEqualConstraint;
//! use resilio::solver::engine::Csp;
//!
//! let mut csp: Csp<i64> = Csp::new(vec![vec![1, 2], vec![1]]);
//! csp.add_constraint(Box::new(NotEqualConstraint::new(0, 1))).unwrap();
//!
//! let (solution, stats) = csp.solve(Assignment::new()).unwrap();
//! let solution = solution.unwrap();
//!
//! assert_eq!(solution.get(0), Some(&2));
//! assert_eq!(solution.get(1), Some(&1));
//! assert!(stats.nodes_visited > 0);
//! ```
pub mod error;
pub mod examples;
pub mod solver;
