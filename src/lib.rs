//! 2-SAT by strongly connected components of the implication graph.

pub mod cnf;
pub mod error;
pub mod graph;
pub mod scc;
pub mod solver;

pub use error::{Error, Result};
pub use solver::{Assignment, Outcome, TwoSatProblem};
