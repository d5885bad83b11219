pub mod assignment;
pub mod problem;
pub mod varisat;

pub use assignment::Assignment;
pub use problem::{ProblemStats, TwoSatProblem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Sat(Assignment),
    /// Unsatisfiable; `var` and its negation share a component.
    Unsat { var: u32 },
}

impl Outcome {
    pub fn is_sat(&self) -> bool {
        matches!(self, Outcome::Sat(_))
    }
}
