use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::cnf::dimacs::ClauseFile;
use crate::cnf::lit::eval_clause;
use crate::error::{Error, Result};
use crate::graph::{GraphBuilder, ImplicationGraph};
use crate::scc::{SccPartition, find_sccs};

use super::Outcome;
use super::assignment::Assignment;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProblemStats {
    pub num_literals: usize,
    pub num_implications: usize,
    pub num_clauses: usize,
    pub max_var: u32,
}

#[derive(Debug, Clone)]
struct Solved {
    graph: ImplicationGraph,
    sccs: SccPartition,
}

/// A 2-SAT formula under construction plus the cached solve of its current
/// clause set. Inserting a clause drops the frozen snapshot.
#[derive(Debug, Clone, Default)]
pub struct TwoSatProblem {
    builder: GraphBuilder,
    solved: Option<Solved>,
}

impl TwoSatProblem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a problem from a parsed clause file. Clauses with a zero half
    /// are skipped with a warning; preamble counts are only compared and logged.
    pub fn from_clause_file(file: &ClauseFile) -> Self {
        let mut problem = Self::new();
        let mut skipped = 0usize;
        for &(a, b) in &file.clauses {
            match problem.insert_clause(a, b) {
                Ok(()) => {}
                Err(e) => {
                    warn!("skipping clause: {}", e);
                    skipped += 1;
                }
            }
        }

        let stats = problem.stats();
        if let Some(vars) = file.declared_vars {
            if vars != stats.max_var {
                info!(declared = vars, seen = stats.max_var, "variable count differs from preamble");
            }
        }
        if let Some(clauses) = file.declared_clauses {
            if clauses != stats.num_clauses {
                info!(declared = clauses, seen = stats.num_clauses, "clause count differs from preamble");
            }
        }
        debug!(clauses = stats.num_clauses, skipped, "clause file loaded");
        problem
    }

    pub fn insert_clause(&mut self, a: i32, b: i32) -> Result<()> {
        self.builder.insert_clause(a, b)?;
        self.solved = None;
        Ok(())
    }

    pub fn builder(&self) -> &GraphBuilder {
        &self.builder
    }

    pub fn stats(&self) -> ProblemStats {
        ProblemStats {
            num_literals: self.builder.num_literals(),
            num_implications: self.builder.num_implications(),
            num_clauses: self.builder.num_clauses(),
            max_var: self.builder.max_var(),
        }
    }

    fn solved(&mut self) -> &Solved {
        let builder = &self.builder;
        self.solved.get_or_insert_with(|| {
            let graph = builder.freeze();
            let sccs = find_sccs(&graph);
            Solved { graph, sccs }
        })
    }

    pub fn graph(&mut self) -> &ImplicationGraph {
        &self.solved().graph
    }

    pub fn solve(&mut self) -> &SccPartition {
        &self.solved().sccs
    }

    /// First variable whose two literals share a component, in emission order.
    pub fn conflicting_var(&mut self) -> Option<u32> {
        let sccs = self.solve();
        for (idx, component) in sccs.components().iter().enumerate() {
            for &lit in component {
                if sccs.component_of(lit.neg()) == Some(idx) {
                    return Some(lit.var);
                }
            }
        }
        None
    }

    pub fn is_satisfiable(&mut self) -> bool {
        self.conflicting_var().is_none()
    }

    pub fn find_solution(&mut self) -> Option<Assignment> {
        if !self.is_satisfiable() {
            return None;
        }
        Some(self.resolve())
    }

    pub fn outcome(&mut self) -> Outcome {
        if let Some(var) = self.conflicting_var() {
            return Outcome::Unsat { var };
        }
        Outcome::Sat(self.resolve())
    }

    // caller has already ruled out a conflicting component
    fn resolve(&mut self) -> Assignment {
        let num_vars = self.builder.max_var();
        let sccs = self.solve();

        // components arrive in reverse topological order; first writer wins
        let mut values = IndexMap::<u32, bool>::with_capacity(sccs.len() / 2);
        for component in sccs.components() {
            let Some(rep) = component.first() else {
                continue;
            };
            if values.contains_key(&rep.var) {
                continue;
            }
            for &lit in component {
                values.insert(lit.var, lit.sign);
            }
        }

        let assignment = Assignment::new(values, num_vars);
        debug_assert!(self.check(&assignment));
        assignment
    }

    /// True when every inserted clause holds under `assignment`.
    pub fn check(&self, assignment: &Assignment) -> bool {
        self.builder
            .clauses()
            .iter()
            .all(|&clause| eval_clause(clause, assignment))
    }
}

impl TryFrom<&[(i32, i32)]> for TwoSatProblem {
    type Error = Error;

    fn try_from(clauses: &[(i32, i32)]) -> Result<Self> {
        let mut problem = Self::new();
        for &(a, b) in clauses {
            problem.insert_clause(a, b)?;
        }
        Ok(problem)
    }
}
