use anyhow::{Result, anyhow};
use varisat::ExtendFormula;

use crate::cnf::lit::{Clause, Lit};

/// Reference CDCL solver used to cross-check SCC results.
pub struct VarisatOracle {
    inner: varisat::Solver<'static>,
    max_var: u32,
}

impl VarisatOracle {
    pub fn new() -> Self {
        Self {
            inner: varisat::Solver::new(),
            max_var: 0,
        }
    }

    fn to_lit(lit: Lit) -> varisat::Lit {
        varisat::Lit::from_dimacs(lit.to_dimacs() as isize)
    }

    pub fn add_clause(&mut self, clause: Clause) {
        self.max_var = self.max_var.max(clause.0.var).max(clause.1.var);
        self.inner
            .add_clause(&[Self::to_lit(clause.0), Self::to_lit(clause.1)]);
    }

    /// Model over `1..=max_var` when satisfiable.
    pub fn solve(&mut self) -> Result<Option<Vec<bool>>> {
        let sat = self
            .inner
            .solve()
            .map_err(|e| anyhow!("varisat failed: {:?}", e))?;
        if !sat {
            return Ok(None);
        }
        let lits = self
            .inner
            .model()
            .ok_or_else(|| anyhow!("varisat reported sat without a model"))?;
        let mut model = vec![false; self.max_var as usize + 1];
        for lit in lits {
            let var = lit.var().to_dimacs() as usize;
            if var < model.len() {
                model[var] = lit.is_positive();
            }
        }
        Ok(Some(model))
    }
}

impl Default for VarisatOracle {
    fn default() -> Self {
        Self::new()
    }
}

pub fn varisat_is_sat(clauses: &[Clause]) -> Result<bool> {
    let mut oracle = VarisatOracle::new();
    for &clause in clauses {
        oracle.add_clause(clause);
    }
    Ok(oracle.solve()?.is_some())
}
