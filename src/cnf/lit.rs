use crate::error::{Error, Result};
use crate::solver::Assignment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lit {
    pub var: u32,
    pub sign: bool,
}

pub type Clause = (Lit, Lit);

impl Lit {
    pub fn new(var: u32, sign: bool) -> Self {
        Self { var, sign }
    }

    pub fn neg(self) -> Self {
        Self {
            var: self.var,
            sign: !self.sign,
        }
    }

    pub fn from_dimacs(value: i32) -> Option<Self> {
        if value == 0 {
            return None;
        }
        Some(Self::new(value.unsigned_abs(), value > 0))
    }

    pub fn to_dimacs(self) -> i64 {
        let v = self.var as i64;
        if self.sign { v } else { -v }
    }

    pub fn eval(self, assignment: &Assignment) -> Option<bool> {
        assignment
            .value(self.var)
            .map(|v| if self.sign { v } else { !v })
    }
}

impl std::fmt::Display for Lit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_dimacs())
    }
}

pub fn clause_from_dimacs(a: i32, b: i32) -> Result<Clause> {
    match (Lit::from_dimacs(a), Lit::from_dimacs(b)) {
        (Some(la), Some(lb)) => Ok((la, lb)),
        _ => Err(Error::InvalidLiteral { a, b }),
    }
}

pub fn eval_clause(clause: Clause, assignment: &Assignment) -> bool {
    clause.0.eval(assignment) == Some(true) || clause.1.eval(assignment) == Some(true)
}
