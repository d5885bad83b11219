use indexmap::{IndexMap, IndexSet};

use crate::cnf::lit::{Clause, Lit, clause_from_dimacs};
use crate::error::Result;

use super::implication::ImplicationGraph;

/// Mutable side of the implication graph. Every literal touched by a clause
/// gets a vertex together with its negation, so sinks are always present.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    ids: IndexMap<Lit, u32>,
    adj: Vec<IndexSet<u32>>,
    clauses: Vec<Clause>,
    num_implications: usize,
    max_var: u32,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_clause(&mut self, a: i32, b: i32) -> Result<Clause> {
        // validate both halves before touching the graph
        let (la, lb) = clause_from_dimacs(a, b)?;

        let va = self.vertex(la);
        let na = self.vertex(la.neg());
        let vb = self.vertex(lb);
        let nb = self.vertex(lb.neg());

        // (a | b) == (!a -> b) == (!b -> a)
        self.adj[na as usize].insert(vb);
        self.adj[nb as usize].insert(va);
        self.num_implications += 2;

        self.clauses.push((la, lb));
        self.max_var = self.max_var.max(la.var).max(lb.var);
        Ok((la, lb))
    }

    fn vertex(&mut self, lit: Lit) -> u32 {
        if let Some(&id) = self.ids.get(&lit) {
            return id;
        }
        let id = self.adj.len() as u32;
        self.ids.insert(lit, id);
        self.adj.push(IndexSet::new());
        id
    }

    pub fn num_literals(&self) -> usize {
        self.ids.len()
    }

    pub fn num_implications(&self) -> usize {
        self.num_implications
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub fn max_var(&self) -> u32 {
        self.max_var
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn contains(&self, lit: Lit) -> bool {
        self.ids.contains_key(&lit)
    }

    pub fn freeze(&self) -> ImplicationGraph {
        let mut offsets = Vec::with_capacity(self.adj.len() + 1);
        let mut targets = Vec::with_capacity(self.adj.iter().map(|s| s.len()).sum());
        offsets.push(0);
        for succ in &self.adj {
            targets.extend(succ.iter().copied());
            offsets.push(targets.len());
        }
        ImplicationGraph::from_parts(self.ids.clone(), offsets, targets)
    }
}
