use indexmap::IndexMap;

use crate::cnf::lit::Lit;

/// Immutable CSR snapshot of the implication graph. Vertex ids are dense and
/// follow the order in which literals were first seen by the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplicationGraph {
    ids: IndexMap<Lit, u32>,
    offsets: Vec<usize>,
    targets: Vec<u32>,
}

impl ImplicationGraph {
    pub(crate) fn from_parts(ids: IndexMap<Lit, u32>, offsets: Vec<usize>, targets: Vec<u32>) -> Self {
        debug_assert_eq!(offsets.len(), ids.len() + 1);
        Self {
            ids,
            offsets,
            targets,
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.ids.len()
    }

    pub fn num_edges(&self) -> usize {
        self.targets.len()
    }

    pub fn lit(&self, id: u32) -> Lit {
        match self.ids.get_index(id as usize) {
            Some((&lit, _)) => lit,
            None => panic!("vertex {} is not in the implication graph", id),
        }
    }

    pub fn vertex_of(&self, lit: Lit) -> Option<u32> {
        self.ids.get(&lit).copied()
    }

    pub fn successors(&self, id: u32) -> &[u32] {
        let pos = id as usize;
        &self.targets[self.offsets[pos]..self.offsets[pos + 1]]
    }

    pub fn lits(&self) -> impl Iterator<Item = Lit> + '_ {
        self.ids.keys().copied()
    }

    pub fn edges(&self) -> impl Iterator<Item = (Lit, Lit)> + '_ {
        (0..self.num_vertices() as u32).flat_map(move |from| {
            self.successors(from)
                .iter()
                .map(move |&to| (self.lit(from), self.lit(to)))
        })
    }
}
