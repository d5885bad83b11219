use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::cnf::lit::Lit;
use crate::graph::ImplicationGraph;

const UNVISITED: u32 = u32::MAX;

/// Strongly connected components in the order Tarjan's algorithm closes them,
/// which is a reverse topological order of the condensation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SccPartition {
    components: Vec<Vec<Lit>>,
    by_lit: IndexMap<Lit, u32>,
}

impl SccPartition {
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn components(&self) -> &[Vec<Lit>] {
        &self.components
    }

    pub fn component(&self, idx: usize) -> &[Lit] {
        &self.components[idx]
    }

    pub fn component_of(&self, lit: Lit) -> Option<usize> {
        self.by_lit.get(&lit).map(|&c| c as usize)
    }

    pub fn largest(&self) -> usize {
        self.components.iter().map(Vec::len).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: u32,
    edge: usize,
}

struct Tarjan<'g> {
    graph: &'g ImplicationGraph,
    index: Vec<u32>,
    low: Vec<u32>,
    on_stack: Vec<bool>,
    stack: Vec<u32>,
    frames: Vec<Frame>,
    next_index: u32,
    out: SccPartition,
}

impl<'g> Tarjan<'g> {
    fn new(graph: &'g ImplicationGraph) -> Self {
        let n = graph.num_vertices();
        Self {
            graph,
            index: vec![UNVISITED; n],
            low: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            frames: Vec::new(),
            next_index: 0,
            out: SccPartition::default(),
        }
    }

    fn enter(&mut self, v: u32) {
        let pos = v as usize;
        self.stack.push(v);
        self.on_stack[pos] = true;
        self.index[pos] = self.next_index;
        self.low[pos] = self.next_index;
        self.next_index += 1;
        self.frames.push(Frame { vertex: v, edge: 0 });
    }

    fn visit(&mut self, root: u32) {
        let graph = self.graph;
        self.enter(root);

        while let Some(frame) = self.frames.last_mut() {
            let v = frame.vertex as usize;
            let succ = graph.successors(frame.vertex);

            if frame.edge < succ.len() {
                let to = succ[frame.edge] as usize;
                if self.index[to] == UNVISITED {
                    // the same edge is looked at again once the child closes
                    self.enter(to as u32);
                    continue;
                }
                frame.edge += 1;
                // a visited vertex off the stack sits in a closed component
                if self.on_stack[to] {
                    self.low[v] = self.low[v].min(self.low[to]);
                }
                continue;
            }

            self.frames.pop();
            if self.index[v] == self.low[v] {
                self.close(v as u32);
            }
        }
    }

    fn close(&mut self, root: u32) {
        let comp_id = self.out.components.len() as u32;
        let mut component = Vec::new();
        while let Some(w) = self.stack.pop() {
            self.on_stack[w as usize] = false;
            let lit = self.graph.lit(w);
            component.push(lit);
            self.out.by_lit.insert(lit, comp_id);
            if w == root {
                break;
            }
        }
        self.out.components.push(component);
    }
}

pub fn find_sccs(graph: &ImplicationGraph) -> SccPartition {
    let mut tarjan = Tarjan::new(graph);
    for v in 0..graph.num_vertices() as u32 {
        if tarjan.index[v as usize] == UNVISITED {
            tarjan.visit(v);
        }
    }
    debug!(
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        components = tarjan.out.len(),
        "tarjan finished"
    );
    tarjan.out
}

/// Edges of the component DAG, indexed by source component.
pub fn condensation(graph: &ImplicationGraph, sccs: &SccPartition) -> Vec<IndexSet<u32>> {
    let mut dag = vec![IndexSet::<u32>::new(); sccs.len()];
    for (from, to) in graph.edges() {
        let (Some(cf), Some(ct)) = (sccs.component_of(from), sccs.component_of(to)) else {
            panic!("edge {} -> {} has an endpoint outside the partition", from, to);
        };
        if cf != ct {
            dag[cf].insert(ct as u32);
        }
    }
    dag
}
