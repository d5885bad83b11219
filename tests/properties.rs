use proptest::prelude::*;

use twosat::TwoSatProblem;
use twosat::graph::ImplicationGraph;
use twosat::scc::find_sccs;
use twosat::solver::varisat::varisat_is_sat;

const MAX_VARS: i32 = 6;

fn lit_strategy() -> impl Strategy<Value = i32> {
    (1..=MAX_VARS, any::<bool>()).prop_map(|(v, pos)| if pos { v } else { -v })
}

fn clauses_strategy() -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec((lit_strategy(), lit_strategy()), 0..24)
}

fn reachable(graph: &ImplicationGraph, from: u32) -> Vec<bool> {
    let mut seen = vec![false; graph.num_vertices()];
    let mut stack = vec![from];
    while let Some(v) = stack.pop() {
        if seen[v as usize] {
            continue;
        }
        seen[v as usize] = true;
        stack.extend_from_slice(graph.successors(v));
    }
    seen
}

fn brute_force_sat(clauses: &[(i32, i32)]) -> bool {
    let holds = |lit: i32, mask: u32| {
        let value = mask & (1 << (lit.unsigned_abs() - 1)) != 0;
        if lit > 0 { value } else { !value }
    };
    (0..1u32 << MAX_VARS).any(|mask| {
        clauses
            .iter()
            .all(|&(a, b)| holds(a, mask) || holds(b, mask))
    })
}

fn build(clauses: &[(i32, i32)]) -> TwoSatProblem {
    match TwoSatProblem::try_from(clauses) {
        Ok(v) => v,
        Err(e) => panic!("insert failed: {e}"),
    }
}

proptest! {
    #[test]
    fn components_partition_the_vertices(clauses in clauses_strategy()) {
        let mut problem = build(&clauses);
        let graph = problem.graph().clone();
        let sccs = problem.solve();

        let mut hits = vec![0usize; graph.num_vertices()];
        for component in sccs.components() {
            for &lit in component {
                let id = graph.vertex_of(lit).expect("component literal is a vertex");
                hits[id as usize] += 1;
            }
        }
        prop_assert!(hits.iter().all(|&h| h == 1));
    }

    #[test]
    fn components_match_mutual_reachability(clauses in clauses_strategy()) {
        let mut problem = build(&clauses);
        let graph = problem.graph().clone();
        let sccs = problem.solve();

        let reach = (0..graph.num_vertices() as u32)
            .map(|v| reachable(&graph, v))
            .collect::<Vec<_>>();
        for u in 0..graph.num_vertices() {
            for v in 0..graph.num_vertices() {
                let mutual = reach[u][v] && reach[v][u];
                let cu = sccs.component_of(graph.lit(u as u32));
                let cv = sccs.component_of(graph.lit(v as u32));
                prop_assert_eq!(mutual, cu == cv);
            }
        }
    }

    #[test]
    fn every_literal_has_its_negation(clauses in clauses_strategy()) {
        let mut problem = build(&clauses);
        let graph = problem.graph();
        for lit in graph.lits() {
            prop_assert!(graph.vertex_of(lit.neg()).is_some());
        }
    }

    #[test]
    fn decision_matches_brute_force_and_varisat(clauses in clauses_strategy()) {
        let mut problem = build(&clauses);
        let expected = brute_force_sat(&clauses);
        prop_assert_eq!(problem.is_satisfiable(), expected);

        let oracle = varisat_is_sat(problem.builder().clauses()).expect("varisat");
        prop_assert_eq!(oracle, expected);
    }

    #[test]
    fn model_satisfies_every_clause(clauses in clauses_strategy()) {
        let mut problem = build(&clauses);
        match problem.find_solution() {
            Some(assignment) => {
                for &(a, b) in &clauses {
                    let value = |lit: i32| {
                        let v = assignment.value(lit.unsigned_abs()).expect("var in model");
                        if lit > 0 { v } else { !v }
                    };
                    prop_assert!(value(a) || value(b));
                }
            }
            None => prop_assert!(!brute_force_sat(&clauses)),
        }
    }

    #[test]
    fn resolve_is_stable_until_insert(
        clauses in clauses_strategy(),
        extra in (lit_strategy(), lit_strategy()),
    ) {
        let mut problem = build(&clauses);
        let first = problem.solve().clone();
        prop_assert_eq!(problem.solve(), &first);

        let vertices_before = problem.graph().num_vertices();
        problem.insert_clause(extra.0, extra.1).expect("insert");
        let graph = problem.graph().clone();
        prop_assert_eq!(problem.solve(), &find_sccs(&graph));
        if graph.num_vertices() != vertices_before {
            prop_assert_ne!(problem.solve(), &first);
        }
    }
}
