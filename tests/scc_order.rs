use twosat::TwoSatProblem;
use twosat::cnf::lit::Lit;
use twosat::scc::{condensation, find_sccs};

fn problem_from(clauses: &[(i32, i32)]) -> TwoSatProblem {
    match TwoSatProblem::try_from(clauses) {
        Ok(v) => v,
        Err(e) => panic!("insert failed: {e}"),
    }
}

#[test]
fn isolated_literals_close_as_singletons() {
    // (1 | 1) gives -1 -> 1 and nothing else
    let mut problem = problem_from(&[(1, 1)]);
    let sccs = problem.solve().clone();
    assert_eq!(sccs.len(), 2);
    assert!(sccs.components().iter().all(|c| c.len() == 1));

    // the sink closes before the literal that implies it
    let pos = sccs.component_of(Lit::new(1, true)).expect("1");
    let neg = sccs.component_of(Lit::new(1, false)).expect("-1");
    assert!(pos < neg);
}

#[test]
fn equivalence_cycle_is_one_component() {
    // 1 <-> 2 <-> 3
    let mut problem = problem_from(&[(-1, 2), (-2, 3), (-3, 1)]);
    let sccs = problem.solve().clone();
    assert_eq!(sccs.len(), 2);
    let c = sccs.component_of(Lit::new(1, true)).expect("1");
    assert_eq!(sccs.component_of(Lit::new(2, true)), Some(c));
    assert_eq!(sccs.component_of(Lit::new(3, true)), Some(c));
    assert_eq!(sccs.component(c).len(), 3);
    assert_ne!(sccs.component_of(Lit::new(1, false)), Some(c));
}

#[test]
fn condensation_edges_point_to_earlier_components() {
    let clauses = [(-1, 2), (-2, 3), (-3, 4), (-4, 2), (5, -3), (-5, 6), (1, 6)];
    let mut problem = problem_from(&clauses);
    let graph = problem.graph().clone();
    let sccs = find_sccs(&graph);
    let dag = condensation(&graph, &sccs);
    for (from, succ) in dag.iter().enumerate() {
        for &to in succ {
            assert!((to as usize) < from, "edge {} -> {} breaks emission order", from, to);
        }
    }
}

#[test]
fn engine_is_deterministic_over_the_same_snapshot() {
    let mut problem = problem_from(&[(1, 2), (-2, 3), (-3, -1), (4, -1)]);
    let graph = problem.graph().clone();
    assert_eq!(find_sccs(&graph), find_sccs(&graph));
    assert_eq!(&find_sccs(&graph), problem.solve());
}
