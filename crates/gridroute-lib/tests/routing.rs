mod common;

use gridroute_lib::{
    load_problem, plan_route, Error, RegionGridHeuristic, RouteRequest, SearchAlgorithm,
};

use common::fixture_path;

#[test]
fn uniform_cost_route_plan_succeeds() {
    let problem = load_problem(fixture_path("three_regions.txt")).expect("fixture loads");
    let request = RouteRequest::uniform_cost(problem.source, problem.goal);
    let plan = plan_route(&problem.graph, &request).expect("route exists");

    assert_eq!(plan.algorithm, SearchAlgorithm::UniformCost);
    assert_eq!(plan.source, 1);
    assert_eq!(plan.goal, 3);
    assert_eq!(plan.steps, vec![1, 2, 3]);
    assert_eq!(plan.hop_count(), 2);
    assert_eq!(plan.cost, 100);
    assert_eq!(plan.expanded, 3);
}

#[test]
fn a_star_route_plan_succeeds() {
    let problem = load_problem(fixture_path("corridor.txt")).expect("fixture loads");
    let request = RouteRequest::a_star(problem.source, problem.goal);
    let plan = plan_route(&problem.graph, &request).expect("route exists");

    assert_eq!(plan.algorithm, SearchAlgorithm::AStar);
    assert_eq!(plan.cost, 400);
    assert_eq!(plan.expanded, 5);
}

#[test]
fn unreachable_goal_is_not_an_error() {
    let problem = load_problem(fixture_path("disconnected.txt")).expect("fixture loads");
    for algorithm in SearchAlgorithm::ALL {
        let request = RouteRequest::new(problem.source, problem.goal, algorithm);
        let plan = plan_route(&problem.graph, &request).expect("plan without route");
        assert!(!plan.is_found());
        assert_eq!(plan.cost, 0);
        assert_eq!(plan.expanded, 3);
    }
}

#[test]
fn unknown_source_is_rejected() {
    let problem = load_problem(fixture_path("three_regions.txt")).expect("fixture loads");
    let error = plan_route(&problem.graph, &RouteRequest::uniform_cost(404, 3))
        .expect_err("unknown source");
    assert!(matches!(error, Error::UnknownVertex { id: 404 }));
    assert_eq!(format!("{error}"), "unknown vertex 404");
}

#[test]
fn zero_cell_size_disables_guidance_without_changing_cost() {
    let problem = load_problem(fixture_path("corridor.txt")).expect("fixture loads");
    let flat = RegionGridHeuristic::new(10, 0.0).expect("valid config");
    let request = RouteRequest::a_star(problem.source, problem.goal).with_heuristic(flat);
    let plan = plan_route(&problem.graph, &request).expect("route exists");

    // A zero cell size degrades A* to uniform-cost expansion.
    assert_eq!(plan.cost, 400);
    assert_eq!(plan.expanded, 8);
}
