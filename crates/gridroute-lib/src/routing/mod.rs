//! Route planning over a loaded [`Graph`].
//!
//! This module provides:
//! - [`SearchAlgorithm`] - Supported search strategies (uniform-cost, A*)
//! - [`RouteRequest`] - Source, goal and strategy for one query
//! - [`RoutePlan`] - Planned route result, including the expansion count
//! - [`plan_route`] - Main entry point for computing routes
//!
//! # Strategy Pattern
//!
//! Each algorithm is wrapped in a [`RoutePlanner`] implementation so the
//! orchestration in [`plan_route`] does not depend on which search runs.
//!
//! # Example
//!
//! ```ignore
//! use gridroute_lib::{load_problem, plan_route, RouteRequest};
//!
//! let problem = load_problem("graph.txt")?;
//! let request = RouteRequest::a_star(problem.source, problem.goal);
//! let plan = plan_route(&problem.graph, &request)?;
//! println!("cost {} after expanding {}", plan.cost, plan.expanded);
//! ```

mod planner;

pub use planner::{select_planner, AStarPlanner, RoutePlanner, UniformCostPlanner};

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId, Weight};
use crate::heuristic::RegionGridHeuristic;

/// Supported search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SearchAlgorithm {
    /// Uniform-cost search (uninformed, ordered by accumulated cost).
    #[serde(rename = "ucs")]
    UniformCost,
    /// A* search (guided by the region-grid heuristic).
    #[serde(rename = "a-star")]
    AStar,
}

impl SearchAlgorithm {
    /// Both algorithms in the order the driver reports them.
    pub const ALL: [SearchAlgorithm; 2] = [SearchAlgorithm::UniformCost, SearchAlgorithm::AStar];

    /// Human-readable heading used in text output.
    pub fn label(self) -> &'static str {
        match self {
            SearchAlgorithm::UniformCost => "Uniform Cost Search",
            SearchAlgorithm::AStar => "A* Search",
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SearchAlgorithm::UniformCost => "ucs",
            SearchAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub source: VertexId,
    pub goal: VertexId,
    pub algorithm: SearchAlgorithm,
    /// Grid layout used by A*. Ignored by uniform-cost search.
    pub heuristic: RegionGridHeuristic,
}

impl RouteRequest {
    pub fn new(source: VertexId, goal: VertexId, algorithm: SearchAlgorithm) -> Self {
        Self {
            source,
            goal,
            algorithm,
            heuristic: RegionGridHeuristic::default(),
        }
    }

    /// Convenience constructor for uniform-cost routes.
    pub fn uniform_cost(source: VertexId, goal: VertexId) -> Self {
        Self::new(source, goal, SearchAlgorithm::UniformCost)
    }

    /// Convenience constructor for A* routes on the default 10-column grid.
    pub fn a_star(source: VertexId, goal: VertexId) -> Self {
        Self::new(source, goal, SearchAlgorithm::AStar)
    }

    /// Replace the grid layout used by A*.
    pub fn with_heuristic(mut self, heuristic: RegionGridHeuristic) -> Self {
        self.heuristic = heuristic;
        self
    }
}

/// Planned route returned by the library.
///
/// `steps` is empty when the goal is unreachable; `cost` is then `0` and
/// `expanded` counts the vertices finalised before the frontier ran dry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub algorithm: SearchAlgorithm,
    pub source: VertexId,
    pub goal: VertexId,
    pub steps: Vec<VertexId>,
    pub cost: Weight,
    pub expanded: usize,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn is_found(&self) -> bool {
        !self.steps.is_empty()
    }
}

fn resolve_vertex(graph: &Graph, id: VertexId) -> Result<VertexId> {
    if graph.contains(id) {
        Ok(id)
    } else {
        Err(Error::UnknownVertex { id })
    }
}

/// Compute a route using the requested algorithm.
///
/// Unknown endpoints are rejected before searching. An unreachable goal is
/// not an error: it produces a plan with no steps.
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let source = resolve_vertex(graph, request.source)?;
    let goal = resolve_vertex(graph, request.goal)?;

    let planner = select_planner(request);
    let outcome = planner.find_path(graph, source, goal);

    debug!(
        algorithm = %request.algorithm,
        source,
        goal,
        found = outcome.is_found(),
        "planned route"
    );

    Ok(RoutePlan {
        algorithm: planner.algorithm(),
        source,
        goal,
        steps: outcome.path,
        cost: outcome.cost,
        expanded: outcome.expanded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_vertex(1, 0).unwrap();
        graph.add_vertex(2, 1).unwrap();
        graph.add_vertex(3, 11).unwrap();
        graph.add_edge(1, 2, 50).unwrap();
        graph.add_edge(2, 3, 50).unwrap();
        graph
    }

    #[test]
    fn route_plan_hop_count() {
        let plan = RoutePlan {
            algorithm: SearchAlgorithm::UniformCost,
            source: 1,
            goal: 3,
            steps: vec![1, 2, 3],
            cost: 100,
            expanded: 3,
        };
        assert_eq!(plan.hop_count(), 2);
        assert!(plan.is_found());
    }

    #[test]
    fn route_plan_empty_hop_count() {
        let plan = RoutePlan {
            algorithm: SearchAlgorithm::AStar,
            source: 1,
            goal: 9,
            steps: vec![],
            cost: 0,
            expanded: 4,
        };
        assert_eq!(plan.hop_count(), 0);
        assert!(!plan.is_found());
    }

    #[test]
    fn unknown_goal_is_rejected() {
        let graph = line_graph();
        let error = plan_route(&graph, &RouteRequest::a_star(1, 99)).expect_err("unknown goal");
        assert!(matches!(error, Error::UnknownVertex { id: 99 }));
    }

    #[test]
    fn algorithm_display_and_label() {
        assert_eq!(SearchAlgorithm::UniformCost.to_string(), "ucs");
        assert_eq!(SearchAlgorithm::AStar.to_string(), "a-star");
        assert_eq!(SearchAlgorithm::AStar.label(), "A* Search");
    }

    #[test]
    fn plan_route_reports_expansion_count() {
        let graph = line_graph();
        let plan = plan_route(&graph, &RouteRequest::uniform_cost(1, 3)).expect("route exists");
        assert_eq!(plan.steps, vec![1, 2, 3]);
        assert_eq!(plan.cost, 100);
        assert_eq!(plan.expanded, 3);
    }

    #[test]
    fn a_star_plan_uses_the_request_heuristic() {
        let mut graph = Graph::new();
        for (id, region) in [(1, 0), (2, 9), (3, 0)] {
            graph.add_vertex(id, region).unwrap();
        }
        graph.add_edge(1, 2, 1).unwrap();
        graph.add_edge(2, 3, 1).unwrap();
        graph.add_edge(1, 3, 500).unwrap();

        let guided = plan_route(&graph, &RouteRequest::a_star(1, 3)).unwrap();
        assert_eq!((guided.cost, guided.expanded), (500, 2));

        let flat = RegionGridHeuristic::new(10, 0.0).unwrap();
        let request = RouteRequest::a_star(1, 3).with_heuristic(flat);
        let unguided = plan_route(&graph, &request).unwrap();
        assert_eq!(unguided.algorithm, SearchAlgorithm::AStar);
        assert_eq!(unguided.steps, vec![1, 2, 3]);
        assert_eq!(unguided.cost, 2);
    }
}
