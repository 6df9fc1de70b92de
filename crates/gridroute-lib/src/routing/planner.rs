//! Route planning strategies implementing the Strategy pattern.
//!
//! This module provides the `RoutePlanner` trait and one implementation per
//! search algorithm, so `plan_route` never branches on the algorithm itself.

use crate::graph::{Graph, VertexId};
use crate::heuristic::{Heuristic, RegionGridHeuristic};
use crate::path::{search_with_heuristic, SearchOutcome};

use super::{RouteRequest, SearchAlgorithm};

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> SearchAlgorithm;

    /// Execute the search on the given graph.
    fn find_path(&self, graph: &Graph, source: VertexId, goal: VertexId) -> SearchOutcome;
}

/// Uniform-cost planner: expands strictly by accumulated edge weight.
#[derive(Debug, Clone, Default)]
pub struct UniformCostPlanner;

impl RoutePlanner for UniformCostPlanner {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::UniformCost
    }

    fn find_path(&self, graph: &Graph, source: VertexId, goal: VertexId) -> SearchOutcome {
        search_with_heuristic(graph, source, goal, None)
    }
}

/// A* planner, generic over the distance estimate it adds to priorities.
///
/// Optimality holds only while the heuristic never overestimates the
/// remaining cost.
#[derive(Debug, Clone, Default)]
pub struct AStarPlanner<H = RegionGridHeuristic> {
    heuristic: H,
}

impl<H: Heuristic> AStarPlanner<H> {
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }
}

impl<H: Heuristic> RoutePlanner for AStarPlanner<H> {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::AStar
    }

    fn find_path(&self, graph: &Graph, source: VertexId, goal: VertexId) -> SearchOutcome {
        search_with_heuristic(graph, source, goal, Some(&self.heuristic as &dyn Heuristic))
    }
}

/// Select the appropriate planner for a given request.
pub fn select_planner(request: &RouteRequest) -> Box<dyn RoutePlanner> {
    match request.algorithm {
        SearchAlgorithm::UniformCost => Box::new(UniformCostPlanner),
        SearchAlgorithm::AStar => Box::new(AStarPlanner::new(request.heuristic)),
    }
}
