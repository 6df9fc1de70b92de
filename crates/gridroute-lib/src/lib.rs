//! gridroute library entry points.
//!
//! This crate exposes helpers to locate and load a region-tagged graph file,
//! build the graph in memory, and run uniform-cost or A* search over it.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod graph;
pub mod heuristic;
pub mod loader;
pub mod output;
pub mod path;
pub mod routing;

pub use dataset::{resolve_graph_path, GRAPH_ENV_VAR};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Region, Vertex, VertexId, Weight};
pub use heuristic::{Heuristic, RegionGridHeuristic, ZeroHeuristic};
pub use loader::{load_problem, parse_problem, RouteProblem};
pub use output::{RouteRenderMode, RouteSummary, NO_SOLUTION};
pub use path::{search, search_with_heuristic, SearchMode, SearchOutcome};
pub use routing::{
    plan_route, select_planner, AStarPlanner, RoutePlan, RoutePlanner, RouteRequest,
    SearchAlgorithm, UniformCostPlanner,
};
