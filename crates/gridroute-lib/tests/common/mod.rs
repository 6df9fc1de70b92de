//! Common test utilities and fixture helpers.
//!
//! Provides fixture paths, a small graph builder, proptest strategies for
//! random graphs, and an exhaustive shortest-path oracle.

use std::collections::HashSet;
use std::path::PathBuf;

use gridroute_lib::{Graph, Region, VertexId, Weight};
use proptest::prelude::*;

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Build a graph from vertex and edge tuples, panicking on malformed input.
#[allow(dead_code)]
pub fn build(vertices: &[(VertexId, Region)], edges: &[(VertexId, VertexId, Weight)]) -> Graph {
    let mut graph = Graph::with_capacity(vertices.len());
    for &(id, region) in vertices {
        graph.add_vertex(id, region).expect("unique vertex");
    }
    for &(a, b, weight) in edges {
        graph.add_edge(a, b, weight).expect("known endpoints");
    }
    graph
}

/// Vertices `1..=n` with regions in the 10x10 grid, plus a source and goal.
///
/// Edge weights are arbitrary in `0..400`, so the region estimate may
/// overestimate and A* is not guaranteed to find the cheapest path.
#[allow(dead_code)]
pub fn arbitrary_problem(
    max_vertices: usize,
    max_edges: usize,
) -> impl Strategy<Value = (Graph, VertexId, VertexId)> {
    problem_strategy(max_vertices, max_edges, |_, _, extra| extra)
}

/// Like [`arbitrary_problem`], but each edge is at least as long as the
/// Manhattan distance between its regions' cells plus one cell diagonal, so
/// the region-grid estimate is consistent and A* must agree with
/// uniform-cost search.
#[allow(dead_code)]
pub fn consistent_problem(
    max_vertices: usize,
    max_edges: usize,
) -> impl Strategy<Value = (Graph, VertexId, VertexId)> {
    problem_strategy(max_vertices, max_edges, |a, b, extra| {
        manhattan_cells(a, b) * 100 + 150 + extra % 150
    })
}

#[allow(dead_code)]
fn problem_strategy(
    max_vertices: usize,
    max_edges: usize,
    weigh: fn(Region, Region, Weight) -> Weight,
) -> impl Strategy<Value = (Graph, VertexId, VertexId)> {
    (1..=max_vertices)
        .prop_flat_map(move |n| {
            (
                prop::collection::vec(0..100 as Region, n),
                prop::collection::vec((0..n, 0..n, 0..400 as Weight), 0..=max_edges),
                0..n,
                0..n,
            )
        })
        .prop_map(move |(regions, edges, source, goal)| {
            let mut graph = Graph::with_capacity(regions.len());
            for (index, &region) in regions.iter().enumerate() {
                graph
                    .add_vertex(index as VertexId + 1, region)
                    .expect("unique vertex");
            }
            for (a, b, extra) in edges {
                let weight = weigh(regions[a], regions[b], extra);
                graph
                    .add_edge(a as VertexId + 1, b as VertexId + 1, weight)
                    .expect("known endpoints");
            }
            (graph, source as VertexId + 1, goal as VertexId + 1)
        })
}

#[allow(dead_code)]
fn manhattan_cells(a: Region, b: Region) -> Weight {
    let (ar, ac) = (a / 10, a % 10);
    let (br, bc) = (b / 10, b % 10);
    u64::from(ar.abs_diff(br) + ac.abs_diff(bc))
}

/// Minimum cost over every simple path from `source` to `goal`, by exhaustive DFS.
#[allow(dead_code)]
pub fn brute_force_cost(graph: &Graph, source: VertexId, goal: VertexId) -> Option<Weight> {
    fn walk(
        graph: &Graph,
        node: VertexId,
        goal: VertexId,
        cost: Weight,
        visited: &mut HashSet<VertexId>,
        best: &mut Option<Weight>,
    ) {
        if node == goal {
            *best = Some(best.map_or(cost, |b| b.min(cost)));
            return;
        }
        for edge in graph.neighbours(node) {
            if visited.insert(edge.target) {
                walk(graph, edge.target, goal, cost + edge.weight, visited, best);
                visited.remove(&edge.target);
            }
        }
    }

    let mut visited = HashSet::from([source]);
    let mut best = None;
    walk(graph, source, goal, 0, &mut visited, &mut best);
    best
}

/// Number of vertices reachable from `source`, including itself.
#[allow(dead_code)]
pub fn component_size(graph: &Graph, source: VertexId) -> usize {
    let mut seen = HashSet::from([source]);
    let mut stack = vec![source];
    while let Some(node) = stack.pop() {
        for edge in graph.neighbours(node) {
            if seen.insert(edge.target) {
                stack.push(edge.target);
            }
        }
    }
    seen.len()
}
