//! Priority-frontier search shared by uniform-cost and A* routing.
//!
//! Both modes run the same loop: pop the cheapest frontier entry, finalise
//! its vertex, stop at the goal, otherwise push every neighbour that is not
//! yet finalised. They differ only in the priority given to a pushed entry:
//! the backward cost `g` for uniform-cost search, `g + h` for A*.
//!
//! Frontier ties are broken by priority, then by the lower vertex id, then
//! by discovery order, so results are deterministic regardless of hash map
//! iteration order.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::graph::{Graph, VertexId, Weight};
use crate::heuristic::{Heuristic, RegionGridHeuristic};

/// Whether a search is guided by a heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Expand purely by accumulated cost.
    Uninformed,
    /// Expand by accumulated cost plus the region-grid estimate.
    Guided,
}

/// Result of a single search invocation.
///
/// An empty `path` means the goal is unreachable; `cost` is then `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub path: Vec<VertexId>,
    pub cost: Weight,
    /// Number of distinct vertices finalised before the search stopped.
    pub expanded: usize,
}

impl SearchOutcome {
    fn not_found(expanded: usize) -> Self {
        Self {
            path: Vec::new(),
            cost: 0,
            expanded,
        }
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Run a search in the given mode, using the default region grid for guided search.
pub fn search(graph: &Graph, source: VertexId, goal: VertexId, mode: SearchMode) -> SearchOutcome {
    match mode {
        SearchMode::Uninformed => search_with_heuristic(graph, source, goal, None),
        SearchMode::Guided => {
            let heuristic = RegionGridHeuristic::default();
            search_with_heuristic(graph, source, goal, Some(&heuristic as &dyn Heuristic))
        }
    }
}

/// Run a search, adding `heuristic`'s estimate to frontier priorities when present.
///
/// The source is queued with priority `0` and no estimate. Each pushed entry
/// carries its true backward cost alongside the priority, so the cost returned
/// on success never depends on subtracting the estimate back out.
pub fn search_with_heuristic(
    graph: &Graph,
    source: VertexId,
    goal: VertexId,
    heuristic: Option<&dyn Heuristic>,
) -> SearchOutcome {
    let mut closed: HashSet<VertexId> = HashSet::new();
    let mut parents: HashMap<VertexId, Option<VertexId>> = HashMap::new();
    let mut queue = BinaryHeap::new();
    let mut sequence: u64 = 0;

    queue.push(FrontierEntry {
        priority: FloatOrd(0.0),
        node: source,
        cost: 0,
        sequence,
        parent: None,
    });

    while let Some(entry) = queue.pop() {
        // Stale duplicate of an already finalised vertex.
        if !closed.insert(entry.node) {
            continue;
        }
        parents.insert(entry.node, entry.parent);

        if entry.node == goal {
            let outcome = SearchOutcome {
                path: reconstruct_path(&parents, source, goal),
                cost: entry.cost,
                expanded: closed.len(),
            };
            debug!(
                guided = heuristic.is_some(),
                expanded = outcome.expanded,
                cost = outcome.cost,
                "search reached goal"
            );
            return outcome;
        }

        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            if closed.contains(&next) {
                continue;
            }

            // Clamps at `Weight::MAX`; the engine has no error path for overflow.
            let cost = entry.cost.saturating_add(edge.weight);
            let estimate = heuristic.map_or(0.0, |h| h.estimate(graph, next, goal));
            sequence += 1;
            queue.push(FrontierEntry {
                priority: FloatOrd(cost as f64 + estimate),
                node: next,
                cost,
                sequence,
                parent: Some(entry.node),
            });
        }
    }

    debug!(
        guided = heuristic.is_some(),
        expanded = closed.len(),
        "frontier exhausted without reaching goal"
    );
    SearchOutcome::not_found(closed.len())
}

fn reconstruct_path(
    parents: &HashMap<VertexId, Option<VertexId>>,
    start: VertexId,
    goal: VertexId,
) -> Vec<VertexId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(&node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug)]
struct FrontierEntry {
    priority: FloatOrd,
    node: VertexId,
    cost: Weight,
    sequence: u64,
    parent: Option<VertexId>,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by priority.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.node.cmp(&self.node))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
