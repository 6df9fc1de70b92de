use std::collections::HashMap;

use serde::Serialize;

use crate::error::{Error, Result};

/// Numeric identifier for a vertex.
pub type VertexId = i64;

/// Index of the coarse grid cell a vertex lies in.
pub type Region = u32;

/// Non-negative edge length.
pub type Weight = u64;

/// Edge within the graph, stored on both endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub target: VertexId,
    pub weight: Weight,
}

/// A vertex with its region tag and incident edges in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub id: VertexId,
    pub region: Region,
    edges: Vec<Edge>,
}

impl Vertex {
    fn new(id: VertexId, region: Region) -> Self {
        Self {
            id,
            region,
            edges: Vec::new(),
        }
    }

    /// Incident edges in the order they were added.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Write-once, read-many undirected graph used by the search engine.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: HashMap<VertexId, Vertex>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: HashMap::with_capacity(capacity),
        }
    }

    /// Insert a vertex with an empty adjacency list.
    pub fn add_vertex(&mut self, id: VertexId, region: Region) -> Result<()> {
        if self.vertices.contains_key(&id) {
            return Err(Error::DuplicateVertex { id });
        }
        self.vertices.insert(id, Vertex::new(id, region));
        Ok(())
    }

    /// Insert an undirected edge, appending it to both endpoints' adjacency lists.
    ///
    /// Both endpoints must already exist. A self-loop is recorded twice on the
    /// same vertex.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId, weight: Weight) -> Result<()> {
        for id in [a, b] {
            if !self.vertices.contains_key(&id) {
                return Err(Error::UnknownVertex { id });
            }
        }

        if let Some(vertex) = self.vertices.get_mut(&a) {
            vertex.edges.push(Edge { target: b, weight });
        }
        if let Some(vertex) = self.vertices.get_mut(&b) {
            vertex.edges.push(Edge { target: a, weight });
        }
        Ok(())
    }

    /// Return the neighbours for a given vertex identifier.
    pub fn neighbours(&self, id: VertexId) -> &[Edge] {
        self.vertices
            .get(&id)
            .map(|vertex| vertex.edges.as_slice())
            .unwrap_or(&[])
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// Region tag of a vertex, if it exists.
    pub fn region(&self, id: VertexId) -> Option<Region> {
        self.vertices.get(&id).map(|vertex| vertex.region)
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of undirected edges (each stored twice in adjacency lists).
    pub fn edge_count(&self) -> usize {
        let half_edges: usize = self.vertices.values().map(|v| v.edges.len()).sum();
        half_edges / 2
    }

    /// All vertex identifiers in ascending order.
    pub fn vertex_ids(&self) -> Vec<VertexId> {
        let mut ids: Vec<VertexId> = self.vertices.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
