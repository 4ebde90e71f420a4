//! In-memory undirected multigraph built once from an edge list and then
//! shared read-only between the analyzers.
//!
//! Vertices are identified externally by [`VertexId`] and internally by a dense
//! [`VID`] assigned in first-insertion order. That order is the stable order in
//! which every deterministic output (DOT export, per-vertex iteration) walks the
//! graph.
//!
//! The structure is deliberately permissive: parallel edges are stored as many
//! times as they are inserted and a self-loop contributes two adjacency entries
//! to its vertex, so it counts twice towards the degree.
//!
//! # Examples
//!
//! ```rust
//! use graphmetrics::prelude::*;
//!
//! let mut g = Graph::new();
//! g.add_edge(1, 2);
//! g.add_edge(2, 3);
//!
//! assert_eq!(g.count_vertices(), 3);
//! assert_eq!(g.count_edges(), 2);
//! assert!(g.has_edge(3, 2));
//! ```
use crate::core::entities::{VertexId, VID};
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Clone, Debug, Default)]
pub struct Graph {
    logical_to_physical: FxHashMap<VertexId, VID>,
    /// External id of every vertex, indexed by `VID`.
    ids: Vec<VertexId>,
    /// Adjacency multiset, indexed by `VID`.
    adj: Vec<Vec<VID>>,
    /// Edge multiset in insertion order.
    edges: Vec<(VID, VID)>,
    /// Normalised `(min, max)` pairs for constant-time edge lookups.
    edge_index: FxHashSet<(VID, VID)>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            logical_to_physical: FxHashMap::with_capacity_and_hasher(vertices, Default::default()),
            ids: Vec::with_capacity(vertices),
            adj: Vec::with_capacity(vertices),
            edges: Vec::new(),
            edge_index: FxHashSet::default(),
        }
    }

    /// Build a graph from `(src, dst)` pairs, in order.
    pub fn from_edges<I: IntoIterator<Item = (VertexId, VertexId)>>(edges: I) -> Self {
        let mut g = Self::new();
        for (src, dst) in edges {
            g.add_edge(src, dst);
        }
        g
    }

    /// Add a vertex, returning its physical id. Adding an existing vertex is a no-op.
    pub fn add_vertex(&mut self, id: VertexId) -> VID {
        if let Some(vid) = self.logical_to_physical.get(&id) {
            return *vid;
        }
        let vid = VID(self.ids.len());
        self.ids.push(id);
        self.adj.push(Vec::new());
        self.logical_to_physical.insert(id, vid);
        vid
    }

    /// Add an undirected edge, inserting missing endpoints first.
    pub fn add_edge(&mut self, src: VertexId, dst: VertexId) {
        let src = self.add_vertex(src);
        let dst = self.add_vertex(dst);
        self.adj[src.index()].push(dst);
        self.adj[dst.index()].push(src);
        self.edges.push((src, dst));
        self.edge_index.insert(normalise(src, dst));
    }

    #[inline]
    pub fn count_vertices(&self) -> usize {
        self.ids.len()
    }

    /// Number of edges, parallel edges counted individually.
    #[inline]
    pub fn count_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn has_vertex(&self, id: VertexId) -> bool {
        self.logical_to_physical.contains_key(&id)
    }

    /// Physical id of an external vertex id.
    pub fn vid(&self, id: VertexId) -> Option<VID> {
        self.logical_to_physical.get(&id).copied()
    }

    /// External id of a physical vertex.
    pub fn vertex_id(&self, vid: VID) -> Option<VertexId> {
        self.ids.get(vid.index()).copied()
    }

    /// External ids in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        self.ids.iter().copied()
    }

    /// Physical ids in insertion order.
    pub fn vids(&self) -> impl ExactSizeIterator<Item = VID> + Clone {
        (0..self.ids.len()).map(VID)
    }

    /// Adjacency multiset of `vid`; empty for an unknown vertex.
    #[inline]
    pub fn neighbours(&self, vid: VID) -> &[VID] {
        self.adj.get(vid.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of adjacency entries of `vid` (self-loops count twice).
    #[inline]
    pub fn degree(&self, vid: VID) -> usize {
        self.neighbours(vid).len()
    }

    /// Whether at least one edge joins the two external ids, in either direction.
    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        match (self.vid(a), self.vid(b)) {
            (Some(a), Some(b)) => self.has_edge_vid(a, b),
            _ => false,
        }
    }

    #[inline]
    pub fn has_edge_vid(&self, a: VID, b: VID) -> bool {
        self.edge_index.contains(&normalise(a, b))
    }

    /// Edge multiset as external id pairs, in insertion order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = (VertexId, VertexId)> + '_ {
        self.edges
            .iter()
            .map(|(src, dst)| (self.ids[src.index()], self.ids[dst.index()]))
    }

    pub(crate) fn edge_vids(&self) -> &[(VID, VID)] {
        &self.edges
    }
}

#[inline]
fn normalise(a: VID, b: VID) -> (VID, VID) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
