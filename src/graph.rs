//! Undirected graph over an adjacency-list map.
//!
//! Vertices map to an ordered list of neighbors; every edge is stored
//! symmetrically in both endpoints' lists. Parallel edges are allowed and
//! kept in insertion order. Traversals use explicit work containers: DFS a
//! LIFO stack (so each batch of neighbors is visited in reverse push
//! order), BFS a FIFO queue (so adjacency order is respected directly).

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// Adjacency-list graph with undirected edges.
///
/// # Examples
///
/// ```
/// use dsakit::UndirectedGraph;
///
/// let mut graph = UndirectedGraph::new();
/// graph.add_edge("a", "b");
/// graph.add_edge("b", "c");
///
/// assert_eq!(graph.bfs(&"a"), vec!["a", "b", "c"]);
/// assert_eq!(graph.neighbors(&"b"), Some(&vec!["a", "c"]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph<V> {
    adjacency: HashMap<V, Vec<V>>,
}

impl<V: Eq + Hash + Clone> UndirectedGraph<V> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Build a graph from `(u, v)` edge pairs, creating vertices as needed.
    pub fn from_edge_list<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    // ========================================================================
    // MUTATION
    // ========================================================================

    /// Add a vertex with no edges. A no-op if the vertex already exists.
    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Connect two vertices, creating either endpoint if missing.
    ///
    /// Calling this twice for the same pair stores a parallel edge; no
    /// deduplication happens.
    pub fn add_edge(&mut self, u: V, v: V) {
        self.adjacency
            .entry(u.clone())
            .or_default()
            .push(v.clone());
        self.adjacency.entry(v).or_default().push(u);
    }

    /// Disconnect two vertices, removing every parallel edge between them.
    pub fn remove_edge(&mut self, u: &V, v: &V) {
        if let Some(neighbors) = self.adjacency.get_mut(u) {
            neighbors.retain(|n| n != v);
        }
        if let Some(neighbors) = self.adjacency.get_mut(v) {
            neighbors.retain(|n| n != u);
        }
    }

    /// Remove a vertex along with every edge touching it.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        if self.adjacency.remove(vertex).is_none() {
            return false;
        }
        for neighbors in self.adjacency.values_mut() {
            neighbors.retain(|n| n != vertex);
        }
        true
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Neighbors of a vertex in edge insertion order.
    pub fn neighbors(&self, vertex: &V) -> Option<&Vec<V>> {
        self.adjacency.get(vertex)
    }

    /// Returns true if the vertex exists.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    // ========================================================================
    // TRAVERSALS
    // ========================================================================

    /// Depth-first traversal from `start` using an explicit stack.
    ///
    /// Each vertex appears exactly once. Neighbors are pushed in adjacency
    /// order, so a batch of fresh neighbors is visited in reverse of that
    /// order. An unknown start vertex yields an empty traversal.
    pub fn dfs(&self, start: &V) -> Vec<V> {
        if !self.adjacency.contains_key(start) {
            return Vec::new();
        }
        let mut visited = HashSet::new();
        visited.insert(start.clone());
        let mut stack = vec![start.clone()];
        let mut order = Vec::new();

        while let Some(current) = stack.pop() {
            if let Some(neighbors) = self.adjacency.get(&current) {
                for neighbor in neighbors {
                    if visited.insert(neighbor.clone()) {
                        stack.push(neighbor.clone());
                    }
                }
            }
            order.push(current);
        }
        order
    }

    /// Breadth-first traversal from `start` using an explicit queue.
    ///
    /// Each vertex appears exactly once, in adjacency-list order per level.
    /// An unknown start vertex yields an empty traversal.
    pub fn bfs(&self, start: &V) -> Vec<V> {
        if !self.adjacency.contains_key(start) {
            return Vec::new();
        }
        let mut visited = HashSet::new();
        visited.insert(start.clone());
        let mut queue = VecDeque::from([start.clone()]);
        let mut order = Vec::new();

        while let Some(current) = queue.pop_front() {
            if let Some(neighbors) = self.adjacency.get(&current) {
                for neighbor in neighbors {
                    if visited.insert(neighbor.clone()) {
                        queue.push_back(neighbor.clone());
                    }
                }
            }
            order.push(current);
        }
        order
    }
}
