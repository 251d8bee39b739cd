// interview-scheduler: Fellowship Interview Scheduler
//
// SPDX-FileCopyrightText: 2026 gurkab
// SPDX-License-Identifier: GPL-3.0-or-later

//! Residual flow network with breadth-first augmenting paths (Edmonds-Karp).
//!
//! ```text
//! add_edge(u, v, c)  pushes   edges[2k]   = u -> v, residual c
//!                             edges[2k+1] = v -> u, residual 0
//! augment(f)         edges[e].residual -= f, edges[e ^ 1].residual += f
//! flow(2k)           edges[2k+1].residual
//! ```

use std::collections::VecDeque;

/// Handle to a forward edge returned by [`FlowNetwork::add_edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId(usize);

#[derive(Debug, Clone)]
struct Edge {
    to: usize,
    residual: u32,
}

/// Directed graph with integer capacities.
#[derive(Debug, Clone, Default)]
pub struct FlowNetwork {
    edges: Vec<Edge>,
    adjacency: Vec<Vec<usize>>,
}

impl FlowNetwork {
    /// Creates a network with `nodes` nodes numbered `0..nodes` and no edges.
    #[must_use]
    pub fn new(nodes: usize) -> Self {
        Self {
            edges: Vec::new(),
            adjacency: vec![Vec::new(); nodes],
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of forward edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    /// Adds a directed edge and its zero-capacity reverse edge.
    ///
    /// # Panics
    ///
    /// Panics if `from` or `to` is not a node of this network.
    pub fn add_edge(&mut self, from: usize, to: usize, capacity: u32) -> EdgeId {
        assert!(
            from < self.node_count() && to < self.node_count(),
            "edge {from} -> {to} outside network of {} nodes",
            self.node_count()
        );
        let id = self.edges.len();
        self.edges.push(Edge {
            to,
            residual: capacity,
        });
        self.edges.push(Edge {
            to: from,
            residual: 0,
        });
        self.adjacency[from].push(id);
        self.adjacency[to].push(id + 1);
        EdgeId(id)
    }

    /// Flow currently pushed through a forward edge.
    #[must_use]
    pub fn flow(&self, edge: EdgeId) -> u32 {
        self.edges[edge.0 ^ 1].residual
    }

    /// Pushes as much flow as possible from `source` to `sink` and returns the
    /// amount added by this call.
    ///
    /// Calling it again on a saturated network returns `0`.
    pub fn max_flow(&mut self, source: usize, sink: usize) -> u32 {
        if source == sink {
            return 0;
        }

        let mut total = 0;
        while let Some(path) = self.augmenting_path(source, sink) {
            let bottleneck = path
                .iter()
                .map(|&e| self.edges[e].residual)
                .min()
                .unwrap_or(0);
            if bottleneck == 0 {
                break;
            }
            for &e in &path {
                self.edges[e].residual -= bottleneck;
                self.edges[e ^ 1].residual += bottleneck;
            }
            tracing::trace!(hops = path.len(), bottleneck, "augmented");
            total += bottleneck;
        }
        total
    }

    /// Shortest path of edges with residual capacity, as edge indices from
    /// `source` to `sink`.
    fn augmenting_path(&self, source: usize, sink: usize) -> Option<Vec<usize>> {
        let mut via: Vec<Option<usize>> = vec![None; self.node_count()];
        let mut visited = vec![false; self.node_count()];
        let mut queue = VecDeque::from([source]);
        visited[source] = true;

        while let Some(node) = queue.pop_front() {
            for &e in &self.adjacency[node] {
                let edge = &self.edges[e];
                if visited[edge.to] || edge.residual == 0 {
                    continue;
                }
                visited[edge.to] = true;
                via[edge.to] = Some(e);
                if edge.to == sink {
                    return Some(self.trace_back(&via, source, sink));
                }
                queue.push_back(edge.to);
            }
        }
        None
    }

    fn trace_back(&self, via: &[Option<usize>], source: usize, sink: usize) -> Vec<usize> {
        let mut path = Vec::new();
        let mut node = sink;
        while node != source {
            let Some(e) = via[node] else { break };
            path.push(e);
            // the reverse edge points back at the tail
            node = self.edges[e ^ 1].to;
        }
        path.reverse();
        path
    }
}
