use std::collections::{HashMap, VecDeque};

use tracing::trace;

use super::{FlightNetwork, VertexId};

/// Result of a breadth-first walk: visitation order and the parent tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Traversal {
    pub order: Vec<String>,
    parents: HashMap<String, String>,
}

impl Traversal {
    pub fn start(&self) -> Option<&str> {
        self.order.first().map(String::as_str)
    }

    pub fn parent(&self, city: &str) -> Option<&str> {
        self.parents.get(city).map(String::as_str)
    }

    pub fn reached(&self, city: &str) -> bool {
        self.order.iter().any(|c| c == city)
    }

    /// Hop path from the start to `city` following parent links.
    pub fn path_to(&self, city: &str) -> Option<Vec<String>> {
        if !self.reached(city) {
            return None;
        }
        let mut path = vec![city.to_string()];
        let mut current = city;
        while let Some(parent) = self.parent(current) {
            path.push(parent.to_string());
            current = parent;
        }
        path.reverse();
        Some(path)
    }

    /// Parent links as `(parent, child)` pairs, in visitation order.
    pub fn tree_edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.order
            .iter()
            .filter_map(|child| self.parent(child).map(|p| (p, child.as_str())))
    }
}

pub(super) fn walk(g: &FlightNetwork, start: VertexId) -> Traversal {
    let mut visited = vec![false; g.len()];
    let mut parent: Vec<Option<VertexId>> = vec![None; g.len()];
    let mut q: VecDeque<VertexId> = VecDeque::new();
    let mut order = Vec::new();

    visited[start] = true;
    q.push_back(start);

    while let Some(u) = q.pop_front() {
        for edge in g.edges_of(u) {
            let v = edge.target();
            if !visited[v] {
                visited[v] = true;
                parent[v] = Some(u);
                q.push_back(v);
            }
        }
        trace!(city = g.name_of(u), "visited");
        order.push(u);
    }

    let parents = order
        .iter()
        .filter_map(|&v| parent[v].map(|p| (g.name_of(v).to_string(), g.name_of(p).to_string())))
        .collect();

    Traversal {
        order: order.iter().map(|&v| g.name_of(v).to_string()).collect(),
        parents,
    }
}
