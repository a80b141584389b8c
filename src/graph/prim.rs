use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use itertools::Itertools;
use tracing::debug;

use super::{Edge, FlightNetwork, VertexId};

/// Frontier entry: the `slot`-th flight of city `from`. Ordered so the
/// max-heap pops the lightest flight, earliest pushed first on ties.
#[derive(Copy, Clone, Eq, PartialEq)]
struct Candidate {
    weight: u64,
    seq: usize,
    from: VertexId,
    slot: usize,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Flights chosen by Prim's algorithm, in the order they joined the tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpanningTree {
    edges: Vec<Edge>,
}

impl SpanningTree {
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn total_weight(&self) -> u64 {
        self.edges
            .iter()
            .fold(0u64, |acc, e| acc.saturating_add(e.weight))
    }

    /// Whether the tree reaches every city of `g`.
    pub fn spans_all(&self, g: &FlightNetwork) -> bool {
        self.edges.len() + 1 == g.len()
    }
}

impl fmt::Display for SpanningTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.edges.iter().join(", "))
    }
}

impl<'a> IntoIterator for &'a SpanningTree {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

struct Frontier {
    heap: BinaryHeap<Candidate>,
    seq: usize,
}

impl Frontier {
    fn push_from(&mut self, g: &FlightNetwork, from: VertexId, in_tree: &[bool]) {
        for (slot, edge) in g.edges_of(from).iter().enumerate() {
            if in_tree[edge.target()] {
                continue;
            }
            self.heap.push(Candidate {
                weight: edge.weight,
                seq: self.seq,
                from,
                slot,
            });
            self.seq += 1;
        }
    }
}

pub(super) fn grow(g: &FlightNetwork, start: VertexId) -> SpanningTree {
    let mut in_tree = vec![false; g.len()];
    let mut frontier = Frontier {
        heap: BinaryHeap::new(),
        seq: 0,
    };
    let mut edges = Vec::new();

    in_tree[start] = true;
    frontier.push_from(g, start, &in_tree);

    while let Some(Candidate { from, slot, .. }) = frontier.heap.pop() {
        let edge = &g.edges_of(from)[slot];
        let v = edge.target();
        // stale: destination joined the tree after this flight was pushed
        if in_tree[v] {
            continue;
        }
        in_tree[v] = true;
        edges.push(edge.clone());
        frontier.push_from(g, v, &in_tree);
    }

    let tree = SpanningTree { edges };
    if !tree.spans_all(g) {
        debug!(
            start = g.name_of(start),
            reached = tree.len() + 1,
            cities = g.len(),
            "network is disconnected, tree covers the start component only"
        );
    }
    tree
}
