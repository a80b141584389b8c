//! Flight network store and the queries answered over it.
//!
//! Cities are kept in first-reference order next to a name index. Every
//! undirected flight is stored as two mirrored [`Edge`] records, one on each
//! endpoint. Queries that name an unknown city create it, so they take
//! `&mut self`.

mod bfs;
mod dijkstra;
mod prim;

use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::error::{GraphError, Result};

pub use bfs::Traversal;
pub use dijkstra::Route;
pub use prim::SpanningTree;

/// Position of a city in insertion order
pub type VertexId = usize;

/// One directed half of a flight
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub source: String,
    pub destination: String,
    pub weight: u64,
    target: VertexId,
}

impl Edge {
    pub(crate) fn target(&self) -> VertexId {
        self.target
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.source, self.destination)
    }
}

#[derive(Clone, Debug)]
struct Vertex {
    name: String,
    edges: Vec<Edge>,
}

impl Vertex {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            edges: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FlightNetwork {
    vertices: Vec<Vertex>,
    index: HashMap<String, VertexId>,
}

impl FlightNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of `name`, appending an empty city if it has never been referenced.
    pub fn resolve_or_create(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.vertices.len();
        self.vertices.push(Vertex::new(name));
        self.index.insert(name.to_string(), id);
        debug!(city = name, id, "city created");
        id
    }

    /// Whether `source` already has a flight record to `destination`.
    pub fn has_edge(&self, source: &str, destination: &str) -> bool {
        self.edges_from(source)
            .iter()
            .any(|edge| edge.destination == destination)
    }

    /// Inserts an undirected flight, returning `false` when the distance is
    /// negative or the flight already exists.
    pub fn add_edge(&mut self, source: &str, destination: &str, weight: i64) -> bool {
        match self.try_add_edge(source, destination, weight) {
            Ok(()) => true,
            Err(err) => {
                debug!(%err, "flight rejected");
                false
            }
        }
    }

    pub fn try_add_edge(&mut self, source: &str, destination: &str, weight: i64) -> Result<()> {
        if weight < 0 {
            return Err(GraphError::NegativeDistance {
                source_city: source.to_string(),
                destination: destination.to_string(),
                weight,
            });
        }
        if self.has_edge(source, destination) {
            return Err(GraphError::DuplicateFlight {
                source_city: source.to_string(),
                destination: destination.to_string(),
            });
        }

        let weight = weight.unsigned_abs();
        let from = self.resolve_or_create(source);
        let to = self.resolve_or_create(destination);
        self.vertices[from].edges.push(Edge {
            source: source.to_string(),
            destination: destination.to_string(),
            weight,
            target: to,
        });
        self.vertices[to].edges.push(Edge {
            source: destination.to_string(),
            destination: source.to_string(),
            weight,
            target: from,
        });
        debug!(source, destination, weight, "flight added");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.index.get(name).copied()
    }

    pub fn vertex_name(&self, id: VertexId) -> Option<&str> {
        self.vertices.get(id).map(|v| v.name.as_str())
    }

    /// City names in first-reference order.
    pub fn cities(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices.iter().map(|v| v.name.as_str())
    }

    /// Outgoing records of `name`; empty for unknown cities.
    pub fn edges_from(&self, name: &str) -> &[Edge] {
        match self.index.get(name) {
            Some(&id) => &self.vertices[id].edges,
            None => &[],
        }
    }

    pub fn edge_weight(&self, source: &str, destination: &str) -> Option<u64> {
        self.edges_from(source)
            .iter()
            .find(|edge| edge.destination == destination)
            .map(|edge| edge.weight)
    }

    /// Number of undirected flights; a self-loop counts once.
    pub fn flight_count(&self) -> usize {
        self.vertices.iter().map(|v| v.edges.len()).sum::<usize>() / 2
    }

    /// Every flight once, as seen from the endpoint that was inserted first.
    pub fn flights(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.vertices.iter().enumerate().flat_map(|(id, vertex)| {
            vertex
                .edges
                .iter()
                .filter(move |edge| edge.target > id)
                .chain(
                    vertex
                        .edges
                        .iter()
                        .filter(move |edge| edge.target == id)
                        .step_by(2),
                )
        })
    }

    fn edges_of(&self, id: VertexId) -> &[Edge] {
        &self.vertices[id].edges
    }

    fn name_of(&self, id: VertexId) -> &str {
        &self.vertices[id].name
    }

    #[instrument(level = "debug", skip(self))]
    pub fn breadth_first_search(&mut self, start: &str) -> Vec<String> {
        self.bfs_tree(start).order
    }

    #[instrument(level = "debug", skip(self))]
    pub fn bfs_tree(&mut self, start: &str) -> Traversal {
        let start = self.resolve_or_create(start);
        bfs::walk(self, start)
    }

    /// Shortest distance between two cities, `None` when `city_b` cannot be
    /// reached from `city_a`.
    #[instrument(level = "debug", skip(self))]
    pub fn shortest_distance(&mut self, city_a: &str, city_b: &str) -> Option<u64> {
        let from = self.resolve_or_create(city_a);
        let to = self.resolve_or_create(city_b);
        dijkstra::settle(self, from).distance_to(to)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn shortest_route(&mut self, city_a: &str, city_b: &str) -> Option<Route> {
        let from = self.resolve_or_create(city_a);
        let to = self.resolve_or_create(city_b);
        dijkstra::settle(self, from).route_to(self, to)
    }

    /// Spanning tree grown from the first city ever referenced. Networks with
    /// fewer than two cities yield an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn minimum_spanning_tree(&self) -> SpanningTree {
        if self.len() < 2 {
            return SpanningTree::default();
        }
        prim::grow(self, 0)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn minimum_spanning_tree_from(&mut self, start: &str) -> SpanningTree {
        let start = self.resolve_or_create(start);
        prim::grow(self, start)
    }

    pub fn print_graph(&self) {
        print!("{self}");
    }
}

impl fmt::Display for FlightNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in &self.vertices {
            writeln!(
                f,
                "V: {} | E: {}",
                vertex.name,
                vertex.edges.iter().map(|edge| format!("{edge}, ")).join("")
            )?;
        }
        Ok(())
    }
}
