//! Cities joined by undirected flights, with breadth-first traversal,
//! shortest distance (Dijkstra) and minimum spanning tree (Prim) queries,
//! plus a terminal explorer over the network.

pub mod app;
pub mod cli;
pub mod error;
pub mod graph;
pub mod layout;
pub mod logging;
pub mod menu;

pub use error::GraphError;
pub use graph::{Edge, FlightNetwork, Route, SpanningTree, Traversal};
