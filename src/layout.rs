use force_graph::{EdgeData, ForceGraph, NodeData};

use crate::graph::FlightNetwork;

/// Simulation steps run before the positions are read back.
pub const SETTLE_STEPS: usize = 400;
const STEP_DT: f32 = 0.035;
const SPREAD: f32 = 200.0;

/// City positions produced by a force-directed simulation, indexed by vertex
/// id.
#[derive(Clone, Debug, Default)]
pub struct NetworkLayout {
    positions: Vec<(f64, f64)>,
}

impl NetworkLayout {
    pub fn settle(network: &FlightNetwork, steps: usize) -> Self {
        let mut sim: ForceGraph<usize, ()> = ForceGraph::new(Default::default());

        let nodes: Vec<_> = (0..network.len())
            .map(|id| {
                sim.add_node(NodeData {
                    x: (rand::random::<f32>() - 0.5) * SPREAD,
                    y: (rand::random::<f32>() - 0.5) * SPREAD,
                    user_data: id,
                    ..Default::default()
                })
            })
            .collect();

        for flight in network.flights() {
            let (Some(a), Some(b)) = (
                network.vertex_id(&flight.source),
                network.vertex_id(&flight.destination),
            ) else {
                continue;
            };
            if a != b {
                sim.add_edge(nodes[a], nodes[b], EdgeData::default());
            }
        }

        for _ in 0..steps {
            sim.update(STEP_DT);
        }

        let mut positions = vec![(0.0, 0.0); network.len()];
        sim.visit_nodes(|node| {
            let (x, y) = (f64::from(node.x()), f64::from(node.y()));
            if x.is_finite() && y.is_finite() {
                positions[node.data.user_data] = (x, y);
            }
        });
        Self { positions }
    }

    pub fn position(&self, id: usize) -> Option<(f64, f64)> {
        self.positions.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Padded `([x_min, x_max], [y_min, y_max])` covering every city.
    pub fn bounds(&self) -> ([f64; 2], [f64; 2]) {
        if self.positions.is_empty() {
            return ([-1.0, 1.0], [-1.0, 1.0]);
        }
        let (mut x0, mut x1, mut y0, mut y1) = (f64::MAX, f64::MIN, f64::MAX, f64::MIN);
        for &(x, y) in &self.positions {
            x0 = x0.min(x);
            x1 = x1.max(x);
            y0 = y0.min(y);
            y1 = y1.max(y);
        }
        let pad_x = ((x1 - x0) * 0.15).max(10.0);
        let pad_y = ((y1 - y0) * 0.15).max(10.0);
        ([x0 - pad_x, x1 + pad_x], [y0 - pad_y, y1 + pad_y])
    }
}
