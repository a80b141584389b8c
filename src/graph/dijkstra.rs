use tracing::trace;

use super::{FlightNetwork, VertexId};

/// A shortest route between two cities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub distance: u64,
    pub cities: Vec<String>,
}

impl Route {
    /// Consecutive city pairs along the route.
    pub fn legs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.cities
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}

/// Settled distances from one start city, indexed by vertex id.
pub(super) struct ShortestPaths {
    dist: Vec<Option<u64>>,
    prev: Vec<Option<VertexId>>,
}

impl ShortestPaths {
    pub(super) fn distance_to(&self, v: VertexId) -> Option<u64> {
        self.dist.get(v).copied().flatten()
    }

    pub(super) fn route_to(&self, g: &FlightNetwork, v: VertexId) -> Option<Route> {
        let distance = self.distance_to(v)?;
        let mut ids = vec![v];
        let mut current = v;
        while let Some(p) = self.prev[current] {
            ids.push(p);
            current = p;
        }
        ids.reverse();
        Some(Route {
            distance,
            cities: ids.iter().map(|&id| g.name_of(id).to_string()).collect(),
        })
    }
}

/// Dense-array Dijkstra. Each round settles the closest unsettled city (first
/// in store order on ties) and relaxes its flights; cities never given a
/// distance stay `None`.
pub(super) fn settle(g: &FlightNetwork, start: VertexId) -> ShortestPaths {
    let n = g.len();
    let mut dist: Vec<Option<u64>> = vec![None; n];
    let mut prev: Vec<Option<VertexId>> = vec![None; n];
    let mut settled = vec![false; n];

    dist[start] = Some(0);

    while let Some((u, du)) = closest_unsettled(&dist, &settled) {
        settled[u] = true;
        trace!(city = g.name_of(u), distance = du, "settled");

        for edge in g.edges_of(u) {
            let v = edge.target();
            let candidate = du.saturating_add(edge.weight);
            if dist[v].is_none_or(|current| candidate < current) {
                dist[v] = Some(candidate);
                prev[v] = Some(u);
            }
        }
    }

    ShortestPaths { dist, prev }
}

fn closest_unsettled(dist: &[Option<u64>], settled: &[bool]) -> Option<(VertexId, u64)> {
    dist.iter()
        .enumerate()
        .filter(|&(v, _)| !settled[v])
        .filter_map(|(v, d)| d.map(|d| (v, d)))
        .min_by_key(|&(_, d)| d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_unsettled_prefers_store_order_on_ties() {
        let dist = [Some(0), Some(4), None, Some(4)];
        let settled = [true, false, false, false];

        assert_eq!(closest_unsettled(&dist, &settled), Some((1, 4)));
        assert_eq!(closest_unsettled(&dist, &[true, true, true, true]), None);
    }

    #[test]
    fn finds_multi_hop_paths_the_direct_flight_misses() {
        let mut g = FlightNetwork::new();
        g.add_edge("A", "B", 10);
        g.add_edge("A", "C", 1);
        g.add_edge("C", "D", 1);
        g.add_edge("D", "B", 1);

        assert_eq!(g.shortest_distance("A", "B"), Some(3));
        let route = g.shortest_route("A", "B").unwrap();
        assert_eq!(route.cities, ["A", "C", "D", "B"]);
        assert_eq!(route.legs().count(), 3);
    }

    #[test]
    fn start_is_at_distance_zero() {
        let mut g = FlightNetwork::new();
        g.add_edge("A", "B", 5);

        assert_eq!(g.shortest_distance("A", "A"), Some(0));
        assert_eq!(g.shortest_route("B", "B").unwrap().cities, ["B"]);
    }

    #[test]
    fn disconnected_target_is_unreachable() {
        let mut g = FlightNetwork::new();
        g.add_edge("A", "B", 5);
        g.add_edge("C", "D", 5);

        assert_eq!(g.shortest_distance("A", "D"), None);
        assert_eq!(g.shortest_route("A", "D"), None);
        assert_eq!(g.shortest_distance("D", "C"), Some(5));
    }

    #[test]
    fn relaxation_saturates_instead_of_wrapping() {
        let mut g = FlightNetwork::new();
        g.add_edge("A", "B", i64::MAX);
        g.add_edge("B", "C", i64::MAX);
        g.add_edge("C", "D", i64::MAX);

        assert_eq!(g.shortest_distance("A", "D"), Some(u64::MAX));
    }

    #[test]
    fn zero_distance_flights_and_self_loops() {
        let mut g = FlightNetwork::new();
        g.add_edge("A", "A", 3);
        g.add_edge("A", "B", 0);
        g.add_edge("B", "C", 2);

        assert_eq!(g.shortest_distance("A", "C"), Some(2));
    }
}
