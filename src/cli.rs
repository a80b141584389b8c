//! Command-line model for the `flight-network` binary.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use tracing::warn;

use crate::error::GraphError;
use crate::graph::FlightNetwork;
use crate::logging::LOG_ENV;

/// Flights loaded when none are given on the command line.
pub const REFERENCE_FLIGHTS: &[(&str, &str, i64)] = &[
    ("1", "5", 4),
    ("1", "4", 1),
    ("1", "2", 2),
    ("4", "5", 9),
    ("2", "4", 3),
    ("2", "3", 3),
    ("2", "6", 7),
    ("3", "4", 5),
    ("3", "6", 8),
];

/// Explore a network of cities joined by flights
#[derive(Parser, Debug)]
#[command(name = "flight-network")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Flight written as SOURCE,DESTINATION,DISTANCE (repeatable)
    #[arg(long = "flight", short = 'f', value_name = "FLIGHT")]
    pub flights: Vec<Flight>,

    /// Print the network and its spanning tree instead of opening the explorer
    #[arg(long)]
    pub headless: bool,

    /// City the printed spanning tree grows from (default: first city)
    #[arg(long, value_name = "CITY")]
    pub mst_start: Option<String>,

    /// Log level filter, e.g. `debug` or `flight_network=trace`
    #[arg(long, env = LOG_ENV)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Write logs to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Builds the network from `--flight` arguments, falling back to the
    /// reference flights. Rejected flights are logged and skipped.
    pub fn build_network(&self) -> FlightNetwork {
        let mut network = FlightNetwork::new();
        if self.flights.is_empty() {
            for &(source, destination, weight) in REFERENCE_FLIGHTS {
                network.add_edge(source, destination, weight);
            }
            return network;
        }
        for flight in &self.flights {
            if let Err(err) =
                network.try_add_edge(&flight.source, &flight.destination, flight.distance)
            {
                warn!(%err, "skipping flight");
            }
        }
        network
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flight {
    pub source: String,
    pub destination: String,
    pub distance: i64,
}

impl FromStr for Flight {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GraphError::InvalidFlight(s.to_string());
        let mut parts = s.split(',').map(str::trim);
        let (Some(source), Some(destination), Some(distance), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        if source.is_empty() || destination.is_empty() {
            return Err(invalid());
        }
        Ok(Flight {
            source: source.to_string(),
            destination: destination.to_string(),
            distance: distance.parse().map_err(|_| invalid())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flight_triples() {
        let flight: Flight = "Boston, Denver ,12".parse().unwrap();
        assert_eq!(flight.source, "Boston");
        assert_eq!(flight.destination, "Denver");
        assert_eq!(flight.distance, 12);

        let negative: Flight = "A,B,-3".parse().unwrap();
        assert_eq!(negative.distance, -3);
    }

    #[test]
    fn rejects_malformed_flights() {
        for bad in ["A,B", "A,B,C", "A,B,1,2", ",B,1", ""] {
            assert_eq!(
                bad.parse::<Flight>(),
                Err(GraphError::InvalidFlight(bad.to_string())),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn falls_back_to_reference_flights() {
        let cli = Cli::parse_from(["flight-network", "--headless"]);
        let network = cli.build_network();

        assert_eq!(network.len(), 6);
        assert_eq!(network.flight_count(), REFERENCE_FLIGHTS.len());
    }

    #[test]
    fn skips_rejected_flights() {
        let cli = Cli::parse_from([
            "flight-network",
            "-f",
            "A,B,2",
            "-f",
            "B,A,9",
            "--flight",
            "A,C,-1",
        ]);
        let network = cli.build_network();

        assert_eq!(network.flight_count(), 1);
        assert_eq!(network.edge_weight("A", "B"), Some(2));
        assert!(!network.contains("C"));
    }
}
