//! Typed station and route input.
//!
//! Front-ends collect stations and routes as text. Everything is parsed and
//! checked here, so the search only ever sees known stations and
//! non-negative integer distances.
use std::path::Path;

use anyhow::Context;
use log::{debug, info};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::{
    constants::Weight,
    error::{InputError, SearchError},
    graph::{Graph, Station},
    search::{dijkstra::Dijkstra, shortest_path::SearchResult},
};

/// Undirected route between two stations. Also the row type of a routes file
/// (`source,target,weight`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Route {
    #[serde(rename = "source")]
    pub from: Station,
    #[serde(rename = "target")]
    pub to: Station,
    #[serde(rename = "weight")]
    pub distance: Weight,
}

impl Route {
    pub fn new(from: impl Into<Station>, to: impl Into<Station>, distance: Weight) -> Self {
        Route {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }
}

pub fn parse_distance(text: &str) -> Result<Weight, InputError> {
    text.trim()
        .parse::<Weight>()
        .map_err(|_| InputError::InvalidDistance(text.trim().to_string()))
}

/// Parses `FROM TO DISTANCE`. Fields are separated by whitespace or commas.
pub fn parse_route(line: &str) -> Result<Route, InputError> {
    let fields: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty())
        .collect();

    match fields.as_slice() {
        [from, to, distance] => Ok(Route::new(*from, *to, parse_distance(distance)?)),
        _ => Err(InputError::MalformedRoute {
            line: line.trim().to_string(),
        }),
    }
}

/// Validated start and end of a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub start: Station,
    pub end: Station,
}

/// Stations and routes collected by a front-end.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: Vec<Station>,
    known: FxHashSet<Station>,
    routes: Vec<Route>,
}

impl Network {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_station(&mut self, station: impl Into<Station>) -> Result<(), InputError> {
        let station = station.into();
        if !self.known.insert(station.clone()) {
            return Err(InputError::DuplicateStation(station.to_string()));
        }
        self.stations.push(station);
        Ok(())
    }

    /// Registers `station` unless it is known already
    fn ensure_station(&mut self, station: &Station) {
        if self.known.insert(station.clone()) {
            self.stations.push(station.clone());
        }
    }

    /// Adds a route between two known stations.
    pub fn add_route(&mut self, route: Route) -> Result<(), InputError> {
        for station in [&route.from, &route.to] {
            if !self.known.contains(station) {
                return Err(InputError::UnknownStation(station.to_string()));
            }
        }
        self.routes.push(route);
        Ok(())
    }

    pub fn add_route_line(&mut self, line: &str) -> Result<(), InputError> {
        self.add_route(parse_route(line)?)
    }

    pub fn contains(&self, station: &str) -> bool {
        self.known.contains(station)
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Checks that both ends of a query are known stations.
    pub fn query(&self, start: &str, end: &str) -> Result<Query, InputError> {
        for station in [start, end] {
            if !self.contains(station) {
                return Err(InputError::UnknownStation(station.to_string()));
            }
        }
        Ok(Query {
            start: start.into(),
            end: end.into(),
        })
    }

    /// Builds a fresh graph holding every station, including stations without
    /// routes, and every route.
    pub fn to_graph(&self) -> Graph {
        let mut g = Graph::with_capacity(self.stations.len(), self.routes.len());
        for station in &self.stations {
            g.add_node(station.clone());
        }
        for route in &self.routes {
            g.add_edge(route.from.clone(), route.to.clone(), route.distance);
        }
        g
    }

    /// Runs `query` on a graph built for this call only.
    pub fn shortest_route(&self, query: &Query) -> Result<SearchResult, SearchError> {
        let g = self.to_graph();
        Dijkstra::new(&g).search(&query.start, &query.end)
    }

    /// Reads a headered `source,target,weight` file. Stations are registered
    /// as they appear.
    pub fn read_csv(path: &Path) -> anyhow::Result<Self> {
        info!("Reading routes from {}", path.display());

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .with_context(|| format!("Could not open {}", path.display()))?;

        let mut network = Network::new();
        for (i, result) in reader.deserialize().enumerate() {
            let route: Route =
                result.with_context(|| format!("Failed to parse route in record {}", i + 1))?;
            network.ensure_station(&route.from);
            network.ensure_station(&route.to);
            network.routes.push(route);
        }

        debug!(
            "Read {} stations and {} routes",
            network.stations.len(),
            network.routes.len()
        );
        Ok(network)
    }

    /// Merges another network into this one. Known stations are kept once.
    pub fn extend(&mut self, other: Network) {
        for station in &other.stations {
            self.ensure_station(station);
        }
        self.routes.extend(other.routes);
    }
}
