use std::fmt;

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Station not found: {0}")]
    StationNotFound(UnresolvedStations),
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}

/// Failure to read or write a persisted network
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("cannot access network file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot decode network file: {0}")]
    Decode(bincode::Error),
    #[error("cannot encode network: {0}")]
    Encode(bincode::Error),
    #[error("corrupt network file: {0}")]
    Corrupt(String),
}

/// Which end of a route a query names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteSide {
    Origin,
    Destination,
}

impl fmt::Display for RouteSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteSide::Origin => f.write_str("starting"),
            RouteSide::Destination => f.write_str("destination"),
        }
    }
}

/// A name that failed exact and high-confidence fuzzy resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationNotFound {
    /// `None` for a plain lookup outside of routing
    pub side: Option<RouteSide>,
    pub query: String,
}

impl fmt::Display for StationNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.side {
            Some(side) => write!(f, "{side} station '{}' not found", self.query),
            None => write!(f, "station '{}' not found", self.query),
        }
    }
}

/// Every side of a query that could not be resolved, origin first.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UnresolvedStations(pub(crate) Vec<StationNotFound>);

impl UnresolvedStations {
    pub(crate) fn single(side: Option<RouteSide>, query: &str) -> Self {
        Self(vec![StationNotFound {
            side,
            query: query.to_string(),
        }])
    }

    pub fn failures(&self) -> &[StationNotFound] {
        &self.0
    }

    pub fn contains_side(&self, side: RouteSide) -> bool {
        self.0.iter().any(|failure| failure.side == Some(side))
    }
}

impl fmt::Display for UnresolvedStations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, failure) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_display_lists_both_sides() {
        let unresolved = UnresolvedStations(vec![
            StationNotFound {
                side: Some(RouteSide::Origin),
                query: "Atlantis".into(),
            },
            StationNotFound {
                side: Some(RouteSide::Destination),
                query: "El Dorado".into(),
            },
        ]);

        assert_eq!(
            Error::StationNotFound(unresolved.clone()).to_string(),
            "Station not found: starting station 'Atlantis' not found; \
             destination station 'El Dorado' not found"
        );
        assert!(unresolved.contains_side(RouteSide::Origin));
        assert!(unresolved.contains_side(RouteSide::Destination));
    }

    #[test]
    fn plain_lookup_has_no_side() {
        let unresolved = UnresolvedStations::single(None, "Nowhere");
        assert_eq!(unresolved.to_string(), "station 'Nowhere' not found");
        assert!(!unresolved.contains_side(RouteSide::Origin));
    }
}
