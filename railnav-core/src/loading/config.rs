use std::path::PathBuf;

/// Configuration for building a network from a raw records file
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// JSON file with raw points, segments and coordinates
    pub input_path: PathBuf,
    pub subdivision: SubdivisionConfig,
}

impl NetworkConfig {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            subdivision: SubdivisionConfig::default(),
        }
    }
}

/// Edge length thresholds for long edge subdivision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubdivisionConfig {
    /// Edges longer than this are inspected
    pub long_edge_km: f64,
    /// Inspected edges longer than this are split once at their midpoint
    pub split_edge_km: f64,
}

impl Default for SubdivisionConfig {
    fn default() -> Self {
        Self {
            long_edge_km: 50.0,
            split_edge_km: 100.0,
        }
    }
}
