use serde::Serialize;
use thiserror::Error;

use super::Centroid;

/// Iteration cap applied when none is configured
pub const DEFAULT_MAX_ITERATIONS: usize = 50;

/// Largest supported cluster count
pub const MAX_K: usize = 255;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ClusterError {
    #[error("Invalid cluster count {0} (must be between 1 and 255)")]
    InvalidK(usize),

    #[error("Cannot cluster an image with no pixels")]
    EmptyImage,

    #[error("Iteration cap must be at least 1")]
    InvalidMaxIterations,
}

/// Parameters for a clustering run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KMeansConfig {
    pub k: usize,
    pub max_iterations: usize,
}

impl KMeansConfig {
    /// Create a config for `k` clusters with the default iteration cap
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Set the iteration cap
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn validate(&self) -> Result<(), ClusterError> {
        if self.k == 0 || self.k > MAX_K {
            return Err(ClusterError::InvalidK(self.k));
        }
        if self.max_iterations == 0 {
            return Err(ClusterError::InvalidMaxIterations);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterResult {
    pub centroids: Vec<Centroid>,
    /// Passes executed, including the one that detected convergence
    pub iterations: usize,
    /// False when the iteration cap stopped the run
    pub converged: bool,
}

impl ClusterResult {
    pub fn dead_count(&self) -> usize {
        self.centroids.iter().filter(|c| c.is_dead()).count()
    }
}
