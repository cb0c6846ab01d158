// Public API exports
pub mod bmp;
pub mod checksum;
pub mod clusterer;
pub mod report;

// Re-export main types for convenience
pub use bmp::{BmpError, BmpHeader, Image, Rgb};
pub use checksum::{checksum, file_digest};
pub use clusterer::{
    Centroid, ClusterError, ClusterResult, DEFAULT_MAX_ITERATIONS, KMeansConfig, MAX_K,
    assignments, find_closest_centroid, kmeans,
};
pub use report::RunReport;
