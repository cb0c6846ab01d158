mod centroid;
mod distance;
mod kmeans;
mod types;


pub use centroid::Centroid;
pub use distance::{assignments, find_closest_centroid, squared_distance};
pub use kmeans::{init_centroids, kmeans, refine};
pub use types::{ClusterError, ClusterResult, DEFAULT_MAX_ITERATIONS, KMeansConfig, MAX_K};
