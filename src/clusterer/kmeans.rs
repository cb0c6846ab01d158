use log::{debug, info, warn};

use crate::bmp::Rgb;
use crate::clusterer::{
    centroid::Centroid,
    distance::find_closest_centroid,
    types::{ClusterError, ClusterResult, KMeansConfig},
};

/// Seed `k` centroids from evenly spaced pixels.
///
/// Centroid `i` takes the color of pixel `i * n / k`. When `n < k` some
/// indices repeat and the duplicates start out dead.
pub fn init_centroids(pixels: &[Rgb], k: usize) -> Vec<Centroid> {
    if pixels.is_empty() {
        return Vec::new();
    }

    let n = pixels.len() as u64;
    (0..k as u64)
        .map(|i| Centroid::seeded(pixels[(i * n / k as u64) as usize]))
        .collect()
}

/// Zero every centroid's statistics, then add each pixel to its nearest one
fn assign(pixels: &[Rgb], centroids: &mut [Centroid]) {
    for c in centroids.iter_mut() {
        c.reset();
    }
    for &px in pixels {
        let idx = find_closest_centroid(px, centroids);
        centroids[idx].accumulate(px);
    }
}

/// Refine `centroids` in place until no color moves or `max_iterations`
/// passes have run. Returns the number of passes and whether it converged.
///
/// On exit the statistics of every centroid describe exactly the pixels
/// that are nearest to its final color.
pub fn refine(pixels: &[Rgb], centroids: &mut [Centroid], max_iterations: usize) -> (usize, bool) {
    let mut iterations = 0;

    while iterations < max_iterations {
        iterations += 1;

        // 1. Assign and accumulate
        assign(pixels, centroids);

        // 2. Move colors to the mean of their members
        let mut moved = 0;
        for c in centroids.iter_mut() {
            if c.update() {
                moved += 1;
            }
        }

        debug!("iteration {}: {} centroid(s) moved", iterations, moved);

        if moved == 0 {
            return (iterations, true);
        }
    }

    // Colors moved on the last pass, so the statistics lag behind them
    assign(pixels, centroids);
    (iterations, false)
}

/// Cluster `pixels` into `config.k` colors
pub fn kmeans(pixels: &[Rgb], config: &KMeansConfig) -> Result<ClusterResult, ClusterError> {
    config.validate()?;
    if pixels.is_empty() {
        return Err(ClusterError::EmptyImage);
    }

    if config.k > pixels.len() {
        warn!(
            "k={} exceeds pixel count {}; surplus centroids will stay empty",
            config.k,
            pixels.len()
        );
    }

    let mut centroids = init_centroids(pixels, config.k);
    let (iterations, converged) = refine(pixels, &mut centroids, config.max_iterations);

    if converged {
        info!("Converged after {} iteration(s)", iterations);
    } else {
        warn!(
            "Iteration cap of {} reached before convergence",
            config.max_iterations
        );
    }

    let result = ClusterResult {
        centroids,
        iterations,
        converged,
    };

    let dead = result.dead_count();
    if dead > 0 {
        warn!("{} of {} centroid(s) have no pixels", dead, config.k);
    }

    Ok(result)
}
