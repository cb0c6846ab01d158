use super::Centroid;
use crate::bmp::Rgb;

/// Squared Euclidean distance in RGB space
pub fn squared_distance(a: Rgb, b: Rgb) -> u32 {
    let dr = i32::from(a.r) - i32::from(b.r);
    let dg = i32::from(a.g) - i32::from(b.g);
    let db = i32::from(a.b) - i32::from(b.b);
    (dr * dr + dg * dg + db * db) as u32
}

/// Index of the centroid nearest to `px`.
///
/// Equidistant centroids resolve to the lowest index. Returns 0 for an
/// empty slice; callers guarantee at least one centroid.
pub fn find_closest_centroid(px: Rgb, centroids: &[Centroid]) -> usize {
    let mut best = 0;
    let mut best_dist = u32::MAX;

    for (idx, centroid) in centroids.iter().enumerate() {
        let dist = squared_distance(px, centroid.color);
        if dist < best_dist {
            best = idx;
            best_dist = dist;
            if dist == 0 {
                break;
            }
        }
    }

    best
}

/// Nearest-centroid index for every pixel
pub fn assignments(pixels: &[Rgb], centroids: &[Centroid]) -> Vec<usize> {
    pixels
        .iter()
        .map(|&px| find_closest_centroid(px, centroids))
        .collect()
}
