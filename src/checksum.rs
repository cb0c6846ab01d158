use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

use crate::clusterer::Centroid;

/// Order-dependent fold over each centroid's count and packed color.
///
/// Identical centroid sequences always give the same value; swapping two
/// centroids changes it.
pub fn checksum(centroids: &[Centroid]) -> u32 {
    centroids.iter().fold(0u32, |acc, c| {
        acc.wrapping_mul(31)
            .wrapping_add(c.count)
            .wrapping_mul(31)
            .wrapping_add(c.color.packed())
    })
}

/// Compute SHA256 hash of file contents
pub fn file_digest(path: &Path) -> Result<String> {
    let contents = fs::read(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let mut hasher = Sha256::new();
    hasher.update(&contents);
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmp::Rgb;

    fn centroid(count: u32, r: u8, g: u8, b: u8) -> Centroid {
        Centroid {
            count,
            ..Centroid::seeded(Rgb::new(r, g, b))
        }
    }

    #[test]
    fn test_checksum_empty() {
        assert_eq!(checksum(&[]), 0);
    }

    #[test]
    fn test_checksum_single() {
        // (0 * 31 + 2) * 31 + 0x010203
        assert_eq!(checksum(&[centroid(2, 1, 2, 3)]), 62 + 0x010203);
    }

    #[test]
    fn test_checksum_is_order_dependent() {
        let a = centroid(5, 10, 20, 30);
        let b = centroid(7, 200, 100, 0);
        assert_ne!(checksum(&[a, b]), checksum(&[b, a]));
        assert_eq!(checksum(&[a, b]), checksum(&[a, b]));
    }

    #[test]
    fn test_file_digest() {
        let path = std::env::temp_dir().join(format!("kmeans_bmp_digest_{}.bin", std::process::id()));
        fs::write(&path, b"hello world").unwrap();
        let digest = file_digest(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(
            digest,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_file_digest_missing_file() {
        let result = file_digest(Path::new("/nonexistent/kmeans_bmp/none.bmp"));
        assert!(result.unwrap_err().to_string().contains("Failed to read file"));
    }
}
