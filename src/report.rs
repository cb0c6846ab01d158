use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::clusterer::{Centroid, ClusterResult};

/// Summary of a quantization run, written as JSON
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub created_at: String,
    pub generator: String,
    pub input: String,
    pub output: String,
    pub width: u32,
    pub height: u32,
    pub k: usize,
    pub iterations: usize,
    pub converged: bool,
    pub dead_centroids: usize,
    pub checksum: u32,
    pub centroids: Vec<Centroid>,
}

impl RunReport {
    pub fn new(
        input: &Path,
        output: &Path,
        width: u32,
        height: u32,
        result: &ClusterResult,
    ) -> Self {
        Self {
            created_at: Utc::now().to_rfc3339(),
            generator: format!("kmeans-bmp v{}", env!("CARGO_PKG_VERSION")),
            input: input.display().to_string(),
            output: output.display().to_string(),
            width,
            height,
            k: result.centroids.len(),
            iterations: result.iterations,
            converged: result.converged,
            dead_centroids: result.dead_count(),
            checksum: crate::checksum::checksum(&result.centroids),
            centroids: result.centroids.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize run report")
    }

    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write report: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmp::Rgb;

    #[test]
    fn test_report_json_fields() {
        let result = ClusterResult {
            centroids: vec![Centroid {
                count: 4,
                sum_r: 40,
                sum_g: 80,
                sum_b: 120,
                color: Rgb::new(10, 20, 30),
            }],
            iterations: 2,
            converged: true,
        };

        let report = RunReport::new(Path::new("in.bmp"), Path::new("out.bmp"), 2, 2, &result);
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["input"], "in.bmp");
        assert_eq!(value["k"], 1);
        assert_eq!(value["converged"], true);
        assert_eq!(value["dead_centroids"], 0);
        assert_eq!(value["centroids"][0]["count"], 4);
        assert_eq!(value["centroids"][0]["color"]["g"], 20);
        assert!(value["created_at"].as_str().unwrap().contains('T'));
    }
}
