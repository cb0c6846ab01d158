use serde::{Deserialize, Serialize};

use crate::bmp::Rgb;

/// A cluster's representative color plus the running statistics of the
/// pixels assigned to it during the current pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Centroid {
    /// Pixels assigned in the last pass
    pub count: u32,
    pub color: Rgb,
    pub sum_r: u64,
    pub sum_g: u64,
    pub sum_b: u64,
}

impl Centroid {
    /// A centroid with `color` and empty statistics
    pub fn seeded(color: Rgb) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    /// Zero the statistics, keeping the color
    pub fn reset(&mut self) {
        self.count = 0;
        self.sum_r = 0;
        self.sum_g = 0;
        self.sum_b = 0;
    }

    pub fn accumulate(&mut self, px: Rgb) {
        self.count += 1;
        self.sum_r += u64::from(px.r);
        self.sum_g += u64::from(px.g);
        self.sum_b += u64::from(px.b);
    }

    /// Truncated per-channel mean of the assigned pixels, `None` when empty
    pub fn mean(&self) -> Option<Rgb> {
        if self.count == 0 {
            return None;
        }
        let n = u64::from(self.count);
        // Each mean is bounded by the largest channel value, so it fits in u8
        Some(Rgb::new(
            (self.sum_r / n) as u8,
            (self.sum_g / n) as u8,
            (self.sum_b / n) as u8,
        ))
    }

    /// Move the color to the mean of the assigned pixels.
    ///
    /// Dead centroids keep their color. Returns whether the color changed.
    pub fn update(&mut self) -> bool {
        match self.mean() {
            Some(mean) if mean != self.color => {
                self.color = mean;
                true
            }
            _ => false,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.count == 0
    }
}
