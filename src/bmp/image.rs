use log::debug;
use std::fs;
use std::path::Path;

use super::{BmpError, BmpHeader, Rgb};
use crate::clusterer::{Centroid, assignments};

/// A decoded 24-bit BMP: its header block plus a flat pixel buffer
/// in file row order.
#[derive(Debug, Clone)]
pub struct Image {
    pub header: BmpHeader,
    pub pixels: Vec<Rgb>,
    /// Bytes after the last pixel row (e.g. a V5 color profile), kept verbatim
    pub trailer: Vec<u8>,
}

impl Image {
    /// Decode a BMP from an in-memory byte buffer
    pub fn decode(bytes: &[u8]) -> Result<Self, BmpError> {
        let header = BmpHeader::parse(bytes)?;

        let width = header.width() as usize;
        let height = header.height() as usize;
        let stride = header.row_stride();
        let offset = header.pixel_offset();

        let expected = offset + stride * height;
        if bytes.len() < expected {
            return Err(BmpError::Truncated {
                expected,
                actual: bytes.len(),
            });
        }

        let mut pixels = Vec::with_capacity(width * height);
        for row in bytes[offset..expected].chunks_exact(stride) {
            pixels.extend(row[..width * 3].chunks_exact(3).map(Rgb::from_bgr));
        }

        Ok(Self {
            header,
            pixels,
            trailer: bytes[expected..].to_vec(),
        })
    }

    /// Encode `pixels` between this image's header block and trailer
    pub fn encode_pixels(&self, pixels: &[Rgb]) -> Result<Vec<u8>, BmpError> {
        let expected = self.header.pixel_count();
        if pixels.len() != expected {
            return Err(BmpError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        let width = self.width() as usize;
        let stride = self.header.row_stride();
        let padding = stride - width * 3;

        let mut buf = self.header.as_bytes();
        buf.reserve(stride * self.height() as usize + self.trailer.len());

        for row in pixels.chunks_exact(width) {
            for px in row {
                buf.extend_from_slice(&px.to_bgr());
            }
            buf.extend(std::iter::repeat(0u8).take(padding));
        }
        buf.extend_from_slice(&self.trailer);

        Ok(buf)
    }

    pub fn width(&self) -> u32 {
        self.header.width()
    }

    pub fn height(&self) -> u32 {
        self.header.height()
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }
}

/// Read and decode a BMP file
pub fn load(path: impl AsRef<Path>) -> Result<Image, BmpError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let image = Image::decode(&bytes)?;

    debug!(
        "Loaded {} ({}x{}, {} pixels, data at offset {})",
        path.display(),
        image.width(),
        image.height(),
        image.pixel_count(),
        image.header.pixel_offset()
    );

    Ok(image)
}

/// Write `image` to `path` with every pixel replaced by the color of its
/// nearest centroid. The header block is copied from the source unchanged.
pub fn save(path: impl AsRef<Path>, image: &Image, centroids: &[Centroid]) -> Result<(), BmpError> {
    let path = path.as_ref();

    if centroids.is_empty() {
        return Err(BmpError::EmptyPalette);
    }

    let recolored: Vec<Rgb> = assignments(&image.pixels, centroids)
        .into_iter()
        .map(|idx| centroids[idx].color)
        .collect();

    let buf = image.encode_pixels(&recolored)?;
    fs::write(path, &buf)?;

    debug!("Wrote {} ({} bytes)", path.display(), buf.len());
    Ok(())
}
