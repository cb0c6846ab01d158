use thiserror::Error;

#[derive(Error, Debug)]
pub enum BmpError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not a BMP file: missing 'BM' signature")]
    InvalidSignature,

    #[error("Unsupported info header size: {0} (expected at least 40)")]
    UnsupportedHeader(u32),

    #[error("Unsupported bit depth: {0} (only 24-bit is supported)")]
    UnsupportedBitDepth(u16),

    #[error("Unsupported compression: {0} (only BI_RGB is supported)")]
    UnsupportedCompression(u32),

    #[error("Truncated file: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("Invalid pixel data offset: {0}")]
    InvalidPixelOffset(usize),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("Too many pixels: {0} (at most 4294967295)")]
    TooManyPixels(u64),

    #[error("Pixel count mismatch: image has {expected}, got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },

    #[error("Cannot recolor image with an empty centroid set")]
    EmptyPalette,
}

impl BmpError {
    /// True for header/layout problems, false for I/O failures
    pub fn is_format_error(&self) -> bool {
        !matches!(self, BmpError::Io(_))
    }
}
