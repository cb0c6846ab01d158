//! Uncompressed 24-bit BMP codec.
//!
//! Only the classic `BITMAPFILEHEADER` + `BITMAPINFOHEADER` layout with
//! `BI_RGB` compression is accepted. Header bytes are round-tripped as-is.

mod error;
mod header;
mod image;
mod pixel;


pub use error::BmpError;
pub use header::{BmpHeader, HEADER_LEN};
pub use image::{Image, load, save};
pub use pixel::Rgb;
