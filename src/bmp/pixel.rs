use serde::{Deserialize, Serialize};

/// An 8-bit RGB triple.
///
/// BMP stores channels as B, G, R on disk; this type always holds them
/// in R, G, B order and the codec handles the swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub(crate) fn from_bgr(bytes: &[u8]) -> Self {
        Self {
            b: bytes[0],
            g: bytes[1],
            r: bytes[2],
        }
    }

    pub(crate) fn to_bgr(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }

    /// Pack into 0x00RRGGBB
    pub fn packed(self) -> u32 {
        u32::from_be_bytes([0, self.r, self.g, self.b])
    }
}

