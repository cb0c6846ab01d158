use super::BmpError;

/// Size of BITMAPFILEHEADER + BITMAPINFOHEADER
pub const HEADER_LEN: usize = 54;

const FILE_HEADER_LEN: usize = 14;
const MIN_INFO_HEADER_LEN: u32 = 40;
const BI_RGB: u32 = 0;

/// Raw header block of a 24-bit uncompressed BMP.
///
/// The bytes are kept exactly as read and written back unchanged. Only
/// the fields needed to locate and walk the pixel rows are decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BmpHeader {
    raw: [u8; HEADER_LEN],
    /// Bytes between the 54-byte header and the pixel data offset
    /// (larger info headers, color masks). Preserved verbatim.
    trailing: Vec<u8>,
}

impl BmpHeader {
    /// Parse and validate the header at the start of `bytes`
    pub fn parse(bytes: &[u8]) -> Result<Self, BmpError> {
        if bytes.len() < HEADER_LEN {
            return Err(BmpError::Truncated {
                expected: HEADER_LEN,
                actual: bytes.len(),
            });
        }

        let mut raw = [0u8; HEADER_LEN];
        raw.copy_from_slice(&bytes[..HEADER_LEN]);

        let header = Self {
            raw,
            trailing: Vec::new(),
        };

        if &header.raw[0..2] != b"BM" {
            return Err(BmpError::InvalidSignature);
        }

        let info_len = header.u32_at(FILE_HEADER_LEN);
        if info_len < MIN_INFO_HEADER_LEN {
            return Err(BmpError::UnsupportedHeader(info_len));
        }

        let bit_count = header.bit_count();
        if bit_count != 24 {
            return Err(BmpError::UnsupportedBitDepth(bit_count));
        }

        let compression = header.compression();
        if compression != BI_RGB {
            return Err(BmpError::UnsupportedCompression(compression));
        }

        let (width, height) = (header.raw_width(), header.raw_height());
        if width <= 0 || height == 0 || height == i32::MIN {
            return Err(BmpError::InvalidDimensions { width, height });
        }

        // Per-centroid pixel counts are u32
        let pixels = u64::from(header.width()) * u64::from(header.height());
        if pixels > u64::from(u32::MAX) {
            return Err(BmpError::TooManyPixels(pixels));
        }

        let offset = header.pixel_offset();
        if offset < HEADER_LEN {
            return Err(BmpError::InvalidPixelOffset(offset));
        }
        if offset > bytes.len() {
            return Err(BmpError::Truncated {
                expected: offset,
                actual: bytes.len(),
            });
        }

        Ok(Self {
            trailing: bytes[HEADER_LEN..offset].to_vec(),
            ..header
        })
    }

    fn u16_at(&self, pos: usize) -> u16 {
        u16::from_le_bytes([self.raw[pos], self.raw[pos + 1]])
    }

    fn u32_at(&self, pos: usize) -> u32 {
        u32::from_le_bytes([
            self.raw[pos],
            self.raw[pos + 1],
            self.raw[pos + 2],
            self.raw[pos + 3],
        ])
    }

    fn raw_width(&self) -> i32 {
        self.u32_at(18) as i32
    }

    fn raw_height(&self) -> i32 {
        self.u32_at(22) as i32
    }

    pub fn bit_count(&self) -> u16 {
        self.u16_at(28)
    }

    pub fn compression(&self) -> u32 {
        self.u32_at(30)
    }

    /// Byte offset of the first pixel row
    pub fn pixel_offset(&self) -> usize {
        self.u32_at(10) as usize
    }

    pub fn width(&self) -> u32 {
        self.raw_width().unsigned_abs()
    }

    pub fn height(&self) -> u32 {
        self.raw_height().unsigned_abs()
    }

    /// Negative height marks a top-down bitmap
    pub fn is_top_down(&self) -> bool {
        self.raw_height() < 0
    }

    /// Bytes per pixel row, padded to a 4-byte boundary
    pub fn row_stride(&self) -> usize {
        (self.width() as usize * 3 + 3) & !3
    }

    pub fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Every byte that precedes the pixel data, in file order
    pub fn as_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.trailing.len());
        out.extend_from_slice(&self.raw);
        out.extend_from_slice(&self.trailing);
        out
    }
}
