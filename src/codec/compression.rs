//! Compression adapters for the persistence codec.

use std::io::{self, Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;

/// Upper bound on inflated payload size; anything larger is treated as corrupt.
pub const MAX_INFLATED_BYTES: u64 = 64 * 1024 * 1024;

/// A lossless byte compressor.
pub trait Compressor {
    /// Short identifier used in log output
    fn name(&self) -> &'static str;

    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>>;

    fn decompress(&self, data: &[u8]) -> io::Result<Vec<u8>>;

    /// Largest payload `decompress` will return. Anything bigger must not be
    /// compressed, or it could not be read back.
    fn max_decompressed_len(&self) -> u64 {
        MAX_INFLATED_BYTES
    }
}

/// Deflate with a zlib header, the format written by earlier versions of
/// the journal.
#[derive(Debug, Clone, Copy)]
pub struct ZlibCompressor {
    level: Compression,
    max_inflated: u64,
}

impl ZlibCompressor {
    pub fn new() -> Self {
        Self {
            level: Compression::default(),
            max_inflated: MAX_INFLATED_BYTES,
        }
    }

    /// Compression level 0-9
    pub fn with_level(level: u32) -> Self {
        Self {
            level: Compression::new(level.min(9)),
            ..Self::new()
        }
    }

    /// Lower the inflate limit (never above [`MAX_INFLATED_BYTES`])
    pub fn with_limit(mut self, max_inflated: u64) -> Self {
        self.max_inflated = max_inflated.min(MAX_INFLATED_BYTES);
        self
    }
}

impl Default for ZlibCompressor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compressor for ZlibCompressor {
    fn name(&self) -> &'static str {
        "zlib"
    }

    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2), self.level);
        encoder.write_all(data)?;
        encoder.finish()
    }

    fn decompress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        let mut out = Vec::new();
        ZlibDecoder::new(data)
            .take(self.max_inflated + 1)
            .read_to_end(&mut out)?;
        if out.len() as u64 > self.max_inflated {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "inflated payload exceeds size limit",
            ));
        }
        Ok(out)
    }

    fn max_decompressed_len(&self) -> u64 {
        self.max_inflated
    }
}
