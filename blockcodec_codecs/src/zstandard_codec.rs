use std::hash::{Hash, Hasher};

use blockcodec_core::format::{DEFAULT_ZSTANDARD_LEVEL, ZSTANDARD_CODEC};
use blockcodec_core::{Codec, CodecError, Result};

/// Zstandard block codec.
///
/// Each block is compressed independently with `zstd` at the configured level
/// (default: 3). The frame records its content size, so decoding needs no
/// external size hint.
///
/// Best for: general text, JSON, logs, mixed structured data.
#[derive(Debug, Clone)]
pub struct ZstandardCodec {
    /// Compression level (1 = fast / larger, 22 = slow / smallest).
    pub level: i32,
}

impl Default for ZstandardCodec {
    fn default() -> Self {
        Self {
            level: DEFAULT_ZSTANDARD_LEVEL,
        }
    }
}

impl ZstandardCodec {
    pub fn new(level: i32) -> Self {
        Self { level }
    }
}

impl Codec for ZstandardCodec {
    fn name(&self) -> &'static str {
        ZSTANDARD_CODEC
    }

    fn compress(&mut self, raw: &[u8]) -> Result<Vec<u8>> {
        let compressed = zstd::bulk::compress(raw, self.level)
            .map_err(|e| CodecError::encode(ZSTANDARD_CODEC, e))?;
        log::trace!("zstandard compressed {} -> {} bytes", raw.len(), compressed.len());
        Ok(compressed)
    }

    fn decompress(&self, compressed: &[u8]) -> Result<Vec<u8>> {
        let raw = zstd::decode_all(compressed).map_err(|e| CodecError::decode(ZSTANDARD_CODEC, e))?;
        log::trace!("zstandard decompressed {} -> {} bytes", compressed.len(), raw.len());
        Ok(raw)
    }
}

impl PartialEq for ZstandardCodec {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ZstandardCodec {}

impl Hash for ZstandardCodec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}
