use std::hash::{Hash, Hasher};
use std::io::{Read, Write};

use blockcodec_core::format::{DEFAULT_DEFLATE_LEVEL, DEFLATE_CODEC, MAX_DEFLATE_LEVEL};
use blockcodec_core::{Codec, CodecError, Result};
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;

/// Raw DEFLATE block codec (RFC 1951, no zlib or gzip wrapper).
///
/// Like [`Bzip2Codec`](crate::Bzip2Codec) it reuses one scratch buffer
/// across `compress` calls. The level is a tuning knob only and is not part
/// of the codec's identity: a level-1 and a level-9 instance compare equal
/// and decode each other's blocks.
#[derive(Debug)]
pub struct DeflateCodec {
    level: u32,
    scratch: Vec<u8>,
}

impl Default for DeflateCodec {
    fn default() -> Self {
        Self::new(DEFAULT_DEFLATE_LEVEL)
    }
}

impl DeflateCodec {
    /// Levels above 9 are clamped to 9.
    pub fn new(level: u32) -> Self {
        Self {
            level: level.min(MAX_DEFLATE_LEVEL),
            scratch: Vec::new(),
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }
}

impl Codec for DeflateCodec {
    fn name(&self) -> &'static str {
        DEFLATE_CODEC
    }

    fn compress(&mut self, raw: &[u8]) -> Result<Vec<u8>> {
        self.scratch.clear();
        self.scratch.reserve(raw.len());

        let mut encoder = DeflateEncoder::new(&mut self.scratch, Compression::new(self.level));
        encoder
            .write_all(raw)
            .map_err(|e| CodecError::encode(DEFLATE_CODEC, e))?;
        encoder
            .finish()
            .map_err(|e| CodecError::encode(DEFLATE_CODEC, e))?;

        log::trace!("deflate compressed {} -> {} bytes", raw.len(), self.scratch.len());
        Ok(self.scratch.to_vec())
    }

    fn decompress(&self, compressed: &[u8]) -> Result<Vec<u8>> {
        let mut raw = Vec::with_capacity(compressed.len() * 2);
        DeflateDecoder::new(compressed)
            .read_to_end(&mut raw)
            .map_err(|e| CodecError::decode(DEFLATE_CODEC, e))?;

        log::trace!("deflate decompressed {} -> {} bytes", compressed.len(), raw.len());
        Ok(raw)
    }
}

impl Clone for DeflateCodec {
    fn clone(&self) -> Self {
        Self::new(self.level)
    }
}

impl PartialEq for DeflateCodec {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for DeflateCodec {}

impl Hash for DeflateCodec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}
