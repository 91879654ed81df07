use std::hash::{Hash, Hasher};

use blockcodec_core::format::NULL_CODEC;
use blockcodec_core::{Codec, Result};

/// No-op codec: stores blocks verbatim, with no compression.
///
/// Useful for data that is already compressed (e.g., JPEG, MP4) where
/// further compression would expand the block.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCodec;

impl Codec for NullCodec {
    fn name(&self) -> &'static str {
        NULL_CODEC
    }

    fn compress(&mut self, raw: &[u8]) -> Result<Vec<u8>> {
        Ok(raw.to_vec())
    }

    fn decompress(&self, compressed: &[u8]) -> Result<Vec<u8>> {
        Ok(compressed.to_vec())
    }
}

impl PartialEq for NullCodec {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for NullCodec {}

impl Hash for NullCodec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}
