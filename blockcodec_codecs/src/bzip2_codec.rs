use std::hash::{Hash, Hasher};
use std::io::{self, Read, Write};

use blockcodec_core::format::{BZIP2_CODEC, DEFAULT_BUFFER_SIZE};
use blockcodec_core::{Codec, CodecError, Result};
use bzip2::read::BzDecoder;
use bzip2::write::BzEncoder;
use bzip2::Compression;

/// bzip2 block codec.
///
/// Each block is encoded as one complete bzip2 stream (`BZh9` header,
/// 900 kB BWT blocks, end-of-stream marker and CRC), so any block decodes
/// with any standard bzip2 implementation.
///
/// The codec keeps a scratch buffer that the encoder writes into. It is
/// allocated on the first [`compress`](Codec::compress), emptied at the
/// start of every call, and keeps its capacity afterwards. Cloning yields a
/// codec with a fresh, empty scratch buffer.
///
/// Best for: highly redundant text where ratio matters more than speed.
#[derive(Debug, Default)]
pub struct Bzip2Codec {
    scratch: Vec<u8>,
}

impl Bzip2Codec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes currently reserved by the scratch buffer.
    pub fn scratch_capacity(&self) -> usize {
        self.scratch.capacity()
    }
}

impl Codec for Bzip2Codec {
    fn name(&self) -> &'static str {
        BZIP2_CODEC
    }

    fn compress(&mut self, raw: &[u8]) -> Result<Vec<u8>> {
        self.scratch.clear();
        self.scratch.reserve(raw.len());

        let mut encoder = BzEncoder::new(&mut self.scratch, Compression::best());
        encoder
            .write_all(raw)
            .map_err(|e| CodecError::encode(BZIP2_CODEC, e))?;
        encoder
            .finish()
            .map_err(|e| CodecError::encode(BZIP2_CODEC, e))?;

        log::trace!("bzip2 compressed {} -> {} bytes", raw.len(), self.scratch.len());
        Ok(self.scratch.to_vec())
    }

    fn decompress(&self, compressed: &[u8]) -> Result<Vec<u8>> {
        let mut decoder = BzDecoder::new(compressed);
        let mut raw = Vec::new();
        let mut chunk = vec![0u8; DEFAULT_BUFFER_SIZE];

        // Drain until the decoder hits the end-of-stream marker. A stream
        // that ends early surfaces as UnexpectedEof from the decoder.
        loop {
            let n = match decoder.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(CodecError::decode(BZIP2_CODEC, e)),
            };
            raw.extend_from_slice(&chunk[..n]);
        }

        log::trace!("bzip2 decompressed {} -> {} bytes", compressed.len(), raw.len());
        Ok(raw)
    }
}

impl Clone for Bzip2Codec {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl PartialEq for Bzip2Codec {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for Bzip2Codec {}

impl Hash for Bzip2Codec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}
