mod bzip2_codec;
mod deflate_codec;
mod null_codec;
mod zstandard_codec;

pub use bzip2_codec::Bzip2Codec;
pub use deflate_codec::DeflateCodec;
pub use null_codec::NullCodec;
pub use zstandard_codec::ZstandardCodec;

use blockcodec_core::format::{BZIP2_CODEC, DEFLATE_CODEC, NULL_CODEC, ZSTANDARD_CODEC};
use blockcodec_core::{Codec, CodecError, Result};

/// Every name [`codec_by_name`] resolves.
pub const CODEC_NAMES: &[&str] = &[NULL_CODEC, DEFLATE_CODEC, BZIP2_CODEC, ZSTANDARD_CODEC];

/// Resolve a codec from the name recorded in container metadata.
///
/// Every call returns a fresh instance with its own scratch buffer, so a
/// caller compressing on several threads should call this once per thread.
pub fn codec_by_name(name: &str) -> Result<Box<dyn Codec>> {
    match name {
        NULL_CODEC => Ok(Box::new(NullCodec)),
        DEFLATE_CODEC => Ok(Box::new(DeflateCodec::default())),
        BZIP2_CODEC => Ok(Box::new(Bzip2Codec::new())),
        ZSTANDARD_CODEC => Ok(Box::new(ZstandardCodec::default())),
        other => Err(CodecError::UnknownCodec(other.to_string())),
    }
}
