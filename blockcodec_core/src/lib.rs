pub mod codec;
pub mod error;
pub mod format;

pub use codec::Codec;
pub use error::{CodecError, Result};
pub use format::{BZIP2_CODEC, DEFAULT_BUFFER_SIZE, DEFLATE_CODEC, NULL_CODEC, ZSTANDARD_CODEC};
