use std::io;

/// Errors surfaced by a [`Codec`](crate::Codec).
///
/// ```text
///   CodecError
///   ├── Encode        ← encoder failed while writing or finishing the stream
///   ├── Decode        ← input is not a valid, complete stream for this codec
///   └── UnknownCodec  ← factory lookup with an unregistered name
/// ```
///
/// Both I/O-backed variants carry the name of the codec that failed so a
/// container reader can report which block codec rejected the data.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("{codec} encode failed: {source}")]
    Encode {
        codec: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{codec} decode failed: {source}")]
    Decode {
        codec: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("unknown codec '{0}'")]
    UnknownCodec(String),
}

impl CodecError {
    pub fn encode(codec: &'static str, source: io::Error) -> Self {
        Self::Encode { codec, source }
    }

    pub fn decode(codec: &'static str, source: io::Error) -> Self {
        Self::Decode { codec, source }
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_codec() {
        let err = CodecError::decode("bzip2", io::Error::new(io::ErrorKind::InvalidData, "bad magic"));
        assert_eq!(err.to_string(), "bzip2 decode failed: bad magic");
    }

    #[test]
    fn source_is_the_io_error() {
        use std::error::Error;

        let err = CodecError::encode("deflate", io::Error::new(io::ErrorKind::Other, "oom"));
        let source = err.source().expect("encode error should carry a source");
        assert_eq!(source.to_string(), "oom");
    }

    #[test]
    fn unknown_codec_message() {
        let err = CodecError::UnknownCodec("snappy".into());
        assert_eq!(err.to_string(), "unknown codec 'snappy'");
    }
}
