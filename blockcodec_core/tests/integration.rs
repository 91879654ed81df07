/// Integration test: the codec family as a container reader/writer sees it,
/// through `Box<dyn Codec>` resolved by name.
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use blockcodec_codecs::{codec_by_name, Bzip2Codec, DeflateCodec, NullCodec, ZstandardCodec, CODEC_NAMES};
use blockcodec_core::format::{BZIP2_CODEC, DEFLATE_CODEC, NULL_CODEC, ZSTANDARD_CODEC};
use blockcodec_core::{Codec, CodecError};
use test_log::test;

fn compressible_bytes(len: usize) -> Vec<u8> {
    let pattern = b"the quick brown fox jumps over the lazy dog. ";
    (0..len).map(|i| pattern[i % pattern.len()]).collect()
}

fn hash_of(codec: &dyn Codec) -> u64 {
    let mut hasher = DefaultHasher::new();
    codec.hash(&mut hasher);
    hasher.finish()
}

// ── tests ──────────────────────────────────────────────────────────────────

#[test]
fn test_factory_resolves_every_name() {
    for &name in CODEC_NAMES {
        let codec = codec_by_name(name).unwrap();
        assert_eq!(codec.name(), name);
        assert_eq!(codec.to_string(), name);
    }
}

#[test]
fn test_factory_unknown_name() {
    let err = codec_by_name("snappy").unwrap_err();
    assert!(matches!(err, CodecError::UnknownCodec(ref n) if n == "snappy"));
}

/// Writer stores (name, block); reader resolves the name and decodes.
#[test]
fn test_writer_reader_contract() {
    let block = compressible_bytes(64 * 1024 + 17);

    for &name in CODEC_NAMES {
        let mut writer_codec = codec_by_name(name).unwrap();
        let stored = (writer_codec.name(), writer_codec.compress(&block).unwrap());

        let reader_codec = codec_by_name(stored.0).unwrap();
        assert_eq!(reader_codec.decompress(&stored.1).unwrap(), block, "codec {name}");
    }
}

#[test]
fn test_same_codec_equal_and_same_hash() {
    let a = codec_by_name(BZIP2_CODEC).unwrap();
    let b: Box<dyn Codec> = Box::new(Bzip2Codec::new());

    assert!(*a == *b);
    assert_eq!(hash_of(a.as_ref()), hash_of(b.as_ref()));

    let fast: Box<dyn Codec> = Box::new(DeflateCodec::new(1));
    let slow: Box<dyn Codec> = Box::new(DeflateCodec::new(9));
    assert!(*fast == *slow);
    assert_eq!(hash_of(fast.as_ref()), hash_of(slow.as_ref()));
}

#[test]
fn test_different_codecs_not_equal() {
    let bzip2: Box<dyn Codec> = Box::new(Bzip2Codec::new());
    let others: [Box<dyn Codec>; 3] = [
        Box::new(NullCodec),
        Box::new(DeflateCodec::default()),
        Box::new(ZstandardCodec::default()),
    ];
    for other in &others {
        assert!(*bzip2 != **other, "bzip2 should differ from {other}");
    }
}

#[test]
fn test_registry_keyed_by_codec() {
    let mut seen: HashSet<Box<dyn Codec>> = HashSet::new();
    for name in [BZIP2_CODEC, DEFLATE_CODEC, BZIP2_CODEC, NULL_CODEC, ZSTANDARD_CODEC, NULL_CODEC] {
        seen.insert(codec_by_name(name).unwrap());
    }
    assert_eq!(seen.len(), 4);
}

/// A block written by one codec must not decode silently under another.
#[test]
fn test_cross_codec_decode_fails() {
    let block = compressible_bytes(10_000);
    let bz = Bzip2Codec::new().compress(&block).unwrap();
    let zs = ZstandardCodec::default().compress(&block).unwrap();

    assert!(ZstandardCodec::default().decompress(&bz).is_err());
    assert!(Bzip2Codec::new().decompress(&zs).is_err());
}
