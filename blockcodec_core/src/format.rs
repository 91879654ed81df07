/// Registry name of the verbatim codec.
pub const NULL_CODEC: &str = "null";

/// Registry name of the raw DEFLATE codec.
pub const DEFLATE_CODEC: &str = "deflate";

/// Registry name of the bzip2 codec.
pub const BZIP2_CODEC: &str = "bzip2";

/// Registry name of the Zstandard codec.
pub const ZSTANDARD_CODEC: &str = "zstandard";

/// Chunk size used when draining a decoder: 64 KB.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

// ── Levels ─────────────────────────────────────────────────────────────────

/// Default DEFLATE level (0 = store, 9 = smallest).
pub const DEFAULT_DEFLATE_LEVEL: u32 = 6;

/// Highest level accepted by DEFLATE.
pub const MAX_DEFLATE_LEVEL: u32 = 9;

/// Default Zstandard level.
pub const DEFAULT_ZSTANDARD_LEVEL: i32 = 3;
