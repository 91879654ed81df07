use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::Result;

/// Core block compression abstraction.
///
/// A container writer hands one whole block to [`compress`] and stores the
/// result next to the codec's [`name`]. A container reader resolves that
/// recorded name back to a codec and calls [`decompress`].
///
/// Each `Codec` implementation:
/// - Is identified by a stable `name()` written into container metadata.
///   Two codecs are equal iff they report the same name, whatever their
///   configured level or scratch state.
/// - Transforms one block completely per call. No state may carry from one
///   call into the result of another.
/// - May keep a scratch buffer for `compress`, which is why it takes
///   `&mut self`. Give each concurrent writer its own instance.
///   `decompress` allocates per call and is safe to share.
///
/// [`compress`]: Codec::compress
/// [`decompress`]: Codec::decompress
/// [`name`]: Codec::name
pub trait Codec: Send + Sync + fmt::Debug {
    /// Stable registry name, e.g. `"bzip2"`.
    fn name(&self) -> &'static str;

    /// Compress a single block in one shot.
    fn compress(&mut self, raw: &[u8]) -> Result<Vec<u8>>;

    /// Decompress a block previously produced by [`Codec::compress`] of the
    /// same algorithm.
    fn decompress(&self, compressed: &[u8]) -> Result<Vec<u8>>;
}

impl<'a> PartialEq for dyn Codec + 'a {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl<'a> Eq for dyn Codec + 'a {}

impl<'a> Hash for dyn Codec + 'a {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl<'a> fmt::Display for dyn Codec + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
