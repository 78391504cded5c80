use super::*;

/// The first eight bytes of a PNG datastream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// [`PNG_SIGNATURE`] as a normalized 64-bit value.
pub const PNG_SIGNATURE_U64: u64 = 0x8950_4E47_0D0A_1A0A;

/// The stored CRC of an empty `IEND` chunk, which is always the same value.
///
/// It's the last word of every well formed PNG, so it doubles as an
/// end-of-file marker.
pub const EOF_MARKER: u32 = 0xAE42_6082;

/// A 4-byte chunk type, held as a normalized 32-bit value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ChunkTag(pub u32);
#[allow(nonstandard_style)]
impl ChunkTag {
  pub const IHDR: Self = Self::from_ascii(*b"IHDR");
  pub const iCCP: Self = Self::from_ascii(*b"iCCP");
  pub const sRGB: Self = Self::from_ascii(*b"sRGB");
  pub const IDAT: Self = Self::from_ascii(*b"IDAT");
  pub const IEND: Self = Self::from_ascii(*b"IEND");

  /// Tag from its ascii name, such as `*b"IDAT"`.
  #[inline]
  #[must_use]
  pub const fn from_ascii(name: [u8; 4]) -> Self {
    Self(u32::from_be_bytes(name))
  }

  /// The ascii name of this tag.
  #[inline]
  #[must_use]
  pub const fn to_ascii(self) -> [u8; 4] {
    self.0.to_be_bytes()
  }
}
impl Debug for ChunkTag {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let [a, b, c, d] = self.to_ascii();
    write!(f, "{}{}{}{}", a as char, b as char, c as char, d as char)
  }
}

/// The tag stored at `offset`, if a whole word fits there.
#[inline]
#[must_use]
pub fn tag_at(view: &ImageView<'_>, offset: usize) -> Option<ChunkTag> {
  view.u32_at(offset).map(ChunkTag)
}

/// Probe: is `tag` stored at `offset`?
#[inline]
#[must_use]
pub fn is_tag_at(view: &ImageView<'_>, offset: usize, tag: ChunkTag) -> bool {
  tag_at(view, offset) == Some(tag)
}

/// Checks that the buffer starts with the PNG signature.
#[inline]
#[must_use]
pub fn validate_header(view: &ImageView<'_>) -> bool {
  view.u64_at(0) == Some(PNG_SIGNATURE_U64)
}

/// The length field of the first chunk, which should be the `IHDR` chunk.
#[inline]
#[must_use]
pub fn ihdr_declared_len(view: &ImageView<'_>) -> Option<u32> {
  view.u32_at(SIGNATURE_SIZE)
}

/// Checks that the first chunk is tagged `IHDR` and declares the fixed
/// 13 byte `IHDR` payload.
#[inline]
#[must_use]
pub fn validate_ihdr_tag(view: &ImageView<'_>) -> bool {
  is_tag_at(view, SIGNATURE_SIZE + LENGTH_SIZE, ChunkTag::IHDR)
    && ihdr_declared_len(view) == Some(IHDR_DATA_SIZE as u32)
}
