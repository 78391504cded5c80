use super::*;

/// Image Data, copied out of the buffer.
///
/// * This is still zlib compressed (and the decompressed data is still
///   filtered).
/// * Only the first `IDAT` chunk is taken. Images that split their data over
///   more than one chunk will only have the first part here.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
pub struct IDAT(Vec<u8>);
impl Debug for IDAT {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("IDAT").field(&&self.0[..self.0.len().min(12)]).field(&self.0.len()).finish()
  }
}
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
impl IDAT {
  /// Copies exactly the declared number of bytes after the `IDAT` tag.
  #[inline]
  pub fn extract(view: &ImageView<'_>, offsets: &ChunkOffsets) -> PngResult<Self> {
    view.to_owned_bytes(offsets.idat_data, offsets.idat_len).map(Self)
  }

  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    &self.0
  }

  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Gives up the owned bytes.
  #[inline]
  #[must_use]
  pub fn into_vec(self) -> Vec<u8> {
    self.0
  }
}
