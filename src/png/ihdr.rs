use super::*;

/// The `IHDR` data exactly as it's laid out in the buffer.
#[derive(Debug, Clone, Copy, Zeroable, Pod)]
#[repr(C)]
struct RawIHDR {
  width: [u8; 4],
  height: [u8; 4],
  bit_depth: u8,
  color_type: u8,
  compression_method: u8,
  filter_method: u8,
  interlace_method: u8,
}

/// Image Header
///
/// The values are copied out as-is. Nothing here checks that the bit depth
/// and color type are a legal combination, or that the methods are ones the
/// PNG spec defines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IHDR {
  /// width in pixels
  pub width: u32,
  /// height in pixels
  pub height: u32,
  /// bits per channel
  pub bit_depth: u8,
  /// pixel color type
  pub color_type: u8,
  /// should always be 0 (zlib)
  pub compression_method: u8,
  /// should always be 0 (adaptive filtering)
  pub filter_method: u8,
  /// 0 for no interlace, 1 for Adam7
  pub interlace_method: u8,
}
impl IHDR {
  /// Reads the header from its fixed spot right after the first chunk's
  /// length and tag.
  ///
  /// Call [`validate_ihdr_tag`] first, this doesn't look at the tag.
  pub fn extract(view: &ImageView<'_>) -> PngResult<Self> {
    let bytes = view.bytes(IHDR_DATA_OFFSET, IHDR_DATA_SIZE)?;
    let raw: RawIHDR = bytemuck::try_pod_read_unaligned(bytes)
      .map_err(|_| PngError::OutOfBounds { offset: IHDR_DATA_OFFSET, size: IHDR_DATA_SIZE })?;
    let order = view.byte_order();
    Ok(Self {
      width: order.u32_from(raw.width),
      height: order.u32_from(raw.height),
      bit_depth: raw.bit_depth,
      color_type: raw.color_type,
      compression_method: raw.compression_method,
      filter_method: raw.filter_method,
      interlace_method: raw.interlace_method,
    })
  }

  #[inline]
  #[must_use]
  pub const fn is_interlaced(&self) -> bool {
    self.interlace_method != 0
  }
}
