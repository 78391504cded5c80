use super::*;

pub const SIGNATURE_SIZE: usize = 8;
pub const LENGTH_SIZE: usize = 4;
pub const TAG_SIZE: usize = 4;
pub const CRC_SIZE: usize = 4;

/// `IHDR` data is always 13 bytes.
pub const IHDR_DATA_SIZE: usize = 13;
/// `sRGB` data is the one rendering intent byte.
pub const SRGB_DATA_SIZE: usize = 1;

/// Where the `IHDR` data starts, right after the first length and tag.
pub const IHDR_DATA_OFFSET: usize = SIGNATURE_SIZE + LENGTH_SIZE + TAG_SIZE;
/// Where the `IHDR` chunk's stored CRC is.
pub const FIRST_CRC_OFFSET: usize = IHDR_DATA_OFFSET + IHDR_DATA_SIZE;
/// Where the tag of the chunk after `IHDR` is, which is where we look for
/// `iCCP`.
pub const ICCP_PROBE_OFFSET: usize = FIRST_CRC_OFFSET + CRC_SIZE + LENGTH_SIZE;

/// How far the `sRGB` probe moves past the `iCCP` probe.
///
/// This is just the tag size when `iCCP` is there, and 0 otherwise.
#[inline]
#[must_use]
pub const fn iccp_padding(iccp_present: bool) -> usize {
  if iccp_present {
    TAG_SIZE
  } else {
    0
  }
}

/// Byte offsets of every chunk boundary in a PNG buffer.
///
/// Rather than walking every chunk, the offsets are chained together from the
/// fixed sizes of the chunks we know about:
///
/// * The `IHDR` chunk has a fixed spot and size, which puts the tag of the
///   following chunk at a fixed spot too. That's where `iCCP` is probed for.
/// * The `sRGB` probe goes just past the `iCCP` tag if `iCCP` was found,
///   otherwise it's the same spot.
/// * The `IDAT` tag should be right after whatever space `iCCP` and `sRGB`
///   took up. When it isn't (some other chunk is in the way), we scan forward
///   one byte at a time until the `IDAT` tag turns up. Running out of buffer
///   during that scan is an error.
/// * Everything after that follows from the `IDAT` declared length.
///
/// All offsets are from the start of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkOffsets {
  /// Stored CRC of the `IHDR` chunk.
  pub first_crc: usize,
  /// Layout of the `iCCP` chunk, if the probe found one.
  pub iccp: Option<iCCPLayout>,
  /// Where the `sRGB` tag was probed for.
  pub srgb_tag: usize,
  pub srgb_present: bool,
  /// The `IDAT` tag.
  pub idat_tag: usize,
  /// If the `IDAT` tag had to be found with the forward scan.
  pub idat_scanned: bool,
  /// First byte of the image data.
  pub idat_data: usize,
  /// Declared length of the image data.
  pub idat_len: usize,
  /// Stored CRC of the `IDAT` chunk.
  pub last_crc: usize,
  /// The `IEND` tag.
  pub iend_tag: usize,
  /// The end-of-file marker, which is the `IEND` chunk's stored CRC.
  pub eof: usize,
}
impl ChunkOffsets {
  /// Works out all the offsets for the PNG bytes in `view`.
  ///
  /// This only checks what it has to in order to find its way. Use
  /// [`validate_header`], [`validate_ihdr_tag`] and [`check_end`] to check
  /// the mandatory structure.
  ///
  /// ## Failure
  /// * [`PngError::UnderrunDuringScan`] if there's no `IDAT` tag.
  /// * [`PngError::CheckedMath`] if the `IDAT` declared length sends the
  ///   offsets past `usize::MAX`.
  pub fn resolve(view: &ImageView<'_>) -> PngResult<Self> {
    let first_crc = FIRST_CRC_OFFSET;

    let iccp_tag = ICCP_PROBE_OFFSET;
    let iccp_present = is_tag_at(view, iccp_tag, ChunkTag::iCCP);
    let srgb_tag = iccp_tag + iccp_padding(iccp_present);
    let srgb_present = is_tag_at(view, srgb_tag, ChunkTag::sRGB);
    debug!("iCCP present: {iccp_present}, sRGB present: {srgb_present}");
    let iccp = iccp_present.then(|| iCCPLayout::locate(view, iccp_tag, srgb_present));

    let mut position = srgb_tag;
    if let Some(layout) = &iccp {
      position += TAG_SIZE + layout.data_size().present().unwrap_or(0);
    }
    if srgb_present {
      position += TAG_SIZE + SRGB_DATA_SIZE;
    }
    let (idat_tag, idat_scanned) = if is_tag_at(view, position, ChunkTag::IDAT) {
      (position, false)
    } else {
      debug!("no IDAT tag at {position}, scanning forward");
      let found = view
        .find_u32(position + 1, ChunkTag::IDAT.0)
        .ok_or(PngError::UnderrunDuringScan { start: position })?;
      (found, true)
    };

    // the scan never returns anything before the probe spot, so there's
    // always a length word in front of the tag.
    let idat_len = view
      .u32_at(idat_tag - LENGTH_SIZE)
      .ok_or(PngError::OutOfBounds { offset: idat_tag - LENGTH_SIZE, size: LENGTH_SIZE })?
      as usize;
    let idat_data = idat_tag + TAG_SIZE;
    let last_crc = idat_data.checked_add(idat_len).ok_or(PngError::CheckedMath)?;
    let iend_tag = last_crc.checked_add(CRC_SIZE + LENGTH_SIZE).ok_or(PngError::CheckedMath)?;
    let eof = iend_tag.checked_add(TAG_SIZE).ok_or(PngError::CheckedMath)?;

    let out = Self {
      first_crc,
      iccp,
      srgb_tag,
      srgb_present,
      idat_tag,
      idat_scanned,
      idat_data,
      idat_len,
      last_crc,
      iend_tag,
      eof,
    };
    trace!("{out:?}");
    debug_assert!(out.is_strictly_increasing());
    Ok(out)
  }

  #[inline]
  #[must_use]
  pub const fn iccp_present(&self) -> bool {
    self.iccp.is_some()
  }

  /// Every boundary that's actually in the image, in order: signature,
  /// `IHDR` tag, first CRC, `iCCP` tag, `sRGB` tag, `IDAT` tag, last CRC,
  /// `IEND` tag, end-of-file marker.
  ///
  /// Optional chunks that aren't there are `None`.
  #[must_use]
  pub fn boundaries(&self) -> [Option<usize>; 9] {
    [
      Some(0),
      Some(SIGNATURE_SIZE + LENGTH_SIZE),
      Some(self.first_crc),
      self.iccp.map(|layout| layout.tag),
      self.srgb_present.then_some(self.srgb_tag),
      Some(self.idat_tag),
      Some(self.last_crc),
      Some(self.iend_tag),
      Some(self.eof),
    ]
  }

  #[must_use]
  pub fn is_strictly_increasing(&self) -> bool {
    let b = self.boundaries();
    b.iter().flatten().zip(b.iter().flatten().skip(1)).all(|(x, y)| x < y)
  }
}
