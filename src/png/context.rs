use super::*;

/// Runtime options for [`parse_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ParseConfig {
  /// How the buffer's integer fields are stored. Normal PNG data is
  /// [`ByteOrder::Big`].
  pub byte_order: ByteOrder,
}

/// How much a teardown actually released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FreeOutcome {
  /// There was nothing to release.
  Nothing,
  /// Only some of the owned buffers were there to release.
  Partial,
  /// Every owned buffer was released.
  All,
}
impl FreeOutcome {
  /// Outcome for releasing `released` out of `total` possible buffers.
  #[inline]
  #[must_use]
  pub const fn from_counts(released: usize, total: usize) -> Self {
    if released == 0 {
      Self::Nothing
    } else if released >= total {
      Self::All
    } else {
      Self::Partial
    }
  }
}

/// The two stored CRC words. They're kept as read, not checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CrcPair {
  /// Trailing the `IHDR` chunk.
  pub first: u32,
  /// Trailing the `IDAT` chunk.
  pub last: u32,
}

/// Reads the stored CRC words at the resolved offsets.
///
/// A CRC word that doesn't fit in the buffer is an
/// [`OutOfBounds`](PngError::OutOfBounds) error, never a zero.
pub fn crc_pair(view: &ImageView<'_>, offsets: &ChunkOffsets) -> PngResult<CrcPair> {
  let word = |offset: usize| view.u32_at(offset).ok_or(PngError::OutOfBounds { offset, size: 4 });
  Ok(CrcPair { first: word(offsets.first_crc)?, last: word(offsets.last_crc)? })
}

/// Everything extracted from one PNG buffer.
///
/// The context owns its copies of all variable sized data, so it doesn't
/// borrow the buffer it came from. Dropping it frees everything, and
/// [`release`](DecodeContext::release) does the same while reporting what was
/// there.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
pub struct DecodeContext {
  offsets: ChunkOffsets,
  ihdr: IHDR,
  iccp: Option<iCCP>,
  rendering_intent: OptionalField<u8>,
  idat: IDAT,
  crc: CrcPair,
}

/// Parses standard PNG bytes into a [`DecodeContext`].
///
/// ## Failure
/// * [`PngError::StructuralInvalid`] if the signature, the `IHDR` chunk, the
///   `IEND` tag, or the end-of-file marker are wrong.
/// * [`PngError::UnderrunDuringScan`] if there's no `IDAT` tag.
/// * [`PngError::Alloc`] if an owned copy couldn't be allocated. Anything
///   already copied is dropped before returning.
///
/// Problems with the optional `iCCP` and `sRGB` chunks never fail the parse,
/// they just show up as [`OptionalField::Invalid`] values.
#[inline]
pub fn parse(bytes: &[u8]) -> PngResult<DecodeContext> {
  parse_with(bytes, ParseConfig::default())
}

/// Like [`parse`], with explicit options.
pub fn parse_with(bytes: &[u8], config: ParseConfig) -> PngResult<DecodeContext> {
  DecodeContext::new(&ImageView::with_byte_order(bytes, config.byte_order))
}

/// Tears down a context (if there is one), reporting what was released.
#[inline]
pub fn release(ctx: Option<DecodeContext>) -> FreeOutcome {
  ctx.map_or(FreeOutcome::Nothing, DecodeContext::release)
}

impl DecodeContext {
  /// Checks the mandatory structure, then copies out every chunk.
  pub(crate) fn new(view: &ImageView<'_>) -> PngResult<Self> {
    if !validate_header(view) {
      warn!("bad PNG signature");
      return Err(PngError::StructuralInvalid(Structure::Signature));
    }
    if !validate_ihdr_tag(view) {
      warn!("first chunk isn't a 13 byte IHDR, declared length {:?}", ihdr_declared_len(view));
      return Err(PngError::StructuralInvalid(Structure::Ihdr));
    }
    let offsets = ChunkOffsets::resolve(view)?;
    check_end(view, &offsets)?;

    let ihdr = IHDR::extract(view)?;
    let iccp = match &offsets.iccp {
      Some(layout) => Some(iCCP::extract(view, layout)?),
      None => None,
    };
    let rendering_intent = rendering_intent(view, &offsets);
    let idat = IDAT::extract(view, &offsets)?;
    let crc = crc_pair(view, &offsets)?;
    Ok(Self { offsets, ihdr, iccp, rendering_intent, idat, crc })
  }

  #[inline]
  #[must_use]
  pub const fn offsets(&self) -> &ChunkOffsets {
    &self.offsets
  }

  #[inline]
  #[must_use]
  pub const fn ihdr(&self) -> &IHDR {
    &self.ihdr
  }

  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.ihdr.width
  }

  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.ihdr.height
  }

  #[inline]
  #[must_use]
  pub const fn bit_depth(&self) -> u8 {
    self.ihdr.bit_depth
  }

  #[inline]
  #[must_use]
  pub const fn color_type(&self) -> u8 {
    self.ihdr.color_type
  }

  /// Size of the `IHDR` data, always 13 once parsing worked.
  #[inline]
  #[must_use]
  pub const fn ihdr_data_size(&self) -> usize {
    IHDR_DATA_SIZE
  }

  #[inline]
  #[must_use]
  pub const fn iccp(&self) -> Option<&iCCP> {
    self.iccp.as_ref()
  }

  /// Profile name including its null terminator.
  #[inline]
  #[must_use]
  pub fn icc_profile_name(&self) -> OptionalField<&[u8]> {
    self.iccp.as_ref().map_or(OptionalField::Absent, iCCP::profile_name)
  }

  #[inline]
  #[must_use]
  pub fn icc_compression_method(&self) -> OptionalField<u8> {
    self.iccp.as_ref().map_or(OptionalField::Absent, iCCP::compression_method)
  }

  #[inline]
  #[must_use]
  pub fn icc_compressed_profile(&self) -> OptionalField<&[u8]> {
    self.iccp.as_ref().map_or(OptionalField::Absent, iCCP::compressed_profile)
  }

  /// Total size of the `iCCP` data as worked out by the layout.
  #[inline]
  #[must_use]
  pub fn iccp_data_size(&self) -> OptionalField<usize> {
    self.offsets.iccp.map_or(OptionalField::Absent, |layout| layout.data_size())
  }

  #[inline]
  #[must_use]
  pub const fn srgb_present(&self) -> bool {
    self.offsets.srgb_present
  }

  #[inline]
  #[must_use]
  pub const fn rendering_intent(&self) -> OptionalField<u8> {
    self.rendering_intent
  }

  /// The rendering intent, if it's one of the four defined values.
  #[inline]
  #[must_use]
  pub fn srgb_intent(&self) -> Option<SrgbIntent> {
    self.rendering_intent.present().and_then(srgb_intent_from_png)
  }

  /// The compressed image bytes of the `IDAT` chunk.
  #[inline]
  #[must_use]
  pub fn raw_image_bytes(&self) -> &[u8] {
    self.idat.as_bytes()
  }

  #[inline]
  #[must_use]
  pub const fn crc_pair(&self) -> CrcPair {
    self.crc
  }

  #[inline]
  #[must_use]
  pub const fn first_crc(&self) -> u32 {
    self.crc.first
  }

  #[inline]
  #[must_use]
  pub const fn last_crc(&self) -> u32 {
    self.crc.last
  }

  /// Drops the context, reporting which of its owned parts were there.
  ///
  /// The header and image data are always owned. The `iCCP` part only counts
  /// as fully released if both of its own buffers were there, so a context
  /// without a complete profile reports [`FreeOutcome::Partial`].
  #[must_use]
  pub fn release(self) -> FreeOutcome {
    let iccp_outcome = self.iccp.map_or(FreeOutcome::Nothing, iCCP::release);
    trace!("iCCP release: {iccp_outcome:?}");
    let owned = [true, iccp_outcome == FreeOutcome::All, true];
    FreeOutcome::from_counts(owned.iter().filter(|&&b| b).count(), owned.len())
  }
}
