use super::*;

/// Probe: is the `IEND` tag at `offset`?
#[inline]
#[must_use]
pub fn validate_iend_tag(view: &ImageView<'_>, offset: usize) -> bool {
  is_tag_at(view, offset, ChunkTag::IEND)
}

/// Probe: is the end-of-file marker (the `IEND` chunk's CRC) at `offset`?
#[inline]
#[must_use]
pub fn validate_eof(view: &ImageView<'_>, offset: usize) -> bool {
  view.u32_at(offset) == Some(EOF_MARKER)
}

/// Runs both end probes against a resolved layout.
#[inline]
pub fn check_end(view: &ImageView<'_>, offsets: &ChunkOffsets) -> PngResult<()> {
  if !validate_iend_tag(view, offsets.iend_tag) {
    warn!("no IEND tag at {}", offsets.iend_tag);
    Err(PngError::StructuralInvalid(Structure::Iend))
  } else if !validate_eof(view, offsets.eof) {
    warn!("no end-of-file marker at {}", offsets.eof);
    Err(PngError::StructuralInvalid(Structure::EofMarker))
  } else {
    Ok(())
  }
}
