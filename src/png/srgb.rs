use super::*;

/// Reads the sRGB rendering intent byte that follows the `sRGB` tag.
///
/// Spec: [sRGB](https://www.w3.org/TR/png/#11sRGB)
#[inline]
#[must_use]
pub fn rendering_intent(view: &ImageView<'_>, offsets: &ChunkOffsets) -> OptionalField<u8> {
  if offsets.srgb_present {
    view.u8_at(offsets.srgb_tag + TAG_SIZE).into()
  } else {
    OptionalField::Absent
  }
}

/// Maps a PNG `sRGB` rendering intent byte to the intent it names.
#[inline]
#[must_use]
pub const fn srgb_intent_from_png(byte: u8) -> Option<SrgbIntent> {
  Some(match byte {
    0 => SrgbIntent::Perceptual,
    1 => SrgbIntent::RelativeColorimetric,
    2 => SrgbIntent::Saturation,
    3 => SrgbIntent::AbsoluteColorimetric,
    _ => return None,
  })
}
