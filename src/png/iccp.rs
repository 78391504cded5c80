use super::*;

/// Longest allowed profile name, counting the null terminator.
///
/// The PNG spec allows 1-79 bytes of name plus the terminator, but names that
/// reach 80 total bytes are rejected here.
pub const PROFILE_NAME_MAX_LEN: usize = 79;

/// Where the pieces of an embedded ICC profile chunk sit in the buffer.
///
/// The chunk data is:
/// * profile name (1-79 bytes)
/// * null byte
/// * compression method (only zlib is defined)
/// * compressed profile bytes
///
/// The compressed profile has no stored length of its own. Its length is
/// recovered by scanning forward for the `IDAT` tag and stepping back over
/// the length word in front of it, so the result also takes in the `iCCP`
/// chunk's CRC word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(nonstandard_style)]
pub struct iCCPLayout {
  /// Offset of the `iCCP` tag.
  pub tag: usize,
  /// Offset of the first byte of the profile name.
  pub data: usize,
  /// Name length, including the null terminator.
  pub name_len: OptionalField<usize>,
  /// Length of the compressed profile bytes.
  pub profile_len: OptionalField<usize>,
}
impl iCCPLayout {
  /// Lays out the `iCCP` chunk whose tag is at `tag`.
  ///
  /// When the sRGB probe also hit, the name and profile are not looked for
  /// at all and both come back [`Absent`](OptionalField::Absent): an `sRGB`
  /// chunk is taken to mean that there's no profile data to extract.
  #[must_use]
  pub fn locate(view: &ImageView<'_>, tag: usize, srgb_present: bool) -> Self {
    let data = tag + TAG_SIZE;
    if srgb_present {
      debug!("iCCP at {tag}: sRGB also present, profile data not extracted");
      return Self {
        tag,
        data,
        name_len: OptionalField::Absent,
        profile_len: OptionalField::Absent,
      };
    }
    let name_len = profile_name_len(view, data);
    let profile_len = name_len.and_then(|n| compressed_profile_len(view, data + n + 1));
    if name_len.is_invalid() {
      warn!("iCCP at {tag}: profile name is unterminated or too long");
    } else if profile_len.is_invalid() {
      warn!("iCCP at {tag}: no IDAT tag after the compressed profile");
    }
    Self { tag, data, name_len, profile_len }
  }

  /// Offset of the compression method byte.
  #[inline]
  #[must_use]
  pub fn compression_method_offset(&self) -> Option<usize> {
    self.name_len.present().map(|n| self.data + n)
  }

  /// Offset of the first compressed profile byte.
  #[inline]
  #[must_use]
  pub fn profile_offset(&self) -> Option<usize> {
    self.name_len.present().map(|n| self.data + n + 1)
  }

  /// Name, compression byte, and compressed profile, all together.
  #[inline]
  #[must_use]
  pub fn data_size(&self) -> OptionalField<usize> {
    self.name_len.and_then(|n| self.profile_len.map(|p| n + 1 + p))
  }
}

/// Length of the null terminated profile name starting at `data`, terminator
/// included.
#[must_use]
pub fn profile_name_len(view: &ImageView<'_>, data: usize) -> OptionalField<usize> {
  match view.find_zero(data, PROFILE_NAME_MAX_LEN) {
    Some(zero) => OptionalField::Present(zero - data + 1),
    None => OptionalField::Invalid,
  }
}

/// Recovers the compressed profile length for a profile starting at `start`.
///
/// A 32-bit word is read at `start + 1`, `start + 2`, and so on until one
/// equals the `IDAT` tag. If that's `k` bytes past `start`, the length is
/// `k - 4`.
#[must_use]
pub fn compressed_profile_len(view: &ImageView<'_>, start: usize) -> OptionalField<usize> {
  view
    .find_u32(start + 1, ChunkTag::IDAT.0)
    .and_then(|idat| (idat - start).checked_sub(LENGTH_SIZE))
    .into()
}

/// Embedded ICC profile, copied out of the buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[allow(nonstandard_style)]
#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
pub struct iCCP {
  profile_name: OptionalField<Vec<u8>>,
  compression_method: OptionalField<u8>,
  compressed_profile: OptionalField<Vec<u8>>,
}
#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
impl iCCP {
  /// Copies the profile name and compressed profile into owned buffers.
  ///
  /// Fields that the layout couldn't find stay `Absent` or `Invalid`. Only a
  /// failed allocation (or a layout that points outside the buffer) is an
  /// error.
  pub fn extract(view: &ImageView<'_>, layout: &iCCPLayout) -> PngResult<Self> {
    let profile_name = match layout.name_len {
      OptionalField::Present(n) => OptionalField::Present(view.to_owned_bytes(layout.data, n)?),
      OptionalField::Invalid => OptionalField::Invalid,
      OptionalField::Absent => OptionalField::Absent,
    };
    let compression_method = match layout.compression_method_offset() {
      Some(at) => view.u8_at(at).into(),
      None => layout.name_len.map(|_| 0),
    };
    let compressed_profile = match (layout.profile_offset(), layout.profile_len) {
      (Some(at), OptionalField::Present(len)) => {
        OptionalField::Present(view.to_owned_bytes(at, len)?)
      }
      (_, OptionalField::Absent) => OptionalField::Absent,
      _ => OptionalField::Invalid,
    };
    Ok(Self { profile_name, compression_method, compressed_profile })
  }

  /// The profile name bytes, including the null terminator.
  #[inline]
  #[must_use]
  pub fn profile_name(&self) -> OptionalField<&[u8]> {
    self.profile_name.as_ref().map(Vec::as_slice)
  }

  /// The profile name bytes without the null terminator.
  #[inline]
  #[must_use]
  pub fn keyword(&self) -> OptionalField<&[u8]> {
    self.profile_name().map(|name| name.strip_suffix(&[0_u8]).unwrap_or(name))
  }

  #[inline]
  #[must_use]
  pub fn compression_method(&self) -> OptionalField<u8> {
    self.compression_method
  }

  /// The compressed profile bytes, as recovered by the forward scan.
  #[inline]
  #[must_use]
  pub fn compressed_profile(&self) -> OptionalField<&[u8]> {
    self.compressed_profile.as_ref().map(Vec::as_slice)
  }

  /// Drops both owned buffers, reporting how many of them there were.
  #[must_use]
  pub fn release(self) -> FreeOutcome {
    let owned = [self.profile_name.is_present(), self.compressed_profile.is_present()];
    FreeOutcome::from_counts(owned.iter().filter(|&&b| b).count(), owned.len())
  }
}
