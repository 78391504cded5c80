/// Which mandatory piece of the PNG layout failed its check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Structure {
  /// The first 8 bytes aren't the PNG signature.
  Signature,
  /// The first chunk isn't a 13 byte `IHDR` chunk.
  Ihdr,
  /// There's no `IEND` tag right after the image data chunk.
  Iend,
  /// The `IEND` chunk's trailing word isn't the end-of-file marker.
  EofMarker,
}

/// An error from the `pngmap` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PngError {
  /// A mandatory part of the layout is wrong, so no context can be built.
  StructuralInvalid(Structure),

  /// The forward scan for the `IDAT` tag reached the end of the buffer.
  ///
  /// `start` is where the scan began.
  UnderrunDuringScan {
    /// Offset the scan started from.
    start: usize,
  },

  /// A read would have gone outside of the buffer.
  OutOfBounds {
    /// Offset of the attempted read.
    offset: usize,
    /// Size of the attempted read.
    size: usize,
  },

  /// The allocator couldn't give us enough space.
  #[cfg(feature = "alloc")]
  Alloc,

  /// A checked math operation on an offset failed.
  CheckedMath,
}
#[cfg(feature = "alloc")]
impl From<alloc::collections::TryReserveError> for PngError {
  #[inline]
  fn from(_: alloc::collections::TryReserveError) -> Self {
    Self::Alloc
  }
}
impl core::fmt::Display for PngError {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::StructuralInvalid(s) => write!(f, "invalid PNG structure: {s:?}"),
      Self::UnderrunDuringScan { start } => {
        write!(f, "no IDAT tag found scanning forward from offset {start}")
      }
      Self::OutOfBounds { offset, size } => {
        write!(f, "read of {size} bytes at offset {offset} is outside the buffer")
      }
      #[cfg(feature = "alloc")]
      Self::Alloc => write!(f, "allocation failed"),
      Self::CheckedMath => write!(f, "offset arithmetic overflowed"),
    }
  }
}

/// Shorthand for results with a [`PngError`].
pub type PngResult<T> = Result<T, PngError>;
