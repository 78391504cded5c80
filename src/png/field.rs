/// The result of extracting a field from an optional chunk.
///
/// Optional chunks never fail the whole parse. Instead each of their fields
/// ends up in one of these three states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionalField<T> {
  /// The chunk isn't in the image (or isn't being extracted).
  Absent,
  /// The chunk is there, but the field broke its size limit or couldn't be
  /// found inside the buffer.
  Invalid,
  /// The field's value.
  Present(T),
}
impl<T> OptionalField<T> {
  #[inline]
  #[must_use]
  pub const fn is_absent(&self) -> bool {
    matches!(self, Self::Absent)
  }

  #[inline]
  #[must_use]
  pub const fn is_invalid(&self) -> bool {
    matches!(self, Self::Invalid)
  }

  #[inline]
  #[must_use]
  pub const fn is_present(&self) -> bool {
    matches!(self, Self::Present(_))
  }

  /// The value, if there is one.
  #[inline]
  #[must_use]
  pub fn present(self) -> Option<T> {
    match self {
      Self::Present(t) => Some(t),
      _ => None,
    }
  }

  #[inline]
  #[must_use]
  pub fn as_ref(&self) -> OptionalField<&T> {
    match self {
      Self::Absent => OptionalField::Absent,
      Self::Invalid => OptionalField::Invalid,
      Self::Present(t) => OptionalField::Present(t),
    }
  }

  #[inline]
  #[must_use]
  pub fn map<U>(self, op: impl FnOnce(T) -> U) -> OptionalField<U> {
    match self {
      Self::Absent => OptionalField::Absent,
      Self::Invalid => OptionalField::Invalid,
      Self::Present(t) => OptionalField::Present(op(t)),
    }
  }

  /// Chains another extraction step that might itself come up invalid.
  #[inline]
  #[must_use]
  pub fn and_then<U>(self, op: impl FnOnce(T) -> OptionalField<U>) -> OptionalField<U> {
    match self {
      Self::Absent => OptionalField::Absent,
      Self::Invalid => OptionalField::Invalid,
      Self::Present(t) => op(t),
    }
  }
}
impl<T> From<Option<T>> for OptionalField<T> {
  /// `None` means the chunk was there but the field couldn't be read.
  #[inline]
  fn from(opt: Option<T>) -> Self {
    match opt {
      Some(t) => Self::Present(t),
      None => Self::Invalid,
    }
  }
}
