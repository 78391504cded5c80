//! Byte order normalization for the integer fields of a PNG buffer.
//!
//! PNG stores every multi-byte integer big-endian. A buffer that some other
//! code has already rewritten into host order can be inspected too, by using
//! [`ByteOrder::Native`], which turns all of the normalization into a no-op.

/// How multi-byte fields are stored in the buffer being inspected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
  /// Standard PNG data: fields are big-endian and get swapped to host order.
  #[default]
  Big,
  /// Fields are already in host order, nothing is swapped.
  Native,
}
impl ByteOrder {
  /// Normalize a 32-bit field to a host `u32`.
  #[inline]
  #[must_use]
  pub const fn u32_from(self, bytes: [u8; 4]) -> u32 {
    match self {
      Self::Big => u32::from_be_bytes(bytes),
      Self::Native => u32::from_ne_bytes(bytes),
    }
  }

  /// Normalize a 64-bit field to a host `u64`.
  #[inline]
  #[must_use]
  pub const fn u64_from(self, bytes: [u8; 8]) -> u64 {
    match self {
      Self::Big => u64::from_be_bytes(bytes),
      Self::Native => u64::from_ne_bytes(bytes),
    }
  }

  /// Store a host `u32` the way this byte order expects to find it.
  ///
  /// This is the inverse of [`u32_from`](Self::u32_from).
  #[inline]
  #[must_use]
  pub const fn u32_to(self, u: u32) -> [u8; 4] {
    match self {
      Self::Big => u.to_be_bytes(),
      Self::Native => u.to_ne_bytes(),
    }
  }

  /// Store a host `u64` the way this byte order expects to find it.
  #[inline]
  #[must_use]
  pub const fn u64_to(self, u: u64) -> [u8; 8] {
    match self {
      Self::Big => u.to_be_bytes(),
      Self::Native => u.to_ne_bytes(),
    }
  }
}

#[test]
fn test_byte_order_normalization() {
  let bytes = [0x49, 0x48, 0x44, 0x52];
  assert_eq!(ByteOrder::Big.u32_from(bytes), 0x4948_4452);
  assert_eq!(ByteOrder::Native.u32_from(bytes), u32::from_ne_bytes(bytes));
  assert_eq!(ByteOrder::Big.u32_from(ByteOrder::Big.u32_to(0xAE42_6082)), 0xAE42_6082);
  assert_eq!(ByteOrder::Native.u32_from(ByteOrder::Native.u32_to(13)), 13);

  let sig = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
  assert_eq!(ByteOrder::Big.u64_from(sig), 0x8950_4E47_0D0A_1A0A);
  assert_eq!(ByteOrder::Native.u64_from(sig), u64::from_ne_bytes(sig));
}
