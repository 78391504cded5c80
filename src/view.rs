#![forbid(unsafe_code)]

//! A bounds-checked view over the input buffer.
//!
//! Every read takes an explicit offset, and reads that would leave
//! `[0, len)` come back as `None` (for probes) or as
//! [`PngError::OutOfBounds`] (for extraction).

use crate::{ByteOrder, PngError, PngResult};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Borrowed PNG bytes, plus the byte order their integer fields use.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageView<'b> {
  bytes: &'b [u8],
  order: ByteOrder,
}
impl core::fmt::Debug for ImageView<'_> {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ImageView")
      .field("bytes", &(&self.bytes[..self.bytes.len().min(12)], self.bytes.len()))
      .field("order", &self.order)
      .finish()
  }
}
impl<'b> ImageView<'b> {
  /// A view over standard (big-endian) PNG bytes.
  #[inline]
  #[must_use]
  pub const fn new(bytes: &'b [u8]) -> Self {
    Self { bytes, order: ByteOrder::Big }
  }

  /// A view using some specific byte order for the integer fields.
  #[inline]
  #[must_use]
  pub const fn with_byte_order(bytes: &'b [u8], order: ByteOrder) -> Self {
    Self { bytes, order }
  }

  #[inline]
  #[must_use]
  pub const fn len(&self) -> usize {
    self.bytes.len()
  }

  #[inline]
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.bytes.is_empty()
  }

  #[inline]
  #[must_use]
  pub const fn byte_order(&self) -> ByteOrder {
    self.order
  }

  /// The `size` bytes starting at `offset`.
  #[inline]
  pub fn bytes(&self, offset: usize, size: usize) -> PngResult<&'b [u8]> {
    offset
      .checked_add(size)
      .and_then(|end| self.bytes.get(offset..end))
      .ok_or(PngError::OutOfBounds { offset, size })
  }

  /// `N` bytes starting at `offset`, copied out as an array.
  #[inline]
  #[must_use]
  pub fn array<const N: usize>(&self, offset: usize) -> Option<[u8; N]> {
    let end = offset.checked_add(N)?;
    self.bytes.get(offset..end)?.try_into().ok()
  }

  #[inline]
  #[must_use]
  pub fn u8_at(&self, offset: usize) -> Option<u8> {
    self.bytes.get(offset).copied()
  }

  /// The normalized 32-bit field at `offset`.
  #[inline]
  #[must_use]
  pub fn u32_at(&self, offset: usize) -> Option<u32> {
    self.array(offset).map(|a| self.order.u32_from(a))
  }

  /// The normalized 64-bit field at `offset`.
  #[inline]
  #[must_use]
  pub fn u64_at(&self, offset: usize) -> Option<u64> {
    self.array(offset).map(|a| self.order.u64_from(a))
  }

  /// Offset of the first zero byte at or after `start`, looking at no more
  /// than `limit` bytes.
  #[inline]
  #[must_use]
  pub fn find_zero(&self, start: usize, limit: usize) -> Option<usize> {
    let rest = self.bytes.get(start..)?;
    rest.iter().take(limit).position(|&b| b == 0).map(|p| start + p)
  }

  /// Iterates every byte offset from `start` on where a whole 32-bit word
  /// still fits, paired with the normalized word found there.
  #[inline]
  #[must_use]
  pub fn words_from(&self, start: usize) -> WordScan<'b> {
    WordScan { bytes: self.bytes, order: self.order, pos: start }
  }

  /// Offset of the first 32-bit word equal to `value` at or after `start`.
  ///
  /// The scan steps one byte at a time and stops at the end of the buffer.
  #[inline]
  #[must_use]
  pub fn find_u32(&self, start: usize, value: u32) -> Option<usize> {
    self.words_from(start).find(|&(_, w)| w == value).map(|(at, _)| at)
  }

  /// Copies `size` bytes from `offset` into a new owned buffer.
  #[cfg(feature = "alloc")]
  #[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
  pub fn to_owned_bytes(&self, offset: usize, size: usize) -> PngResult<Vec<u8>> {
    let src = self.bytes(offset, size)?;
    let mut out: Vec<u8> = Vec::new();
    out.try_reserve_exact(size)?;
    out.extend_from_slice(src);
    Ok(out)
  }
}

/// Bounded word-by-word forward scan, see [`ImageView::words_from`].
#[derive(Debug, Clone)]
pub struct WordScan<'b> {
  bytes: &'b [u8],
  order: ByteOrder,
  pos: usize,
}
impl Iterator for WordScan<'_> {
  type Item = (usize, u32);
  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let end = self.pos.checked_add(4)?;
    let word: [u8; 4] = self.bytes.get(self.pos..end)?.try_into().ok()?;
    let at = self.pos;
    self.pos += 1;
    Some((at, self.order.u32_from(word)))
  }
  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let n = self.bytes.len().saturating_sub(3).saturating_sub(self.pos);
    (n, Some(n))
  }
}

#[test]
fn test_view_reads_stay_in_bounds() {
  let v = ImageView::new(&[1, 2, 3, 4, 5]);
  assert_eq!(v.u32_at(0), Some(0x0102_0304));
  assert_eq!(v.u32_at(1), Some(0x0203_0405));
  assert_eq!(v.u32_at(2), None);
  assert_eq!(v.u32_at(usize::MAX), None);
  assert_eq!(v.u64_at(0), None);
  assert_eq!(v.u8_at(4), Some(5));
  assert_eq!(v.u8_at(5), None);
  assert_eq!(v.bytes(3, 2), Ok(&[4_u8, 5][..]));
  assert_eq!(v.bytes(3, 3), Err(PngError::OutOfBounds { offset: 3, size: 3 }));
  assert_eq!(v.bytes(usize::MAX, 2), Err(PngError::OutOfBounds { offset: usize::MAX, size: 2 }));
  assert_eq!(v.bytes(5, 0), Ok(&[][..]));
}

#[test]
fn test_word_scan_terminates() {
  let v = ImageView::new(b"xxIDATyyIDAT");
  assert_eq!(v.find_u32(0, 0x4944_4154), Some(2));
  assert_eq!(v.find_u32(3, 0x4944_4154), Some(8));
  assert_eq!(v.find_u32(9, 0x4944_4154), None);
  assert_eq!(v.find_u32(100, 0x4944_4154), None);
  assert_eq!(v.words_from(0).count(), 9);
  assert_eq!(v.words_from(0).size_hint(), (9, Some(9)));
  assert_eq!(ImageView::new(&[1, 2]).words_from(0).count(), 0);
}

#[test]
fn test_find_zero_respects_limit() {
  let v = ImageView::new(b"abc\0def\0");
  assert_eq!(v.find_zero(0, 80), Some(3));
  assert_eq!(v.find_zero(4, 80), Some(7));
  assert_eq!(v.find_zero(0, 3), None);
  assert_eq!(v.find_zero(8, 80), None);
}
