#![forbid(unsafe_code)]
#![allow(non_camel_case_types)]

//! Maps out the chunks of PNG data.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! ## Library Design Assumptions
//!
//! * The entire PNG encoded source data stream is a single byte slice that's
//!   already in memory.
//! * Only the chunks that matter for getting at the image data are handled:
//!   `IHDR`, then optionally `iCCP` and/or `sRGB`, then a single `IDAT`, then
//!   `IEND`. Other ancillary chunks between `IHDR` and `IDAT` are stepped over
//!   by a forward scan for the `IDAT` tag, but not looked at.
//! * Nothing is decompressed or unfiltered. The `IDAT` bytes are handed out
//!   still zlib compressed.
//!
//! ## Layout
//!
//! A PNG is an 8 byte signature followed by chunks. Each chunk is a 4 byte
//! length, a 4 byte tag, `length` bytes of data, and a 4 byte CRC:
//!
//! ```text
//! [8]  signature  89 50 4E 47 0D 0A 1A 0A
//! [4]  13         [4] IHDR  [13] w h depth color compression filter interlace  [4] CRC
//! [4]  n          [4] iCCP  [n]  name\0 method profile...                      [4] CRC  (optional)
//! [4]  1          [4] sRGB  [1]  rendering intent                              [4] CRC  (optional)
//! [4]  n          [4] IDAT  [n]  compressed image bytes                        [4] CRC
//! [4]  0          [4] IEND                                                     [4] AE 42 60 82
//! ```
//!
//! [`ChunkOffsets::resolve`] works out where each of these is.
//!
//! ## Parsing
//!
//! With the `alloc` feature, call [`parse`] to check the structure and get a
//! [`DecodeContext`] holding owned copies of everything:
//!
//! ```
//! # fn demo(png: &[u8]) -> Result<(), pngmap::png::PngError> {
//! let ctx = pngmap::png::parse(png)?;
//! println!("{}x{}", ctx.width(), ctx.height());
//! let zlib_data: &[u8] = ctx.raw_image_bytes();
//! # Ok(())
//! # }
//! ```
//!
//! ## Parsing Errors
//!
//! The signature, the `IHDR` chunk, and the end of the image are mandatory.
//! If any of them is wrong you get an error and no context. The optional
//! chunks can't fail the parse: a bad profile name (for example) just leaves
//! that field as [`OptionalField::Invalid`].
//!
//! Stored CRC values are read, but never checked.

use core::fmt::Debug;

use bytemuck::{Pod, Zeroable};
use log::{debug, trace, warn};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

pub use crate::{ByteOrder, ImageView, PngError, PngResult, SrgbIntent, Structure};

mod tag;
pub use tag::*;

mod field;
pub use field::*;

mod offsets;
pub use offsets::*;

mod ihdr;
pub use ihdr::*;

mod iccp;
pub use iccp::*;

mod srgb;
pub use srgb::*;

#[cfg(feature = "alloc")]
mod idat;
#[cfg(feature = "alloc")]
pub use idat::*;

mod iend;
pub use iend::*;

#[cfg(feature = "alloc")]
mod context;
#[cfg(feature = "alloc")]
pub use context::*;
