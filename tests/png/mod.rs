use pngmap::{
  png::{parse, ChunkOffsets, FreeOutcome, OptionalField, PNG_SIGNATURE},
  ImageView, PngError, SrgbIntent,
};
use walkdir::WalkDir;

fn read_fixture(name: &str) -> Vec<u8> {
  std::fs::read(format!("tests/png/{name}")).unwrap()
}

fn be_u32_at(bytes: &[u8], offset: usize) -> u32 {
  u32::from_be_bytes(bytes[offset..offset + 4].try_into().unwrap())
}

#[test]
fn test_parse_no_panics() {
  // iter ALL files in the test folder, even non-png files shouldn't panic it.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    if entry.file_type().is_dir() {
      continue;
    }
    println!("{}", entry.path().display());
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    let _ = ChunkOffsets::resolve(&ImageView::new(&v));
    let _ = parse(&v).map(|ctx| ctx.release());
  }
  // even totally random data should never panic the parser!
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    let _ = ChunkOffsets::resolve(&ImageView::new(&v));
    let _ = parse(&v);
  }
  // random data behind a good signature and IHDR reaches the forward scan.
  for _ in 0..10 {
    let mut v = read_fixture("grey_1x1.png")[..33].to_vec();
    v.extend(super::rand_bytes(1024));
    let _ = parse(&v);
  }
}

#[test]
fn test_grey_1x1() {
  let bytes = read_fixture("grey_1x1.png");
  assert_eq!(bytes[..8], PNG_SIGNATURE);
  let ctx = parse(&bytes).unwrap();
  assert_eq!((ctx.width(), ctx.height()), (1, 1));
  assert_eq!(ctx.bit_depth(), 8);
  assert_eq!(ctx.color_type(), 0);
  assert!(ctx.iccp().is_none());
  assert!(!ctx.srgb_present());
  assert!(!ctx.offsets().idat_scanned);
  let idat_len = be_u32_at(&bytes, 33) as usize;
  assert_eq!(ctx.raw_image_bytes(), &bytes[41..41 + idat_len]);
  // zlib header
  assert_eq!(ctx.raw_image_bytes()[0], 0x78);
  assert_eq!(ctx.first_crc(), be_u32_at(&bytes, 29));
  assert_eq!(ctx.last_crc(), be_u32_at(&bytes, 41 + idat_len));
  assert_eq!(ctx.offsets().eof + 4, bytes.len());
  assert_eq!(ctx.release(), FreeOutcome::Partial);
}

#[test]
fn test_rgb_2x2_srgb() {
  let bytes = read_fixture("rgb_2x2_srgb.png");
  let ctx = parse(&bytes).unwrap();
  assert_eq!((ctx.width(), ctx.height()), (2, 2));
  assert_eq!(ctx.color_type(), 2);
  assert!(ctx.srgb_present());
  assert_eq!(ctx.rendering_intent(), OptionalField::Present(1));
  assert_eq!(ctx.srgb_intent(), Some(SrgbIntent::RelativeColorimetric));
  assert_eq!(ctx.icc_profile_name(), OptionalField::Absent);
  assert_eq!(ctx.offsets().idat_tag, 50);
  assert!(ctx.offsets().is_strictly_increasing());
}

#[test]
fn test_grey_1x1_iccp() {
  let bytes = read_fixture("grey_1x1_iccp.png");
  let ctx = parse(&bytes).unwrap();
  assert_eq!(ctx.icc_profile_name(), OptionalField::Present(&b"Custom\0"[..]));
  assert_eq!(ctx.icc_compression_method(), OptionalField::Present(0));
  let profile = ctx.icc_compressed_profile().present().unwrap();
  // zlib data, then the iCCP chunk's own CRC
  assert_eq!(profile[0], 0x78);
  let iccp_len = be_u32_at(&bytes, 33) as usize;
  assert_eq!(profile.len(), iccp_len - 8 + 4);
  assert_eq!(profile[profile.len() - 4..], bytes[41 + iccp_len..41 + iccp_len + 4]);
  assert!(!ctx.offsets().idat_scanned);
  assert_eq!(ctx.rendering_intent(), OptionalField::Absent);
  assert_eq!(ctx.release(), FreeOutcome::All);
}

#[test]
fn test_truncated_after_ihdr() {
  let bytes = read_fixture("truncated_after_ihdr.png");
  assert_eq!(bytes.len(), 33);
  assert_eq!(parse(&bytes).unwrap_err(), PngError::UnderrunDuringScan { start: 37 });
}
