use pngmap::{
  png::{parse, ChunkOffsets, OptionalField},
  ImageView,
};

fn main() {
  let args: Vec<String> = std::env::args().collect();
  println!("ARGS: {args:?}");
  for file_arg in args[1..].iter() {
    let path = std::path::Path::new(file_arg);
    print!("Reading `{}`... ", path.display());
    let bytes = match std::fs::read(path) {
      Ok(bytes) => {
        println!("got {} bytes.", bytes.len());
        bytes
      }
      Err(e) => {
        println!("{e:?}");
        continue;
      }
    };
    match ChunkOffsets::resolve(&ImageView::new(&bytes)) {
      Ok(offsets) => println!("{offsets:#?}"),
      Err(e) => println!("Couldn't resolve offsets: {e}"),
    }
    let ctx = match parse(&bytes) {
      Ok(ctx) => ctx,
      Err(e) => {
        println!("Couldn't parse: {e}");
        continue;
      }
    };
    println!("{:?}", ctx.ihdr());
    match ctx.icc_profile_name() {
      OptionalField::Present(name) => {
        println!("ICC profile: {:?}", String::from_utf8_lossy(name.strip_suffix(&[0_u8]).unwrap_or(name)))
      }
      OptionalField::Invalid => println!("ICC profile: invalid"),
      OptionalField::Absent => (),
    }
    if let OptionalField::Present(intent) = ctx.rendering_intent() {
      println!("sRGB rendering intent: {intent} ({:?})", ctx.srgb_intent());
    }
    println!("IDAT: {} compressed bytes", ctx.raw_image_bytes().len());
    println!("CRCs: {:08X?}", ctx.crc_pair());
    println!("Release: {:?}", ctx.release());
  }
}
