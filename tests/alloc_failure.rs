//! Allocation failures during parsing, using an allocator that can be told to
//! refuse requests on the current thread.

use std::{
  alloc::{GlobalAlloc, Layout, System},
  cell::Cell,
};

use pngmap::{
  png::{parse, FreeOutcome},
  PngError,
};

struct Refusing;

thread_local! {
  /// How many more allocations this thread may make, `None` for no limit.
  static ALLOWANCE: Cell<Option<usize>> = const { Cell::new(None) };
}

fn may_allocate() -> bool {
  ALLOWANCE
    .try_with(|a| match a.get() {
      None => true,
      Some(0) => false,
      Some(n) => {
        a.set(Some(n - 1));
        true
      }
    })
    .unwrap_or(true)
}

unsafe impl GlobalAlloc for Refusing {
  unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
    if may_allocate() {
      System.alloc(layout)
    } else {
      core::ptr::null_mut()
    }
  }
  unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
    System.dealloc(ptr, layout)
  }
}

#[global_allocator]
static GLOBAL: Refusing = Refusing;

fn parse_with_allowance(bytes: &[u8], allowance: usize) -> Result<FreeOutcome, PngError> {
  ALLOWANCE.with(|a| a.set(Some(allowance)));
  let out = parse(bytes).map(|ctx| ctx.release());
  ALLOWANCE.with(|a| a.set(None));
  out
}

#[test]
fn test_refused_allocation_is_alloc_error() {
  // one owned copy: the IDAT payload
  let grey = std::fs::read("tests/png/grey_1x1.png").unwrap();
  assert_eq!(parse_with_allowance(&grey, 0), Err(PngError::Alloc));
  assert_eq!(parse_with_allowance(&grey, 1), Ok(FreeOutcome::Partial));

  // three owned copies: profile name, compressed profile, IDAT payload
  let iccp = std::fs::read("tests/png/grey_1x1_iccp.png").unwrap();
  for allowance in 0..3 {
    assert_eq!(parse_with_allowance(&iccp, allowance), Err(PngError::Alloc), "allowance: {allowance}");
  }
  assert_eq!(parse_with_allowance(&iccp, 3), Ok(FreeOutcome::All));
}
