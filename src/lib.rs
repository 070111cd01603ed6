// Library crate root.
//
// `Bitmap<T>` is a dense row-major grid with checked coordinate access and
// clipped sub-region extraction. Codecs and pixel algorithms are expected to
// sit on top of it and use only the public API re-exported here.

pub mod bitmap;
pub mod error;

pub use bitmap::{is_point_in_bitmap, Bitmap, Point, Rect, Size};
pub use error::{BitmapError, ParseGeometryError, Result};

#[cfg(test)]
pub mod test_helpers;
