pub mod core;
pub use self::core::{is_point_in_bitmap, Bitmap};

pub mod point;
pub use point::Point;

pub mod size;
pub use size::Size;

pub mod rect;
pub use rect::Rect;

mod text;

// Optional extras
// -----------------------------------------------------------------------------

#[cfg(feature = "im-io")]
pub mod io;
