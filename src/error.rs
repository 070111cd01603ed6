use thiserror::Error;

pub type Result<T, E = BitmapError> = std::result::Result<T, E>;

/// Contract violations reported by `Bitmap` constructors, `resize` and checked access.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitmapError {
    #[error("bitmap: bitmap obtain negative size {{{width}, {height}}}")]
    InvalidSize { width: isize, height: isize },

    #[error("bitmap: size {width}x{height} exceeds the addressable point count")]
    PointCountOverflow { width: usize, height: usize },

    #[error(
        "bitmap: size ({width}x{height}, {expected} points) and data ({actual} points) are incompatible"
    )]
    SizeDataMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error(
        "bitmap: point(x = {x}, y = {y}) is outside the bitmap (width = {width}, height = {height})"
    )]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Failure to read a `Point`, `Size` or `Rect` from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseGeometryError {
    #[error("expected {expected:?}, found {found:?}")]
    Expected { expected: &'static str, found: String },

    #[error("invalid number {text:?}")]
    InvalidNumber { text: String },

    #[error("unexpected trailing input {rest:?}")]
    TrailingInput { rest: String },
}
