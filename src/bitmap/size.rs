use super::text::Cursor;
use crate::error::{BitmapError, ParseGeometryError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Extent of a bitmap or rect.
///
/// The components are signed so that negative input can be carried to a `Bitmap`
/// constructor and rejected there. A size is only usable for storage when
/// `is_positive()` holds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: isize,
    pub height: isize,
}

impl Size {
    pub const fn new(width: isize, height: isize) -> Self {
        Self { width, height }
    }

    /// True when neither component is negative. Zero extents count as positive.
    pub const fn is_positive(&self) -> bool {
        self.width >= 0 && self.height >= 0
    }

    /// `width * height`. Negative components count as zero and the product
    /// saturates at `usize::MAX`.
    pub fn point_count(&self) -> usize {
        let w = usize::try_from(self.width).unwrap_or(0);
        let h = usize::try_from(self.height).unwrap_or(0);
        w.saturating_mul(h)
    }

    /// `width * height`, or `None` for a negative size or an overflowing product.
    pub fn checked_point_count(&self) -> Option<usize> {
        let w = usize::try_from(self.width).ok()?;
        let h = usize::try_from(self.height).ok()?;
        w.checked_mul(h)
    }

    pub(crate) fn read(cur: &mut Cursor<'_>) -> Result<Self, ParseGeometryError> {
        let width = cur.number()?;
        cur.expect("x")?;
        let height = cur.number()?;
        Ok(Self { width, height })
    }
}

impl From<(isize, isize)> for Size {
    fn from((width, height): (isize, isize)) -> Self {
        Self { width, height }
    }
}

/// Unsigned dimensions always describe a positive size, but may not fit `isize`.
impl TryFrom<(usize, usize)> for Size {
    type Error = BitmapError;

    fn try_from((width, height): (usize, usize)) -> Result<Self, Self::Error> {
        match (isize::try_from(width), isize::try_from(height)) {
            (Ok(w), Ok(h)) => Ok(Self::new(w, h)),
            _ => Err(BitmapError::PointCountOverflow { width, height }),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Size {
    type Err = ParseGeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cur = Cursor::new(s);
        let size = Self::read(&mut cur)?;
        cur.finish()?;
        Ok(size)
    }
}
