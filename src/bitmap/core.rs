use super::point::Point;
use super::rect::Rect;
use super::size::Size;
use crate::error::{BitmapError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::ops::{Index, IndexMut};

/// A dense 2D grid of `T` stored row-major, origin at the top-left.
///
/// `data.len() == width * height` holds after every operation. The storage is
/// owned exclusively; `clone` deep copies and `subbitmap` always allocates.
/// There is no internal locking: share a `Bitmap` across threads the same way
/// you would share a `Vec<T>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Bitmap<T> {
    size: Size,
    data: Vec<T>,
}

// Unvalidated wire form.
#[derive(Deserialize)]
struct RawBitmap<T> {
    size: Size,
    data: Vec<T>,
}

/// Deserialization runs the same checks as `from_vec`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Bitmap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawBitmap::deserialize(deserializer)?;
        Self::from_vec(raw.size, raw.data).map_err(serde::de::Error::custom)
    }
}

impl<T> Default for Bitmap<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Validates `size` and returns the number of elements it needs.
fn checked_len<T>(size: Size) -> Result<usize> {
    if !size.is_positive() {
        return Err(BitmapError::InvalidSize {
            width: size.width,
            height: size.height,
        });
    }

    let overflow = || BitmapError::PointCountOverflow {
        width: size.width as usize,
        height: size.height as usize,
    };
    let len = size.checked_point_count().ok_or_else(overflow)?;

    // Vec refuses allocations above isize::MAX bytes.
    let bytes = len
        .checked_mul(std::mem::size_of::<T>())
        .ok_or_else(overflow)?;
    if bytes > isize::MAX as usize {
        return Err(overflow());
    }
    Ok(len)
}

// Constructors
// -----------------------------------------------------------------------------
impl<T> Bitmap<T> {
    /// A 0x0 bitmap with no storage.
    pub const fn empty() -> Self {
        Self {
            size: Size::new(0, 0),
            data: Vec::new(),
        }
    }

    /// Takes `data` as the row-major contents of a `size` bitmap.
    pub fn from_vec(size: Size, data: Vec<T>) -> Result<Self> {
        let expected = checked_len::<T>(size)?;
        if data.len() != expected {
            return Err(BitmapError::SizeDataMismatch {
                width: size.width as usize,
                height: size.height as usize,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { size, data })
    }

    /// Collects exactly `size.point_count()` elements in row-major order.
    ///
    /// At most `point_count + 1` elements are pulled from `iter`, so an
    /// endless iterator still fails. On a mismatch `actual` is the number of
    /// elements pulled, capped at `point_count + 1`.
    pub fn from_iter_sized<I>(size: Size, iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let expected = checked_len::<T>(size)?;
        let data: Vec<T> = iter.into_iter().take(expected.saturating_add(1)).collect();
        Self::from_vec(size, data)
    }
}

impl<T: Clone> Bitmap<T> {
    /// A `size` bitmap with every cell set to `value`.
    pub fn with_value(size: Size, value: T) -> Result<Self> {
        let len = checked_len::<T>(size)?;
        Ok(Self {
            size,
            data: vec![value; len],
        })
    }

    pub fn from_dims(width: usize, height: usize, value: T) -> Result<Self> {
        Self::with_value(Size::try_from((width, height))?, value)
    }

    /// Reallocates to `size` and sets every cell to `value`.
    ///
    /// Prior content is not preserved. On error the bitmap is left untouched.
    pub fn resize(&mut self, size: Size, value: T) -> Result<()> {
        let len = checked_len::<T>(size)?;
        log::debug!("bitmap: resize {} -> {}", self.size, size);

        self.data = vec![value; len];
        self.size = size;
        Ok(())
    }

    pub fn resize_dims(&mut self, width: usize, height: usize, value: T) -> Result<()> {
        self.resize(Size::try_from((width, height))?, value)
    }

    /// Copies the pixels under `rect` into a new `rect.size` bitmap.
    ///
    /// Cells of the result that fall outside this bitmap keep `value`. A rect
    /// that misses the bitmap entirely yields a bitmap filled with `value`.
    /// Only an invalid `rect.size` is an error.
    pub fn subbitmap(&self, rect: Rect, value: T) -> Result<Self> {
        let mut out = Self::with_value(rect.size, value)?;

        let (w, h) = (self.width(), self.height());
        let (x0, y0) = (rect.x(), rect.y());
        if x0 >= w || y0 >= h {
            log::trace!("bitmap: subbitmap {rect} lies outside {}", self.size);
            return Ok(out);
        }

        let copy_w = out.width().min(w - x0);
        let copy_h = out.height().min(h - y0);
        log::trace!("bitmap: subbitmap {rect} copies {copy_w}x{copy_h}");

        for row in 0..copy_h {
            let src = self.data_pos((x0, y0 + row));
            let dst = out.data_pos((0, row));
            out.data[dst..dst + copy_w].clone_from_slice(&self.data[src..src + copy_w]);
        }

        Ok(out)
    }
}

impl<T: Clone + Default> Bitmap<T> {
    /// A `size` bitmap filled with `T::default()`.
    pub fn new(size: Size) -> Result<Self> {
        Self::with_value(size, T::default())
    }
}

// Dimensions
// -----------------------------------------------------------------------------
impl<T> Bitmap<T> {
    #[inline]
    pub fn width(&self) -> usize {
        self.size.width as usize
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.size.height as usize
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contains(&self, point: impl Into<Point>) -> bool {
        is_point_in_bitmap(self, point.into())
    }
}

// Access
// -----------------------------------------------------------------------------
impl<T> Bitmap<T> {
    /// Row-major index of `point` into `data()`. Performs no range check;
    /// the arithmetic wraps, so a far out-of-range point never panics here.
    #[inline(always)]
    pub fn data_pos(&self, point: impl Into<Point>) -> usize {
        let p = point.into();
        p.y.wrapping_mul(self.width()).wrapping_add(p.x)
    }

    fn check(&self, point: Point) -> Result<usize> {
        if !is_point_in_bitmap(self, point) {
            return Err(BitmapError::OutOfRange {
                x: point.x,
                y: point.y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(self.data_pos(point))
    }

    pub fn at(&self, point: impl Into<Point>) -> Result<&T> {
        let i = self.check(point.into())?;
        Ok(&self.data[i])
    }

    pub fn at_mut(&mut self, point: impl Into<Point>) -> Result<&mut T> {
        let i = self.check(point.into())?;
        Ok(&mut self.data[i])
    }

    pub fn get(&self, point: impl Into<Point>) -> Option<&T> {
        self.at(point).ok()
    }

    pub fn get_mut(&mut self, point: impl Into<Point>) -> Option<&mut T> {
        self.at_mut(point).ok()
    }

    /// # Safety
    /// `x < width()` and `y < height()`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, x: usize, y: usize) -> &T {
        unsafe { self.data.get_unchecked(y * self.width() + x) }
    }

    /// # Safety
    /// `x < width()` and `y < height()`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, x: usize, y: usize) -> &mut T {
        let i = y * self.width() + x;
        unsafe { self.data.get_unchecked_mut(i) }
    }

    /// The whole storage, row-major. Empty for a bitmap with no points.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// One slice per row, top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, T> {
        // A zero width means no data, so the chunk size only has to be non-zero.
        self.data.chunks_exact(self.width().max(1))
    }

    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, T> {
        let w = self.width().max(1);
        self.data.chunks_exact_mut(w)
    }
}

pub fn is_point_in_bitmap<T>(bitmap: &Bitmap<T>, point: Point) -> bool {
    point.x < bitmap.width() && point.y < bitmap.height()
}

/// Checked indexing; panics with the `OutOfRange` message.
impl<T, P: Into<Point>> Index<P> for Bitmap<T> {
    type Output = T;

    fn index(&self, point: P) -> &T {
        match self.at(point) {
            Ok(v) => v,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, P: Into<Point>> IndexMut<P> for Bitmap<T> {
    fn index_mut(&mut self, point: P) -> &mut T {
        match self.at_mut(point) {
            Ok(v) => v,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IntoIterator for Bitmap<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Bitmap<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Bitmap<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}
