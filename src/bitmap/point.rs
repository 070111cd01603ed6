use super::text::Cursor;
use crate::error::ParseGeometryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A position in a bitmap. `x` is the column, `y` the row, origin at the top-left.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub(crate) fn read(cur: &mut Cursor<'_>) -> Result<Self, ParseGeometryError> {
        cur.expect("(")?;
        let x = cur.number()?;
        cur.expect(",")?;
        let y = cur.number()?;
        cur.expect(")")?;
        Ok(Self { x, y })
    }
}

impl From<(usize, usize)> for Point {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (usize, usize) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = ParseGeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cur = Cursor::new(s);
        let p = Self::read(&mut cur)?;
        cur.finish()?;
        Ok(p)
    }
}
