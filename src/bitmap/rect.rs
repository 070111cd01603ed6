use super::point::Point;
use super::size::Size;
use super::text::Cursor;
use crate::error::ParseGeometryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A region of a bitmap: top-left `origin` plus `size`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub const fn from_xywh(x: usize, y: usize, width: isize, height: isize) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn x(&self) -> usize {
        self.origin.x
    }

    pub fn y(&self) -> usize {
        self.origin.y
    }

    pub fn width(&self) -> isize {
        self.size.width
    }

    pub fn height(&self) -> isize {
        self.size.height
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.origin, self.size)
    }
}

impl FromStr for Rect {
    type Err = ParseGeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cur = Cursor::new(s);
        let origin = Point::read(&mut cur)?;
        let size = Size::read(&mut cur)?;
        cur.finish()?;
        Ok(Self { origin, size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_read_through_origin_and_size() {
        let rect = Rect::from_xywh(2, 3, 4, 5);
        assert_eq!((rect.x(), rect.y()), (2, 3));
        assert_eq!((rect.width(), rect.height()), (4, 5));
        assert_eq!(rect.origin(), Point::new(2, 3));
        assert_eq!(rect.size(), Size::new(4, 5));
        assert_eq!(rect, Rect::new(Point::new(2, 3), Size::new(4, 5)));
    }

    #[test]
    fn it_parses_what_it_prints() {
        let rect = Rect::from_xywh(1, 2, 30, 40);
        assert_eq!(rect.to_string(), "(1, 2) 30x40");
        assert_eq!("(1, 2) 30x40".parse::<Rect>().unwrap(), rect);
        assert_eq!("(1,2)30x40".parse::<Rect>().unwrap(), rect);
        assert!("(1, 2)".parse::<Rect>().is_err());
    }

    #[test]
    fn serde_round_trip() {
        let rect = Rect::from_xywh(1, 2, 30, 40);
        let json = serde_json::to_string(&rect).unwrap();
        assert_eq!(
            json,
            r#"{"origin":{"x":1,"y":2},"size":{"width":30,"height":40}}"#
        );
        assert_eq!(serde_json::from_str::<Rect>(&json).unwrap(), rect);
    }
}
