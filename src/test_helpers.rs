use crate::bitmap::{Bitmap, Size};

/// Builds a `Bitmap<u8>` from rows of digits. Blank lines and indentation are ignored.
pub fn bitmap_from_ascii(grid: &str) -> Bitmap<u8> {
    let rows: Vec<&str> = grid
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();

    let h = rows.len();
    assert!(h > 0, "grid must have at least one non-empty row");
    let w = rows[0].len();
    assert!(w > 0, "grid rows must be non-empty");
    for r in &rows {
        assert_eq!(r.len(), w, "all rows must have equal length");
    }

    let cells = rows.iter().flat_map(|row| {
        row.chars().map(|ch| {
            ch.to_digit(10)
                .unwrap_or_else(|| panic!("invalid cell char '{ch}', expected digit"))
                as u8
        })
    });
    let size = Size::try_from((w, h)).expect("grid dims fit isize");
    Bitmap::from_iter_sized(size, cells).expect("grid is rectangular")
}

/// Renders a `Bitmap<u8>` one line per row: 0-9 as digits, 10-35 as A-Z, else '*'.
pub fn bitmap_to_ascii(bm: &Bitmap<u8>) -> String {
    let mut out = String::new();
    for row in bm.rows() {
        for &v in row {
            let ch = match v {
                0..=9 => (b'0' + v) as char,
                10..=35 => (b'A' + (v - 10)) as char,
                _ => '*',
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
