use super::core::Bitmap;
use super::size::Size;
use image::ImageResult;
use std::path::Path;

// Helpers
// -----------------------------------------------------------------------------
fn dim_mismatch_err() -> image::ImageError {
    image::ImageError::Parameter(image::error::ParameterError::from_kind(
        image::error::ParameterErrorKind::DimensionMismatch,
    ))
}

// Decodes `path` as PNG regardless of its extension or contents.
fn open_png<P: AsRef<Path>>(path: P) -> ImageResult<image::DynamicImage> {
    let mut reader = image::ImageReader::open(path)?;
    reader.set_format(image::ImageFormat::Png);
    reader.decode()
}

fn png_dims<T>(bitmap: &Bitmap<T>) -> ImageResult<(u32, u32)> {
    let w = u32::try_from(bitmap.width()).map_err(|_| dim_mismatch_err())?;
    let h = u32::try_from(bitmap.height()).map_err(|_| dim_mismatch_err())?;
    Ok((w, h))
}

fn bitmap_size(w: u32, h: u32) -> ImageResult<Size> {
    let w = isize::try_from(w).map_err(|_| dim_mismatch_err())?;
    let h = isize::try_from(h).map_err(|_| dim_mismatch_err())?;
    Ok(Size::new(w, h))
}

// PNG I/O
// -----------------------------------------------------------------------------
impl Bitmap<u8> {
    /// Writes an 8-bit grayscale PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        let (w, h) = png_dims(self)?;
        let img =
            image::GrayImage::from_raw(w, h, self.data().to_vec()).ok_or_else(dim_mismatch_err)?;

        img.save_with_format(path, image::ImageFormat::Png)
    }

    /// Reads a PNG, converted to 8-bit luma.
    pub fn load_png<P: AsRef<Path>>(path: P) -> ImageResult<Self> {
        let img = open_png(path)?.into_luma8();
        let size = bitmap_size(img.width(), img.height())?;
        Bitmap::from_vec(size, img.into_raw()).map_err(|_| dim_mismatch_err())
    }
}

impl Bitmap<u16> {
    /// Writes a 16-bit grayscale PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        let (w, h) = png_dims(self)?;
        let img = image::ImageBuffer::<image::Luma<u16>, _>::from_raw(w, h, self.data().to_vec())
            .ok_or_else(dim_mismatch_err)?;

        img.save_with_format(path, image::ImageFormat::Png)
    }

    pub fn load_png<P: AsRef<Path>>(path: P) -> ImageResult<Self> {
        let img = open_png(path)?.into_luma16();
        let size = bitmap_size(img.width(), img.height())?;
        Bitmap::from_vec(size, img.into_raw()).map_err(|_| dim_mismatch_err())
    }
}

// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn tmp_path(name: &str, ext: &str) -> PathBuf {
        std::env::temp_dir().join(format!("rbitmap-{}-{name}.{ext}", std::process::id()))
    }

    fn tmp_png(name: &str) -> PathBuf {
        tmp_path(name, "png")
    }

    #[test]
    fn u8_png_round_trips() {
        let bm = Bitmap::from_iter_sized(Size::new(3, 2), [0_u8, 50, 100, 150, 200, 255]).unwrap();
        let path = tmp_png("u8");
        bm.save_png(&path).unwrap();
        let back = Bitmap::<u8>::load_png(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(back, bm);
    }

    #[test]
    fn u16_png_round_trips() {
        let bm = Bitmap::from_iter_sized(Size::new(2, 2), [0_u16, 1, 4095, u16::MAX]).unwrap();
        let path = tmp_png("u16");
        bm.save_png(&path).unwrap();
        let back = Bitmap::<u16>::load_png(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(back, bm);
    }

    #[test]
    fn load_png_refuses_other_formats() {
        let path = tmp_path("bmp", "bmp");
        image::GrayImage::from_raw(2, 1, vec![10, 20])
            .unwrap()
            .save_with_format(&path, image::ImageFormat::Bmp)
            .unwrap();
        let res = Bitmap::<u8>::load_png(&path);
        let _ = std::fs::remove_file(&path);
        assert!(res.is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Bitmap::<u8>::load_png(tmp_png("does-not-exist")).is_err());
    }
}
