// Copyright 2025 the Pagemark Authors
// SPDX-License-Identifier: Apache-2.0

//! Raster snapshots of a region.
//!
//! A snapshot is the pixels under a selection at the moment it was made.
//! Highlights keep it as a PNG `data:` URL in their content.

use crate::error::{GeometryError, Result};
use crate::model::PageRect;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, RgbaImage, imageops};
use kurbo::Vec2;
use std::io::Cursor;

/// The captured pixels of one region
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    image: RgbaImage,
}

impl Snapshot {
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Crop a rendered page raster to `rect`.
    ///
    /// `pixel_ratio` is raster pixels per viewport pixel on each axis (the
    /// device pixel ratio the page was rendered at). The crop is expanded
    /// outward to whole pixels and clamped to the raster, so a rect hanging
    /// off the page edge yields only the part that is on the page. A crop
    /// with no pixels left is a capture error.
    pub fn crop(raster: &RgbaImage, rect: &PageRect, pixel_ratio: Vec2) -> Result<Self> {
        let clamp_x = |v: f64| v.clamp(0.0, f64::from(raster.width())) as u32;
        let clamp_y = |v: f64| v.clamp(0.0, f64::from(raster.height())) as u32;

        let x0 = clamp_x((rect.left * pixel_ratio.x).floor());
        let y0 = clamp_y((rect.top * pixel_ratio.y).floor());
        let x1 = clamp_x((rect.right() * pixel_ratio.x).ceil());
        let y1 = clamp_y((rect.bottom() * pixel_ratio.y).ceil());

        if x1 <= x0 || y1 <= y0 {
            return Err(GeometryError::Capture {
                page_number: rect.page_number,
                reason: format!("{rect:?} has no pixels on the rendered page"),
            });
        }

        let image = imageops::crop_imm(raster, x0, y0, x1 - x0, y1 - y0).to_image();
        Ok(Self { image })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn is_empty(&self) -> bool {
        self.image.width() == 0 || self.image.height() == 0
    }

    /// Encode as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Encode as a `data:image/png;base64,...` URL.
    pub fn to_png_data_url(&self) -> Result<String> {
        Ok(format!("data:image/png;base64,{}", STANDARD.encode(self.to_png()?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// 100x100 raster where each pixel encodes its own coordinates.
    fn coordinate_raster() -> RgbaImage {
        RgbaImage::from_fn(100, 100, |x, y| Rgba([x as u8, y as u8, 0, 255]))
    }

    fn crop(rect: PageRect, ratio_x: f64, ratio_y: f64) -> Result<Snapshot> {
        Snapshot::crop(&coordinate_raster(), &rect, Vec2::new(ratio_x, ratio_y))
    }

    #[test]
    fn crop_picks_the_exact_pixels() {
        let snapshot = crop(PageRect::new(10.0, 20.0, 30.0, 5.0, 1), 1.0, 1.0).unwrap();

        assert_eq!((snapshot.width(), snapshot.height()), (30, 5));
        assert_eq!(snapshot.image().get_pixel(0, 0), &Rgba([10, 20, 0, 255]));
        assert_eq!(snapshot.image().get_pixel(29, 4), &Rgba([39, 24, 0, 255]));
    }

    #[test]
    fn crop_applies_pixel_ratio() {
        let snapshot = crop(PageRect::new(10.0, 10.0, 5.0, 5.0, 1), 2.0, 2.0).unwrap();

        assert_eq!((snapshot.width(), snapshot.height()), (10, 10));
        assert_eq!(snapshot.image().get_pixel(0, 0), &Rgba([20, 20, 0, 255]));
    }

    #[test]
    fn crop_scales_each_axis_separately() {
        let snapshot = crop(PageRect::new(10.0, 40.0, 20.0, 20.0, 1), 1.0, 0.5).unwrap();

        assert_eq!((snapshot.width(), snapshot.height()), (20, 10));
        assert_eq!(snapshot.image().get_pixel(0, 0), &Rgba([10, 20, 0, 255]));
    }

    #[test]
    fn crop_is_clamped_to_the_raster() {
        let snapshot = crop(PageRect::new(90.0, -5.0, 50.0, 10.0, 1), 1.0, 1.0).unwrap();

        assert_eq!((snapshot.width(), snapshot.height()), (10, 5));
        assert_eq!(snapshot.image().get_pixel(0, 0), &Rgba([90, 0, 0, 255]));
    }

    #[test]
    fn crop_fully_outside_is_a_capture_error() {
        let err = crop(PageRect::new(200.0, 200.0, 10.0, 10.0, 3), 1.0, 1.0).unwrap_err();
        assert!(matches!(err, GeometryError::Capture { page_number: 3, .. }));
    }

    #[test]
    fn data_url_is_base64_png() {
        let snapshot = crop(PageRect::new(0.0, 0.0, 4.0, 4.0, 1), 1.0, 1.0).unwrap();
        let url = snapshot.to_png_data_url().unwrap();

        let payload = url.strip_prefix("data:image/png;base64,").unwrap();
        let bytes = STANDARD.decode(payload).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded, *snapshot.image());
    }
}
