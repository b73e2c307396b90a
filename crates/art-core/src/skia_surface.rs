// File: crates/art-core/src/skia_surface.rs
// Summary: DrawSurface backed by a Skia CPU raster surface; RGBA8 readback and PNG encoding.

use skia_safe as skia;

use crate::assets::RasterImage;
use crate::color::Rgba;
use crate::error::{ArtError, Result};
use crate::geometry::Rect;
use crate::surface::{DrawSurface, LinearGradient, TextAlign, TextPaint};
use crate::text::{FontSpec, Shadow, TextMeasure, TextShaper};

pub struct SkiaSurface {
    surface: skia::Surface,
    shaper: TextShaper,
}

impl SkiaSurface {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Self::with_shaper(width, height, TextShaper::new())
    }

    pub fn with_shaper(width: i32, height: i32, shaper: TextShaper) -> Result<Self> {
        Ok(Self { surface: raster_surface(width, height)?, shaper })
    }

    /// Read back straight-alpha RGBA8, row-major with no padding.
    pub fn to_rgba8(&mut self) -> Result<Vec<u8>> {
        read_rgba8(&mut self.surface)
    }

    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>> {
        encode_png(&mut self.surface)
    }
}

impl TextMeasure for SkiaSurface {
    fn measure_width(&self, text: &str, font: FontSpec) -> f32 {
        self.shaper.measure_width(text, font)
    }
}

impl DrawSurface for SkiaSurface {
    fn size(&self) -> (i32, i32) {
        (self.surface.width(), self.surface.height())
    }

    fn clear(&mut self) {
        self.surface.canvas().clear(skia::Color::TRANSPARENT);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia(color));
        self.surface.canvas().draw_rect(to_skia_rect(rect), &paint);
    }

    fn fill_gradient(&mut self, rect: Rect, gradient: &LinearGradient) {
        let colors: Vec<skia::Color> = gradient.stops.iter().map(|s| to_skia(s.color)).collect();
        let positions: Vec<f32> = gradient.stops.iter().map(|s| s.offset).collect();
        let shader = skia::Shader::linear_gradient(
            (gradient.start, gradient.end),
            colors.as_slice(),
            positions.as_slice(),
            skia::TileMode::Clamp,
            None,
            None,
        );
        let mut paint = skia::Paint::default();
        paint.set_shader(shader);
        self.surface.canvas().draw_rect(to_skia_rect(rect), &paint);
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: Rgba) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(to_skia(color));
        self.surface
            .canvas()
            .draw_round_rect(to_skia_rect(rect), radius, radius, &paint);
    }

    fn draw_text(&mut self, text: &str, (x, y): (f32, f32), align: TextAlign, paint: &TextPaint) {
        let left = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - self.shaper.measure_width(text, paint.font) / 2.0,
        };
        let canvas = self.surface.canvas();
        self.shaper
            .draw_top_left(canvas, text, (left, y), paint.font, paint.color, paint.shadow.as_ref());
    }

    fn draw_image(&mut self, image: &RasterImage, dest: Rect, shadow: Option<&Shadow>) {
        let Some(img) = to_skia_image(image) else {
            log::warn!("skipping {}x{} image: not uploadable to Skia", image.width(), image.height());
            return;
        };
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        if let Some(s) = shadow {
            paint.set_image_filter(skia::image_filters::drop_shadow(
                (s.dx, s.dy),
                (s.sigma(), s.sigma()),
                skia::Color4f::from(to_skia(s.color)),
                None,
                None,
                skia::image_filters::CropRect::default(),
            ));
        }
        self.surface
            .canvas()
            .draw_image_rect(&img, None, to_skia_rect(dest), &paint);
    }
}

pub(crate) fn raster_surface(width: i32, height: i32) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| ArtError::Surface(format!("failed to create {width}x{height} raster surface")))
}

pub(crate) fn read_rgba8(surface: &mut skia::Surface) -> Result<Vec<u8>> {
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let row_bytes = w as usize * 4;
    let mut pixels = vec![0u8; row_bytes * h as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        return Err(ArtError::Surface("pixel readback failed".into()));
    }
    Ok(pixels)
}

pub(crate) fn encode_png(surface: &mut skia::Surface) -> Result<Vec<u8>> {
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| ArtError::Surface("encode PNG failed".into()))?;
    Ok(data.as_bytes().to_vec())
}

fn to_skia(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_skia_rect(r: Rect) -> skia::Rect {
    skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
}

fn to_skia_image(image: &RasterImage) -> Option<skia::Image> {
    let info = skia::ImageInfo::new(
        (image.width() as i32, image.height() as i32),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    skia::images::raster_from_data(
        &info,
        skia::Data::new_copy(image.pixels()),
        image.width() as usize * 4,
    )
}
