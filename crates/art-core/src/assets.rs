// File: crates/art-core/src/assets.rs
// Summary: Decoded RGBA images (logos, icons), file loading and the built-in corner icon.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use skia_safe as skia;

use crate::error::{ArtError, Result};
use crate::skia_surface::{raster_surface, read_rgba8};
use crate::types::ICON_SIZE;

/// Straight-alpha RGBA8 pixels. Cheap to clone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Arc<Vec<u8>>,
}

impl RasterImage {
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let want = width as usize * height as usize * 4;
        if pixels.len() != want {
            return Err(ArtError::Surface(format!(
                "RGBA buffer is {} bytes, expected {want} for {width}x{height}",
                pixels.len()
            )));
        }
        Ok(Self { width, height, pixels: Arc::new(pixels) })
    }

    /// Decode any format the `image` crate was built with.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        let (w, h) = rgba.dimensions();
        Self::from_rgba8(w, h, rgba.into_raw())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::decode(&bytes)
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn pixels(&self) -> &[u8] { &self.pixels }
}

/// Where the decorative corner icon comes from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AssetSource {
    /// Procedurally drawn icon of the given side length.
    Builtin(u32),
    File(PathBuf),
}

impl Default for AssetSource {
    fn default() -> Self {
        AssetSource::Builtin(ICON_SIZE as u32)
    }
}

impl AssetSource {
    pub fn load(&self) -> Result<RasterImage> {
        match self {
            AssetSource::Builtin(size) => builtin_icon(*size),
            AssetSource::File(path) => RasterImage::load(path),
        }
    }
}

/// Rounded square with a warm-to-violet gradient and a white camera outline.
pub fn builtin_icon(size: u32) -> Result<RasterImage> {
    let side = size.max(8) as i32;
    let s = side as f32;
    let mut surface = raster_surface(side, side)?;
    let canvas = surface.canvas();
    canvas.clear(skia::Color::TRANSPARENT);

    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_shader(skia::Shader::linear_gradient(
        ((0.0, s), (s, 0.0)),
        [
            skia::Color::from_argb(255, 0xF5, 0x85, 0x29),
            skia::Color::from_argb(255, 0xDD, 0x2A, 0x7B),
            skia::Color::from_argb(255, 0x81, 0x34, 0xAF),
        ]
        .as_slice(),
        None,
        skia::TileMode::Clamp,
        None,
        None,
    ));
    canvas.draw_round_rect(skia::Rect::from_wh(s, s), s * 0.22, s * 0.22, &body);

    let mut outline = skia::Paint::default();
    outline.set_anti_alias(true);
    outline.set_style(skia::paint::Style::Stroke);
    outline.set_stroke_width(s * 0.07);
    outline.set_color(skia::Color::WHITE);
    let inset = s * 0.2;
    let frame = skia::Rect::from_ltrb(inset, inset, s - inset, s - inset);
    canvas.draw_round_rect(frame, s * 0.16, s * 0.16, &outline);
    canvas.draw_circle((s / 2.0, s / 2.0), s * 0.15, &outline);

    let mut dot = skia::Paint::default();
    dot.set_anti_alias(true);
    dot.set_color(skia::Color::WHITE);
    canvas.draw_circle((s * 0.68, s * 0.32), s * 0.045, &dot);

    RasterImage::from_rgba8(side as u32, side as u32, read_rgba8(&mut surface)?)
}
