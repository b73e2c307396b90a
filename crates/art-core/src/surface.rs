// File: crates/art-core/src/surface.rs
// Summary: Drawing surface trait used by the compositor, plus a recording (display list) surface.

use crate::assets::RasterImage;
use crate::color::Rgba;
use crate::geometry::Rect;
use crate::text::{FixedAdvance, FontSpec, Shadow, TextMeasure};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Color and effects of a text run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextPaint {
    pub font: FontSpec,
    pub color: Rgba,
    pub shadow: Option<Shadow>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Horizontal or vertical linear gradient between two points in surface space.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: (f32, f32),
    pub end: (f32, f32),
    pub stops: Vec<GradientStop>,
}

/// The 2D primitives the compositor needs. Text `y` is the top of the text box.
pub trait DrawSurface: TextMeasure {
    fn size(&self) -> (i32, i32);
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    fn fill_gradient(&mut self, rect: Rect, gradient: &LinearGradient);
    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: Rgba);
    fn draw_text(&mut self, text: &str, origin: (f32, f32), align: TextAlign, paint: &TextPaint);
    fn draw_image(&mut self, image: &RasterImage, dest: Rect, shadow: Option<&Shadow>);
}

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    FillRect { rect: Rect, color: Rgba },
    FillGradient { rect: Rect, gradient: LinearGradient },
    FillRoundRect { rect: Rect, radius: f32, color: Rgba },
    Text { text: String, origin: (f32, f32), align: TextAlign, paint: TextPaint },
    Image { dest: Rect, source_size: (u32, u32), shadow: Option<Shadow> },
}

/// Records drawing calls instead of rasterizing them. `clear` drops the list.
pub struct RecordingSurface<M: TextMeasure = FixedAdvance> {
    width: i32,
    height: i32,
    measure: M,
    ops: Vec<DrawOp>,
}

impl RecordingSurface<FixedAdvance> {
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_measure(width, height, FixedAdvance::default())
    }
}

impl<M: TextMeasure> RecordingSurface<M> {
    pub fn with_measure(width: i32, height: i32, measure: M) -> Self {
        Self { width, height, measure, ops: Vec::new() }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Text runs in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn images(&self) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Image { dest, .. } => Some(*dest),
                _ => None,
            })
            .collect()
    }
}

impl<M: TextMeasure> TextMeasure for RecordingSurface<M> {
    fn measure_width(&self, text: &str, font: FontSpec) -> f32 {
        self.measure.measure_width(text, font)
    }
}

impl<M: TextMeasure> DrawSurface for RecordingSurface<M> {
    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn fill_gradient(&mut self, rect: Rect, gradient: &LinearGradient) {
        self.ops.push(DrawOp::FillGradient { rect, gradient: gradient.clone() });
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: Rgba) {
        self.ops.push(DrawOp::FillRoundRect { rect, radius, color });
    }

    fn draw_text(&mut self, text: &str, origin: (f32, f32), align: TextAlign, paint: &TextPaint) {
        self.ops.push(DrawOp::Text { text: text.to_string(), origin, align, paint: *paint });
    }

    fn draw_image(&mut self, image: &RasterImage, dest: Rect, shadow: Option<&Shadow>) {
        self.ops.push(DrawOp::Image {
            dest,
            source_size: (image.width(), image.height()),
            shadow: shadow.copied(),
        });
    }
}
