// File: crates/art-core/src/text.rs
// Summary: Text shaper/measurer using Skia textlayout, plus a fixed-advance measurer for headless use.

use skia_safe as skia;
use skia::font_style::{Slant, Weight, Width};
use skia::textlayout::{
    FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextShadow, TextStyle,
};

use crate::color::Rgba;

/// Display family stack used by every artwork line.
pub const DEFAULT_FAMILIES: &[&str] = &["Anton", "Impact", "Arial Black", "DejaVu Sans", "sans-serif"];

/// Size and weight of a run of text; the family comes from the measurer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSpec {
    pub size: f32,
    pub weight: i32,
}

impl FontSpec {
    /// Weight 900, as used for headlines.
    pub const fn black(size: f32) -> Self {
        Self { size, weight: 900 }
    }

    pub const fn bold(size: f32) -> Self {
        Self { size, weight: 700 }
    }
}

/// Canvas-style drop shadow. `blur` follows the canvas convention (sigma = blur / 2).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub dx: f32,
    pub dy: f32,
    pub blur: f32,
    pub color: Rgba,
}

impl Shadow {
    pub fn sigma(&self) -> f32 {
        self.blur / 2.0
    }
}

/// Rendered width of a string at a given font.
pub trait TextMeasure {
    fn measure_width(&self, text: &str, font: FontSpec) -> f32;
}

/// Measures every glyph as `size * em_ratio` wide. Deterministic across machines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvance {
    pub em_ratio: f32,
}

impl Default for FixedAdvance {
    fn default() -> Self {
        Self { em_ratio: 0.6 }
    }
}

impl TextMeasure for FixedAdvance {
    fn measure_width(&self, text: &str, font: FontSpec) -> f32 {
        text.chars().count() as f32 * font.size * self.em_ratio
    }
}

pub struct TextShaper {
    fonts: FontCollection,
    families: Vec<String>,
}

impl TextShaper {
    pub fn new() -> Self {
        Self::with_families(DEFAULT_FAMILIES.iter().map(|f| f.to_string()).collect())
    }

    pub fn with_families(families: Vec<String>) -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc, families }
    }

    pub fn families(&self) -> &[String] {
        &self.families
    }

    fn make_style(&self, font: FontSpec, color: Rgba, shadow: Option<&Shadow>) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(font.size.max(1.0));
        ts.set_color(skia::Color::from_argb(color.a, color.r, color.g, color.b));
        ts.set_font_style(skia::FontStyle::new(Weight::from(font.weight), Width::NORMAL, Slant::Upright));
        ts.set_font_families(self.families.as_slice());
        if let Some(s) = shadow {
            let c = s.color;
            ts.add_shadow(TextShadow::new(
                skia::Color::from_argb(c.a, c.r, c.g, c.b),
                (s.dx, s.dy),
                s.sigma() as f64,
            ));
        }
        ts
    }

    pub fn layout(&self, text: &str, font: FontSpec, color: Rgba, shadow: Option<&Shadow>) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = self.make_style(font, color, shadow);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Paint `text` with its top edge at `y` and its left edge at `x`.
    pub fn draw_top_left(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        font: FontSpec,
        color: Rgba,
        shadow: Option<&Shadow>,
    ) -> f32 {
        let mut p = self.layout(text, font, color, shadow);
        let width = p.longest_line();
        p.paint(canvas, (x, y));
        width
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasure for TextShaper {
    fn measure_width(&self, text: &str, font: FontSpec) -> f32 {
        let p = self.layout(text, font, Rgba::TRANSPARENT, None);
        // width of the longest line
        p.longest_line()
    }
}
