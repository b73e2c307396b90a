// File: crates/art-core/src/types.rs
// Summary: Shared types and constants (canvas size, layout margins, layout offsets).

/// Canvas width in pixels.
pub const WIDTH: i32 = 1080;
/// Canvas height in pixels.
pub const HEIGHT: i32 = 1080;

/// Width of each colored edge band of the background vignette.
pub const VIGNETTE_BAND: f32 = 300.0;

/// Headline sizes: fixed lines and the auto-fit range of the highlighted line.
pub const HEADLINE_SMALL_SIZE: f32 = 45.0;
pub const HEADLINE_FIT_MAX: f32 = 160.0;
pub const HEADLINE_FIT_MIN: f32 = 130.0;
pub const HEADLINE_FIT_STEP: f32 = 5.0;

/// Vertical rhythm of the headline block.
pub const LINE1_OFFSET: f32 = 50.0;
pub const LINE2_GAP: f32 = 100.0;
pub const LINE3_GAP: f32 = 80.0;

/// Decorative corner icons.
pub const ICON_SIZE: f32 = 120.0;
pub const ICON_INSET: f32 = 150.0;

/// Footer mark.
pub const FOOTER_OFFSET: f32 = 120.0;
pub const LOGO_SIZE: f32 = 100.0;
pub const LOGO_LIFT: f32 = 10.0;

/// Screen margins for text, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Margins {
    pub horizontal: u32,
    pub vertical: u32,
}

impl Margins {
    pub const fn new(horizontal: u32, vertical: u32) -> Self {
        Self { horizontal, vertical }
    }

    /// Horizontal space left for centered text on a surface of `width` pixels.
    pub fn safe_width(&self, width: i32) -> f32 {
        (width as f32 - 2.0 * self.horizontal as f32).max(0.0)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(50, 70)
    }
}
