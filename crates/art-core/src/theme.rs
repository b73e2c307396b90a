// File: crates/art-core/src/theme.rs
// Summary: Fixed artwork palette and the brand color presets offered by the form.

use crate::color::{Rgb, Rgba};

/// Colors that do not depend on the brand color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub background: Rgba,
    pub headline: Rgba,
    pub headline_shadow: Rgba,
    pub icon_shadow: Rgba,
    pub wordmark: Rgba,
    pub badge_label: Rgba,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Rgba::BLACK,
            headline: Rgba::WHITE,
            headline_shadow: Rgba::black_alpha(0.8),
            icon_shadow: Rgba::black_alpha(0.4),
            wordmark: Rgba::WHITE,
            badge_label: Rgba::BLACK,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// A named brand color preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrandPreset {
    pub name: &'static str,
    pub color: Rgb,
}

/// Return the built-in brand color presets, green first (the form default).
pub fn presets() -> Vec<BrandPreset> {
    vec![
        BrandPreset { name: "green", color: Rgb::new(0x22, 0xC5, 0x5E) },
        BrandPreset { name: "blue", color: Rgb::new(0x3B, 0x82, 0xF6) },
        BrandPreset { name: "purple", color: Rgb::new(0x8B, 0x5C, 0xF6) },
        BrandPreset { name: "pink", color: Rgb::new(0xEC, 0x48, 0x99) },
        BrandPreset { name: "orange", color: Rgb::new(0xF9, 0x73, 0x16) },
        BrandPreset { name: "red", color: Rgb::new(0xEF, 0x44, 0x44) },
    ]
}

/// Default brand color (`#22C55E`).
pub fn default_brand() -> Rgb {
    Rgb::new(0x22, 0xC5, 0x5E)
}

/// Find a preset by `name`, case-insensitively.
pub fn find(name: &str) -> Option<Rgb> {
    presets().into_iter().find(|p| p.name.eq_ignore_ascii_case(name)).map(|p| p.color)
}

/// Resolve either a preset name or a `#RRGGBB` literal.
pub fn resolve(name_or_hex: &str) -> crate::Result<Rgb> {
    match find(name_or_hex) {
        Some(c) => Ok(c),
        None => Rgb::parse(name_or_hex),
    }
}
