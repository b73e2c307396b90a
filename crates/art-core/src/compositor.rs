// File: crates/art-core/src/compositor.rs
// Summary: Artwork compositor: the fixed drawing sequence that turns a request into a 1080x1080 frame.

use log::debug;

use crate::assets::{AssetSource, RasterImage};
use crate::color::{Rgb, Rgba};
use crate::error::Result;
use crate::fit::fit_text_to_width;
use crate::geometry::Rect;
use crate::headline::Headline;
use crate::request::ArtworkRequest;
use crate::skia_surface::SkiaSurface;
use crate::surface::{DrawSurface, GradientStop, LinearGradient, TextAlign, TextPaint};
use crate::text::{FontSpec, Shadow, TextMeasure, TextShaper, DEFAULT_FAMILIES};
use crate::theme::Theme;
use crate::types::*;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub margins: Margins,
    pub theme: Theme,
    pub families: Vec<String>,
    /// Footer text drawn when the request has no logo.
    pub wordmark: String,
    pub badge_label: String,
    pub icon: AssetSource,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            margins: Margins::default(),
            theme: Theme::dark(),
            families: DEFAULT_FAMILIES.iter().map(|f| f.to_string()).collect(),
            wordmark: "Trexx".to_string(),
            badge_label: "CLUB".to_string(),
            icon: AssetSource::default(),
        }
    }
}

/// Images already decoded for this render. `None` means not loaded (yet).
#[derive(Clone, Copy, Debug, Default)]
pub struct Assets<'a> {
    pub icon: Option<&'a RasterImage>,
    pub logo: Option<&'a RasterImage>,
}

/// Resolved headline text and vertical positions (tops of the text boxes).
#[derive(Clone, Debug, PartialEq)]
pub struct HeadlineLayout {
    pub headline: Headline,
    pub line1_y: f32,
    pub line2_y: f32,
    pub line3_y: f32,
    pub highlight_size: f32,
}

pub struct Compositor {
    opts: RenderOptions,
}

impl Compositor {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.opts
    }

    /// Raster surface sized and font-configured for these options.
    pub fn new_surface(&self) -> Result<SkiaSurface> {
        SkiaSurface::with_shaper(
            self.opts.width,
            self.opts.height,
            TextShaper::with_families(self.opts.families.clone()),
        )
    }

    pub fn layout<M: TextMeasure + ?Sized>(
        &self,
        measure: &M,
        surface_width: i32,
        request: &ArtworkRequest,
    ) -> HeadlineLayout {
        let headline = Headline::for_request(request);
        let safe_width = self.opts.margins.safe_width(surface_width);
        let highlight_size = fit_text_to_width(
            measure,
            &headline.highlight,
            safe_width,
            HEADLINE_FIT_MIN,
            HEADLINE_FIT_MAX,
        );
        let line1_y = self.opts.margins.vertical as f32 + LINE1_OFFSET;
        let line2_y = line1_y + LINE2_GAP;
        let line3_y = line2_y + highlight_size + LINE3_GAP;
        HeadlineLayout { headline, line1_y, line2_y, line3_y, highlight_size }
    }

    /// Draw the full frame. Never fails; missing images leave their region untouched.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S, request: &ArtworkRequest, assets: Assets<'_>) {
        let (width, height) = surface.size();
        debug!(
            "render {}x{} '{}' {} {}",
            width, height, request.company_name, request.primary_color, request.mission
        );

        surface.clear();
        self.draw_background(surface, request.primary_color);

        let layout = self.layout(&*surface, width, request);
        self.draw_headline(surface, &layout, request.primary_color);

        if request.mission.has_corner_icons() {
            if let Some(icon) = assets.icon {
                self.draw_corner_icons(surface, icon);
            }
        }

        match (&request.logo, assets.logo) {
            (Some(_), Some(logo)) => self.draw_logo(surface, logo),
            (Some(logo), None) => debug!("logo {} not loaded; footer left blank", logo.path().display()),
            (None, _) => self.draw_wordmark(surface, request.primary_color),
        }
    }

    /// Icons at the top-left and bottom-right anchors. Also used to overlay a late-loaded icon.
    pub fn draw_corner_icons<S: DrawSurface + ?Sized>(&self, surface: &mut S, icon: &RasterImage) {
        let (width, height) = surface.size();
        let shadow = Shadow { dx: 0.0, dy: 8.0, blur: 20.0, color: self.opts.theme.icon_shadow };
        let anchors = [
            (ICON_INSET, ICON_INSET),
            (width as f32 - ICON_INSET, height as f32 - ICON_INSET),
        ];
        for (x, y) in anchors {
            surface.draw_image(icon, Rect::centered(x, y, ICON_SIZE, ICON_SIZE), Some(&shadow));
        }
    }

    /// Logo centered on the footer anchor, lifted slightly. Also used for late-loaded logos.
    pub fn draw_logo<S: DrawSurface + ?Sized>(&self, surface: &mut S, logo: &RasterImage) {
        let (cx, cy) = footer_anchor(surface.size());
        let dest = Rect::centered(cx, cy - LOGO_LIFT, LOGO_SIZE, LOGO_SIZE);
        surface.draw_image(logo, dest, None);
    }

    /// Convenience: render into a fresh raster surface and encode PNG.
    pub fn render_to_png(&self, request: &ArtworkRequest, assets: Assets<'_>) -> Result<Vec<u8>> {
        let mut surface = self.new_surface()?;
        self.render(&mut surface, request, assets);
        surface.to_png_bytes()
    }

    /// Render to a straight-alpha RGBA8 buffer. Returns (pixels, width, height, stride).
    pub fn render_to_rgba8(
        &self,
        request: &ArtworkRequest,
        assets: Assets<'_>,
    ) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.new_surface()?;
        self.render(&mut surface, request, assets);
        let (w, h) = surface.size();
        Ok((surface.to_rgba8()?, w as u32, h as u32, w as usize * 4))
    }

    // ---- helpers ------------------------------------------------------------

    fn draw_background<S: DrawSurface + ?Sized>(&self, surface: &mut S, brand: Rgb) {
        let (width, height) = surface.size();
        let (w, h) = (width as f32, height as f32);
        surface.fill_rect(Rect::from_ltwh(0.0, 0.0, w, h), self.opts.theme.background);

        let strong = brand.with_alpha(0x80);
        let soft = brand.with_alpha(0x40);
        let stop = |offset, color| GradientStop { offset, color };

        let left = LinearGradient {
            start: (0.0, 0.0),
            end: (VIGNETTE_BAND, 0.0),
            stops: vec![stop(0.0, strong), stop(0.5, soft), stop(1.0, Rgba::TRANSPARENT)],
        };
        surface.fill_gradient(Rect::from_ltwh(0.0, 0.0, VIGNETTE_BAND, h), &left);

        let right = LinearGradient {
            start: (w - VIGNETTE_BAND, 0.0),
            end: (w, 0.0),
            stops: vec![stop(0.0, Rgba::TRANSPARENT), stop(0.5, soft), stop(1.0, strong)],
        };
        surface.fill_gradient(Rect::from_ltwh(w - VIGNETTE_BAND, 0.0, VIGNETTE_BAND, h), &right);
    }

    fn draw_headline<S: DrawSurface + ?Sized>(&self, surface: &mut S, layout: &HeadlineLayout, brand: Rgb) {
        let (width, _) = surface.size();
        let cx = width as f32 / 2.0;
        let theme = &self.opts.theme;
        let shadow = Some(Shadow { dx: 6.0, dy: 6.0, blur: 12.0, color: theme.headline_shadow });

        let small = TextPaint { font: FontSpec::black(HEADLINE_SMALL_SIZE), color: theme.headline, shadow };
        let big = TextPaint { font: FontSpec::black(layout.highlight_size), color: brand.opaque(), shadow };

        let h = &layout.headline;
        surface.draw_text(&h.lead, (cx, layout.line1_y), TextAlign::Center, &small);
        surface.draw_text(&h.highlight, (cx, layout.line2_y), TextAlign::Center, &big);
        surface.draw_text(&h.tail, (cx, layout.line3_y), TextAlign::Center, &small);
    }

    fn draw_wordmark<S: DrawSurface + ?Sized>(&self, surface: &mut S, brand: Rgb) {
        let (cx, y) = footer_anchor(surface.size());
        let theme = &self.opts.theme;

        let mark = TextPaint { font: FontSpec::bold(32.0), color: theme.wordmark, shadow: None };
        let mark_width = surface.measure_width(&self.opts.wordmark, mark.font);
        let start_x = cx - (mark_width + 80.0) / 2.0;
        surface.draw_text(&self.opts.wordmark, (start_x, y), TextAlign::Left, &mark);

        let badge = Rect::from_ltwh(start_x + mark_width + 10.0, y - 16.0, 60.0, 32.0);
        surface.fill_round_rect(badge, 4.0, brand.opaque());

        let label = TextPaint { font: FontSpec::bold(16.0), color: theme.badge_label, shadow: None };
        let (badge_cx, _) = badge.center();
        surface.draw_text(&self.opts.badge_label, (badge_cx, y - 2.0), TextAlign::Center, &label);
    }
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

fn footer_anchor((width, height): (i32, i32)) -> (f32, f32) {
    (width as f32 / 2.0, height as f32 - FOOTER_OFFSET)
}
