// File: crates/art-core/src/lib.rs
// Summary: Core library entry point; exports the compositor, surfaces and the upload/store glue.

pub mod assets;
pub mod color;
pub mod compositor;
pub mod error;
pub mod fit;
pub mod form;
pub mod geometry;
pub mod headline;
pub mod request;
pub mod session;
pub mod skia_surface;
pub mod store;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;
pub mod upload;

pub use assets::{AssetSource, RasterImage};
pub use color::{Rgb, Rgba};
pub use compositor::{Assets, Compositor, HeadlineLayout, RenderOptions};
pub use error::{ArtError, Result};
pub use fit::fit_text_to_width;
pub use form::{ArtworkForm, NewArtwork, TemplateType};
pub use headline::Headline;
pub use request::{ArtworkRequest, LogoRef, MissionVariant};
pub use session::{Download, DownloadHandler, PreviewSession};
pub use skia_surface::SkiaSurface;
pub use store::{Artwork, ArtworkPatch, ArtworkStore, GeneratedArtwork};
pub use surface::{DrawOp, DrawSurface, RecordingSurface};
pub use text::{FixedAdvance, FontSpec, TextMeasure, TextShaper};
pub use theme::Theme;
pub use upload::{LogoUploader, UploadPolicy, UploadedLogo};
