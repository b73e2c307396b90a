// File: crates/art-core/src/upload.rs
// Summary: Logo upload: PNG-only validation, minimum size check, square "contain" normalization.

use std::ffi::OsStr;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat, RgbaImage};
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{ArtError, Result};

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// Public URL prefix under which stored files are served.
pub const UPLOADS_PREFIX: &str = "/uploads/";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_bytes: usize,
    pub min_side: u32,
    pub normalized_side: u32,
    pub uploads_dir: PathBuf,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            min_side: 500,
            normalized_side: 500,
            uploads_dir: PathBuf::from("uploads"),
        }
    }
}

impl UploadPolicy {
    pub fn with_dir(uploads_dir: impl Into<PathBuf>) -> Self {
        Self { uploads_dir: uploads_dir.into(), ..Self::default() }
    }

    /// Map a `/uploads/<file>` URL back to a path inside the uploads directory.
    pub fn resolve(&self, public_path: &str) -> Option<PathBuf> {
        upload_file_name(public_path).map(|file| self.uploads_dir.join(file))
    }

    pub(crate) fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String> {
        std::fs::create_dir_all(&self.uploads_dir)?;
        std::fs::write(self.uploads_dir.join(file_name), bytes)?;
        Ok(format!("{UPLOADS_PREFIX}{file_name}"))
    }
}

/// File component of a `/uploads/<file>` URL; `None` for anything served elsewhere.
pub fn upload_file_name(public_path: &str) -> Option<&OsStr> {
    let name = public_path.strip_prefix(UPLOADS_PREFIX)?;
    Path::new(name).file_name()
}

/// Response for an accepted logo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedLogo {
    pub success: bool,
    pub logo_path: String,
    pub file_name: String,
    /// Dimensions of the image as uploaded, `WxH`.
    pub dimensions: String,
}

pub struct LogoUploader {
    policy: UploadPolicy,
}

impl LogoUploader {
    pub fn new(policy: UploadPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    /// Validate, normalize and store an uploaded logo.
    pub fn accept(&self, bytes: &[u8], content_type: Option<&str>) -> Result<UploadedLogo> {
        let (png, (w, h)) = self.normalize(bytes, content_type)?;
        let file_name = format!(
            "logo-{}-{}.png",
            chrono::Utc::now().timestamp_millis(),
            random_suffix()
        );
        let logo_path = self.policy.store(&file_name, &png)?;
        info!("stored logo {logo_path} ({w}x{h} uploaded)");
        Ok(UploadedLogo { success: true, logo_path, file_name, dimensions: format!("{w}x{h}") })
    }

    /// Validate and normalize without touching the disk.
    /// Returns the PNG bytes of the normalized logo and the original dimensions.
    pub fn normalize(&self, bytes: &[u8], content_type: Option<&str>) -> Result<(Vec<u8>, (u32, u32))> {
        if bytes.is_empty() {
            return Err(ArtError::UploadRejected("No file uploaded".into()));
        }
        if content_type.is_some_and(|ct| ct != "image/png") || !bytes.starts_with(PNG_SIGNATURE) {
            return Err(ArtError::UploadRejected("Only PNG files are allowed".into()));
        }
        if bytes.len() > self.policy.max_bytes {
            return Err(ArtError::UploadRejected(format!(
                "File too large: {} bytes (limit {})",
                bytes.len(),
                self.policy.max_bytes
            )));
        }

        let img = image::load_from_memory_with_format(bytes, ImageFormat::Png)?;
        let (w, h) = img.dimensions();
        let min = self.policy.min_side;
        if w < min || h < min {
            return Err(ArtError::UploadRejected(format!(
                "Image must be at least {min}x{min} pixels"
            )));
        }

        let side = self.policy.normalized_side;
        let out = contain(&img, side);
        let mut png = Vec::new();
        DynamicImage::ImageRgba8(out).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok((png, (w, h)))
    }
}

/// Scale to fit inside `side`×`side` keeping the aspect ratio, centered on transparency.
fn contain(img: &DynamicImage, side: u32) -> RgbaImage {
    let scaled = img.resize(side, side, FilterType::Lanczos3);
    let mut canvas = RgbaImage::new(side, side);
    let x = (side - scaled.width()) / 2;
    let y = (side - scaled.height()) / 2;
    image::imageops::overlay(&mut canvas, &scaled.to_rgba8(), x as i64, y as i64);
    canvas
}

fn random_suffix() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..7].to_string()
}
