// File: crates/art-core/tests/upload.rs
// Purpose: Logo upload validation, square normalization and storage under the uploads dir.

use std::io::Cursor;

use art_core::{ArtError, LogoUploader, UploadPolicy};
use image::{GenericImageView, ImageFormat, Rgba, RgbaImage};

fn png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));
    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), ImageFormat::Png).expect("encode");
    out
}

fn rejection(err: ArtError) -> String {
    match err {
        ArtError::UploadRejected(msg) => msg,
        other => panic!("expected a rejection, got {other:?}"),
    }
}

#[test]
fn normalizes_to_transparent_square() {
    let up = LogoUploader::new(UploadPolicy::default());
    let (bytes, dims) = up.normalize(&png(600, 800), Some("image/png")).expect("accept");
    assert_eq!(dims, (600, 800));

    let out = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(out.dimensions(), (500, 500));
    // 600x800 scales to 375x500: transparent side bars, red middle.
    assert_eq!(out.get_pixel(0, 250).0[3], 0);
    assert_eq!(out.get_pixel(499, 250).0[3], 0);
    assert_eq!(out.get_pixel(250, 250).0, [255, 0, 0, 255]);
}

#[test]
fn rejects_small_images() {
    let up = LogoUploader::new(UploadPolicy::default());
    let err = up.normalize(&png(499, 800), None).unwrap_err();
    assert_eq!(rejection(err), "Image must be at least 500x500 pixels");
}

#[test]
fn rejects_non_png() {
    let up = LogoUploader::new(UploadPolicy::default());
    let err = up.normalize(b"GIF89a\x01\x00\x01\x00", None).unwrap_err();
    assert_eq!(rejection(err), "Only PNG files are allowed");

    let err = up.normalize(&png(600, 600), Some("image/jpeg")).unwrap_err();
    assert_eq!(rejection(err), "Only PNG files are allowed");
}

#[test]
fn rejects_empty_and_oversized() {
    let policy = UploadPolicy { max_bytes: 64, ..UploadPolicy::default() };
    let up = LogoUploader::new(policy);
    assert_eq!(rejection(up.normalize(&[], None).unwrap_err()), "No file uploaded");
    let msg = rejection(up.normalize(&png(600, 600), None).unwrap_err());
    assert!(msg.starts_with("File too large"), "{msg}");
}

#[test]
fn accept_stores_file_and_reports_original_size() {
    let dir = tempfile::tempdir().unwrap();
    let up = LogoUploader::new(UploadPolicy::with_dir(dir.path()));
    let res = up.accept(&png(700, 500), Some("image/png")).expect("accept");

    assert!(res.success);
    assert_eq!(res.dimensions, "700x500");
    assert!(res.file_name.starts_with("logo-") && res.file_name.ends_with(".png"));
    assert_eq!(res.logo_path, format!("/uploads/{}", res.file_name));

    let on_disk = up.policy().resolve(&res.logo_path).expect("resolvable");
    let stored = image::open(on_disk).expect("stored png");
    assert_eq!(stored.dimensions(), (500, 500));
}

#[test]
fn resolve_stays_inside_uploads_dir() {
    let policy = UploadPolicy::with_dir("/srv/uploads");
    assert_eq!(policy.resolve("/uploads/a.png"), Some("/srv/uploads/a.png".into()));
    assert_eq!(policy.resolve("/uploads/../../etc/passwd"), Some("/srv/uploads/passwd".into()));
    assert_eq!(policy.resolve("/static/a.png"), None);
}

#[test]
fn upload_response_uses_camel_case() {
    let dir = tempfile::tempdir().unwrap();
    let up = LogoUploader::new(UploadPolicy::with_dir(dir.path()));
    let res = up.accept(&png(500, 500), None).unwrap();
    let json = serde_json::to_value(&res).unwrap();
    assert_eq!(json["logoPath"], res.logo_path);
    assert_eq!(json["fileName"], res.file_name);
}
