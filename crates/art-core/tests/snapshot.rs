// File: crates/art-core/tests/snapshot.rs
// Purpose: Golden snapshots with bless flow.
// Behavior:
// - Renders each mission variant to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.
//   Text depends on the fonts installed, so snapshots are per machine.

use art_core::assets::builtin_icon;
use art_core::{ArtworkRequest, Assets, Compositor, MissionVariant, Rgb};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render(request: &ArtworkRequest) -> Vec<u8> {
    let icon = builtin_icon(120).expect("icon");
    Compositor::default()
        .render_to_png(request, Assets { icon: Some(&icon), logo: None })
        .expect("render bytes")
}

#[test]
fn golden_follow_instagram() {
    let req = ArtworkRequest::new("NIKE", Rgb::parse("#22C55E").unwrap(), MissionVariant::FollowInstagram);
    write_or_compare("follow_instagram.png", &render(&req));
}

#[test]
fn golden_choose_pro_player() {
    let req = ArtworkRequest::new("NIKE", Rgb::parse("#3B82F6").unwrap(), MissionVariant::ChooseProPlayer);
    write_or_compare("choose_pro_player.png", &render(&req));
}
