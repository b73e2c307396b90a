// File: crates/art-examples/src/bin/nike.rs
// Summary: Minimal example that renders both mission layouts for one brand to PNG.

use art_core::assets::builtin_icon;
use art_core::{ArtworkRequest, Assets, Compositor, MissionVariant, Rgb};

fn main() {
    let brand = Rgb::parse("#22C55E").expect("valid color");
    let icon = builtin_icon(120).expect("icon");
    let compositor = Compositor::default();

    for (mission, file) in [
        (MissionVariant::FollowInstagram, "example_nike_follow.png"),
        (MissionVariant::ChooseProPlayer, "example_nike_proplayer.png"),
    ] {
        let request = ArtworkRequest::new("Nike", brand, mission);
        let png = compositor
            .render_to_png(&request, Assets { icon: Some(&icon), logo: None })
            .expect("render to png");

        let out = std::path::PathBuf::from("target/out").join(file);
        std::fs::create_dir_all(out.parent().unwrap()).unwrap();
        std::fs::write(&out, png).expect("write png");
        println!("Wrote {}", out.display());
    }
}
