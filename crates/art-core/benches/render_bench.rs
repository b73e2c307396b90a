use anyhow::Result;
use art_core::assets::builtin_icon;
use art_core::{ArtworkRequest, Assets, Compositor, MissionVariant, Rgb};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn bench_render(c: &mut Criterion) {
    let compositor = Compositor::default();
    let icon = builtin_icon(120).expect("icon");
    let brand = Rgb::parse("#22C55E").expect("color");

    let mut group = c.benchmark_group("render_png_bytes");
    for (label, mission) in [
        ("follow_instagram", MissionVariant::FollowInstagram),
        ("choose_proplayer", MissionVariant::ChooseProPlayer),
    ] {
        group.bench_function(label, |b| {
            let req = ArtworkRequest::new("NIKE", brand, mission);
            let assets = Assets { icon: Some(&icon), logo: None };
            b.iter(|| -> Result<()> {
                let bytes = compositor.render_to_png(&req, assets)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
