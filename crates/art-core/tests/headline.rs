// File: crates/art-core/tests/headline.rs
// Purpose: Headline templates and shrink-to-fit sizing, measured with a fixed-advance font.

use art_core::{fit_text_to_width, ArtworkRequest, Compositor, FixedAdvance, Headline, MissionVariant, Rgb};

const SAFE_WIDTH: f32 = 980.0;

fn green() -> Rgb {
    Rgb::parse("#22C55E").unwrap()
}

#[test]
fn follow_instagram_uppercases_company() {
    let req = ArtworkRequest::new("Nike", green(), MissionVariant::FollowInstagram);
    let h = Headline::for_request(&req);
    assert_eq!(h.lines(), ["SIGA O", "NIKE", "NO INSTAGRAM"]);
}

#[test]
fn empty_company_falls_back_to_time() {
    let req = ArtworkRequest::new("", green(), MissionVariant::FollowInstagram);
    assert_eq!(Headline::for_request(&req).highlight, "TIME");
}

#[test]
fn pro_player_lines_ignore_company() {
    for name in ["", "Nike", "a very long company name indeed"] {
        let req = ArtworkRequest::new(name, green(), MissionVariant::ChooseProPlayer);
        assert_eq!(Headline::for_request(&req).lines(), ["ESCOLHA O SEU", "PRO PLAYER", "FAVORITO"]);
    }
}

#[test]
fn fit_keeps_max_size_when_text_fits() {
    let m = FixedAdvance::default();
    assert_eq!(fit_text_to_width(&m, "NIKE", SAFE_WIDTH, 130.0, 160.0), 160.0);
    assert_eq!(fit_text_to_width(&m, "PRO PLAYER", SAFE_WIDTH, 130.0, 160.0), 160.0);
}

#[test]
fn fit_steps_down_by_five_until_width_fits_or_floor() {
    let m = FixedAdvance::default();
    for n in 1..=24usize {
        let text = "W".repeat(n);
        let got = fit_text_to_width(&m, &text, SAFE_WIDTH, 130.0, 160.0);

        // Reference: largest size in 160, 155, ..., 130 whose width fits; else the floor.
        let want = (0..=6)
            .map(|k| 160.0 - 5.0 * k as f32)
            .find(|s| n as f32 * s * 0.6 <= SAFE_WIDTH)
            .unwrap_or(130.0);

        assert_eq!(got, want, "n={n}");
        assert!((160.0 - got) % 5.0 == 0.0, "size {got} is not on the 5px grid");
        assert!(got >= 130.0);
    }
}

#[test]
fn fit_floors_at_min_even_when_still_overflowing() {
    let m = FixedAdvance::default();
    let text = "X".repeat(40);
    let size = fit_text_to_width(&m, &text, SAFE_WIDTH, 130.0, 160.0);
    assert_eq!(size, 130.0);
    assert!(text.len() as f32 * size * 0.6 > SAFE_WIDTH);
}

#[test]
fn layout_positions_follow_highlight_size() {
    let c = Compositor::default();
    let m = FixedAdvance::default();

    let short = c.layout(&m, 1080, &ArtworkRequest::new("NIKE", green(), MissionVariant::FollowInstagram));
    assert_eq!((short.line1_y, short.line2_y), (120.0, 220.0));
    assert_eq!(short.highlight_size, 160.0);
    assert_eq!(short.line3_y, 220.0 + 160.0 + 80.0);

    // 12 glyphs: 12 * 0.6 * 135 = 972 <= 980
    let long = c.layout(&m, 1080, &ArtworkRequest::new("ABCDEFGHIJKL", green(), MissionVariant::FollowInstagram));
    assert_eq!(long.highlight_size, 135.0);
    assert_eq!(long.line3_y, 220.0 + 135.0 + 80.0);
}
