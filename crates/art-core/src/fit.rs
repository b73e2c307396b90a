// File: crates/art-core/src/fit.rs
// Summary: Shrink-to-fit font sizing for the highlighted headline line.

use log::debug;

use crate::text::{FontSpec, TextMeasure};
use crate::types::HEADLINE_FIT_STEP;

/// Largest black-weight size in `[min_size, max_size]`, stepping down by 5px, at which
/// `text` fits in `max_width`. Returns `min_size` when nothing fits; the caller draws
/// the overflowing text as is.
pub fn fit_text_to_width<M: TextMeasure + ?Sized>(
    measure: &M,
    text: &str,
    max_width: f32,
    min_size: f32,
    max_size: f32,
) -> f32 {
    let mut size = max_size;
    while size >= min_size {
        let width = measure.measure_width(text, FontSpec::black(size));
        if width <= max_width {
            debug!("fit '{text}' at {size}px ({width:.1} <= {max_width:.1})");
            return size;
        }
        size -= HEADLINE_FIT_STEP;
    }
    debug!("fit '{text}' floored at {min_size}px, overflowing {max_width:.1}");
    min_size
}
