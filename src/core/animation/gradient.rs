use crate::core::data::colour::Colour;
use rayon::prelude::*;

/// Colours for the `point_count - 1` segments of a polyline.
///
/// Segment `i` gets the fully saturated hue
/// `base_hue + span * i / (point_count - 1)`, wrapped into `[0, 1)`.
#[must_use]
pub fn segment_colours(base_hue: f64, span: f64, point_count: usize) -> Vec<Colour> {
    if point_count < 2 {
        return Vec::new();
    }

    let last_index = (point_count - 1) as f64;

    (0..point_count - 1)
        .into_par_iter()
        .map(|index| {
            let progress = index as f64 / last_index;
            let hue = (base_hue + progress * span).rem_euclid(1.0);
            Colour::from_hsv(hue, 1.0, 1.0)
        })
        .collect()
}
