use crate::core::animation::config::AnimationConfig;
use crate::core::animation::gradient::segment_colours;
use crate::core::animation::view_state::ViewState;
use crate::core::curves::peano::{CurveError, generate};
use crate::core::data::colour::Colour;
use crate::core::data::orientation::Orientation;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Orientation of the outermost cell of every frame.
pub const ROOT_ORIENTATION: Orientation = Orientation::Clockwise;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub colour: Colour,
}

/// Everything a render target needs to draw one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameDescription {
    pub viewport: Viewport,
    pub depth: u32,
    pub center: Point,
    pub cell_size: f64,
    pub segments: Vec<Segment>,
}

impl FrameDescription {
    #[must_use]
    pub fn point_count(&self) -> usize {
        if self.segments.is_empty() {
            1
        } else {
            self.segments.len() + 1
        }
    }
}

pub fn build_frame(
    state: &ViewState,
    config: &AnimationConfig,
    viewport: Viewport,
) -> Result<FrameDescription, CurveError> {
    let cell_size = viewport.min_dimension() * state.scale * config.base_fraction;
    let center = viewport.center() + state.offset;

    let curve = generate(center, cell_size, state.depth, ROOT_ORIENTATION)?;
    let colours = segment_colours(state.hue, config.hue_span, curve.len());

    let segments = curve
        .windows(2)
        .zip(colours)
        .map(|(pair, colour)| Segment {
            from: pair[0],
            to: pair[1],
            colour,
        })
        .collect();

    Ok(FrameDescription {
        viewport,
        depth: state.depth,
        center,
        cell_size,
        segments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(800, 600).unwrap()
    }

    #[test]
    fn depth_zero_frame_has_no_segments() {
        let config = AnimationConfig::default();
        let state = ViewState::initial(&config);

        let frame = build_frame(&state, &config, viewport()).unwrap();

        assert!(frame.segments.is_empty());
        assert_eq!(frame.point_count(), 1);
        assert_eq!(frame.center, Point::new(400.0, 300.0));
    }

    #[test]
    fn cell_size_scales_with_smaller_side() {
        let config = AnimationConfig::default();
        let state = ViewState {
            scale: 0.5,
            ..ViewState::initial(&config)
        };

        let frame = build_frame(&state, &config, viewport()).unwrap();

        assert!((frame.cell_size - 600.0 * 0.5 * 0.8).abs() < 1e-9);
    }

    #[test]
    fn offset_moves_center() {
        let config = AnimationConfig::default();
        let state = ViewState {
            offset: Point::new(-20.0, 40.0),
            ..ViewState::initial(&config)
        };

        let frame = build_frame(&state, &config, viewport()).unwrap();

        assert_eq!(frame.center, Point::new(380.0, 340.0));
    }

    #[test]
    fn segments_chain_curve_points_in_order() {
        let config = AnimationConfig::default();
        let state = ViewState {
            depth: 2,
            ..ViewState::initial(&config)
        };

        let frame = build_frame(&state, &config, viewport()).unwrap();
        let curve = generate(frame.center, frame.cell_size, 2, ROOT_ORIENTATION).unwrap();

        assert_eq!(frame.segments.len(), 80);
        assert_eq!(frame.point_count(), 81);
        for (segment, pair) in frame.segments.iter().zip(curve.windows(2)) {
            assert_eq!(segment.from, pair[0]);
            assert_eq!(segment.to, pair[1]);
        }
    }

    #[test]
    fn first_segment_colour_is_current_hue() {
        let config = AnimationConfig::default();
        let state = ViewState {
            depth: 1,
            hue: 0.5,
            ..ViewState::initial(&config)
        };

        let frame = build_frame(&state, &config, viewport()).unwrap();

        assert_eq!(frame.segments[0].colour, Colour::from_hsv(0.5, 1.0, 1.0));
    }
}
