use crate::core::actions::draw_frame::ports::render_target::RenderTarget;
use crate::core::animation::frame::FrameDescription;
use crate::core::data::colour::{Colour, Rgba};

/// Stroke widths of the glow, drawn widest first.
pub const GLOW_WIDTHS: [u8; 3] = [3, 2, 1];

/// Alpha of a glow pass, proportional to its share of the widest stroke.
#[must_use]
pub fn glow_alpha(width: u8) -> u8 {
    let widest = u32::from(GLOW_WIDTHS[0]);

    (255 * u32::from(width) / widest).min(255) as u8
}

/// Clears `target` and strokes every segment of `frame` with a layered glow:
/// each segment is drawn three times, narrower and more transparent each time,
/// in the same base colour.
pub fn draw_frame<T: RenderTarget + ?Sized>(
    frame: &FrameDescription,
    target: &mut T,
    background: Colour,
) {
    target.clear(background);

    for segment in &frame.segments {
        for width in GLOW_WIDTHS {
            let colour: Rgba = segment.colour.with_alpha(glow_alpha(width));
            target.draw_line(segment.from, segment.to, colour, width);
        }
    }
}
