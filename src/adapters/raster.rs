//! Software rasterisation of the render-target port onto a [`PixelBuffer`].

use crate::core::actions::draw_frame::ports::render_target::RenderTarget;
use crate::core::data::colour::{Colour, Rgba};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;

impl RenderTarget for PixelBuffer {
    fn clear(&mut self, colour: Colour) {
        self.fill(colour);
    }

    /// Bresenham walk along the major axis; a stroke of width `w` covers `w`
    /// pixels across the minor axis, each blended exactly once. The segment is
    /// first clipped to the buffer grown by `w`, so only pixels near the buffer
    /// are visited whatever the endpoints.
    fn draw_line(&mut self, from: Point, to: Point, colour: Rgba, width: u8) {
        if width == 0 || !from.is_finite() || !to.is_finite() {
            return;
        }

        let reach = i64::from(width);
        let margin = f64::from(width);
        let min = Point::new(-margin, -margin);
        let max = Point::new(
            f64::from(self.width()) - 1.0 + margin,
            f64::from(self.height()) - 1.0 + margin,
        );

        let Some((from, to)) = clip_segment(from, to, min, max) else {
            return;
        };

        let (x0, y0) = (from.x.round() as i64, from.y.round() as i64);
        let (x1, y1) = (to.x.round() as i64, to.y.round() as i64);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let x_major = dx >= -dy;

        let first_offset = -((reach - 1) / 2);
        let last_offset = reach / 2;

        let mut err = dx + dy;
        let mut x = x0;
        let mut y = y0;

        loop {
            for offset in first_offset..=last_offset {
                let (px, py) = if x_major { (x, y + offset) } else { (x + offset, y) };

                self.blend_pixel_clipped(px, py, colour);
            }

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const ABOVE: u8 = 4;
const BELOW: u8 = 8;

fn outcode(point: Point, min: Point, max: Point) -> u8 {
    let mut code = 0;

    if point.x < min.x {
        code |= LEFT;
    } else if point.x > max.x {
        code |= RIGHT;
    }

    if point.y < min.y {
        code |= ABOVE;
    } else if point.y > max.y {
        code |= BELOW;
    }

    code
}

/// Interpolates from the nearer end with `t` in `[0, 1]`, so the step never
/// exceeds half of `b - a` and equal ends stay exact.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let half_span = b * 0.5 - a * 0.5;

    if t <= 0.5 {
        a + half_span * (2.0 * t)
    } else {
        b - half_span * (2.0 * (1.0 - t))
    }
}

/// Cohen-Sutherland clip of `from -> to` against the rectangle `[min, max]`.
///
/// A clipped endpoint lands exactly on the edge it crossed. Differences are
/// taken on halved coordinates, so nothing overflows for finite endpoints.
fn clip_segment(
    mut from: Point,
    mut to: Point,
    min: Point,
    max: Point,
) -> Option<(Point, Point)> {
    // one pass per edge at most
    for _ in 0..4 {
        let from_code = outcode(from, min, max);
        let to_code = outcode(to, min, max);

        if from_code | to_code == 0 {
            break;
        }
        if from_code & to_code != 0 {
            return None;
        }

        let code = if from_code != 0 { from_code } else { to_code };
        let moved = if code & (LEFT | RIGHT) != 0 {
            let x = if code & LEFT != 0 { min.x } else { max.x };
            let t = (x * 0.5 - from.x * 0.5) / (to.x * 0.5 - from.x * 0.5);
            Point::new(x, lerp(from.y, to.y, t))
        } else {
            let y = if code & ABOVE != 0 { min.y } else { max.y };
            let t = (y * 0.5 - from.y * 0.5) / (to.y * 0.5 - from.y * 0.5);
            Point::new(lerp(from.x, to.x, t), y)
        };

        if from_code != 0 {
            from = moved;
        } else {
            to = moved;
        }
    }

    if outcode(from, min, max) & outcode(to, min, max) != 0 {
        return None;
    }

    let clamp = |point: Point| {
        Point::new(point.x.clamp(min.x, max.x), point.y.clamp(min.y, max.y))
    };

    Some((clamp(from), clamp(to)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Colour = Colour { r: 255, g: 0, b: 0 };

    fn lit_pixels(buffer: &PixelBuffer) -> Vec<(i64, i64)> {
        let mut lit = Vec::new();
        for y in 0..i64::from(buffer.height()) {
            for x in 0..i64::from(buffer.width()) {
                if buffer.pixel(x, y) != Some(Colour::BLACK) {
                    lit.push((x, y));
                }
            }
        }
        lit
    }

    #[test]
    fn clear_fills_buffer() {
        let mut buffer = PixelBuffer::new(4, 4).unwrap();

        buffer.clear(RED);

        assert_eq!(buffer.pixel(3, 3), Some(RED));
        assert_eq!(buffer.pixel(0, 0), Some(RED));
    }

    #[test]
    fn horizontal_line_of_width_one() {
        let mut buffer = PixelBuffer::new(6, 3).unwrap();

        buffer.draw_line(Point::new(1.0, 1.0), Point::new(4.0, 1.0), RED.with_alpha(255), 1);

        assert_eq!(lit_pixels(&buffer), vec![(1, 1), (2, 1), (3, 1), (4, 1)]);
    }

    #[test]
    fn vertical_line_of_width_one() {
        let mut buffer = PixelBuffer::new(3, 6).unwrap();

        buffer.draw_line(Point::new(1.0, 4.0), Point::new(1.0, 2.0), RED.with_alpha(255), 1);

        assert_eq!(lit_pixels(&buffer), vec![(1, 2), (1, 3), (1, 4)]);
    }

    #[test]
    fn diagonal_line_steps_both_axes() {
        let mut buffer = PixelBuffer::new(4, 4).unwrap();

        buffer.draw_line(Point::new(0.0, 0.0), Point::new(3.0, 3.0), RED.with_alpha(255), 1);

        assert_eq!(lit_pixels(&buffer), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn width_three_covers_neighbouring_rows() {
        let mut buffer = PixelBuffer::new(5, 5).unwrap();

        buffer.draw_line(Point::new(1.0, 2.0), Point::new(3.0, 2.0), RED.with_alpha(255), 3);

        let lit = lit_pixels(&buffer);
        assert_eq!(lit.len(), 9);
        for x in 1..=3 {
            for y in 1..=3 {
                assert!(lit.contains(&(x, y)), "({}, {}) should be lit", x, y);
            }
        }
    }

    #[test]
    fn width_two_extends_towards_positive_minor_axis() {
        let mut buffer = PixelBuffer::new(5, 5).unwrap();

        buffer.draw_line(Point::new(2.0, 0.0), Point::new(2.0, 1.0), RED.with_alpha(255), 2);

        assert_eq!(lit_pixels(&buffer), vec![(2, 0), (3, 0), (2, 1), (3, 1)]);
    }

    #[test]
    fn strokes_are_blended_with_alpha() {
        let mut buffer = PixelBuffer::new(3, 1).unwrap();

        buffer.draw_line(Point::new(0.0, 0.0), Point::new(2.0, 0.0), RED.with_alpha(85), 1);

        assert_eq!(buffer.pixel(1, 0), Some(Colour { r: 85, g: 0, b: 0 }));
    }

    #[test]
    fn pixels_outside_buffer_are_clipped() {
        let mut buffer = PixelBuffer::new(3, 3).unwrap();

        buffer.draw_line(Point::new(-5.0, 1.0), Point::new(10.0, 1.0), RED.with_alpha(255), 1);

        assert_eq!(lit_pixels(&buffer), vec![(0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn lines_entirely_off_screen_draw_nothing() {
        let mut buffer = PixelBuffer::new(3, 3).unwrap();

        buffer.draw_line(
            Point::new(1e12, 1e12),
            Point::new(1e12 + 5.0, 1e12),
            RED.with_alpha(255),
            3,
        );

        assert!(lit_pixels(&buffer).is_empty());
    }

    #[test]
    fn degenerate_strokes_are_ignored() {
        let mut buffer = PixelBuffer::new(3, 3).unwrap();

        buffer.draw_line(Point::new(0.0, 0.0), Point::new(2.0, 2.0), RED.with_alpha(255), 0);
        buffer.draw_line(Point::new(f64::NAN, 0.0), Point::new(2.0, 2.0), RED.with_alpha(255), 1);

        assert!(lit_pixels(&buffer).is_empty());
    }

    #[test]
    fn huge_finite_endpoints_do_not_overflow() {
        let mut buffer = PixelBuffer::new(3, 3).unwrap();

        buffer.draw_line(Point::new(1e19, 1.0), Point::new(1e19, 1.0), RED.with_alpha(255), 1);
        buffer.draw_line(Point::new(-1e19, 1.0), Point::new(-1e19, 1.0), RED.with_alpha(255), 3);
        buffer.draw_line(
            Point::new(f64::MAX, 0.0),
            Point::new(0.0, f64::MAX),
            RED.with_alpha(255),
            3,
        );

        assert!(lit_pixels(&buffer).is_empty());
    }

    #[test]
    fn very_long_crossing_line_is_clipped_before_walking() {
        let mut buffer = PixelBuffer::new(3, 3).unwrap();

        // would walk about 2e15 pixels without clipping
        buffer.draw_line(Point::new(-1e15, 1.0), Point::new(1e15, 1.0), RED.with_alpha(255), 1);

        assert_eq!(lit_pixels(&buffer), vec![(0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn extreme_opposite_endpoints_cross_the_buffer() {
        let mut buffer = PixelBuffer::new(3, 3).unwrap();

        buffer.draw_line(
            Point::new(-f64::MAX, 1.0),
            Point::new(f64::MAX, 1.0),
            RED.with_alpha(255),
            1,
        );

        assert_eq!(lit_pixels(&buffer), vec![(0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn clip_keeps_segment_inside_rectangle_untouched() {
        let min = Point::new(-1.0, -1.0);
        let max = Point::new(10.0, 10.0);

        let clipped = clip_segment(Point::new(1.0, 2.0), Point::new(5.0, 7.0), min, max);

        assert_eq!(clipped, Some((Point::new(1.0, 2.0), Point::new(5.0, 7.0))));
    }

    #[test]
    fn clip_rejects_segment_missing_rectangle() {
        let min = Point::new(0.0, 0.0);
        let max = Point::new(4.0, 4.0);

        assert_eq!(clip_segment(Point::new(-3.0, 5.0), Point::new(5.0, 9.0), min, max), None);
        assert_eq!(clip_segment(Point::new(6.0, 1.0), Point::new(6.0, 3.0), min, max), None);
    }

    #[test]
    fn clip_moves_far_endpoints_onto_edges() {
        let min = Point::new(-1.0, -1.0);
        let max = Point::new(3.0, 3.0);

        let clipped = clip_segment(Point::new(-1e15, 1.0), Point::new(1e15, 1.0), min, max);

        assert_eq!(clipped, Some((Point::new(-1.0, 1.0), Point::new(3.0, 1.0))));
    }

    #[test]
    fn single_point_line_lights_one_pixel() {
        let mut buffer = PixelBuffer::new(3, 3).unwrap();

        buffer.draw_line(Point::new(1.2, 0.8), Point::new(0.9, 1.1), RED.with_alpha(255), 1);

        assert_eq!(lit_pixels(&buffer), vec![(1, 1)]);
    }
}
