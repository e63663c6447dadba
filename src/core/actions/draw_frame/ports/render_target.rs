use crate::core::data::colour::{Colour, Rgba};
use crate::core::data::point::Point;

pub trait RenderTarget {
    fn clear(&mut self, colour: Colour);
    fn draw_line(&mut self, from: Point, to: Point, colour: Rgba, width: u8);
}
