#[allow(clippy::module_inception)]
pub mod draw_frame;
pub mod ports;

pub use draw_frame::draw_frame;
pub use ports::render_target::RenderTarget;
