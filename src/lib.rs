mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use controllers::animation::{AnimationController, AnimationError};
pub use controllers::headless::{HeadlessController, HeadlessError, RenderSummary, TickPlan};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::draw_frame::{RenderTarget, draw_frame};
pub use crate::core::animation::{
    AnimationConfig, ConfigError, FrameDescription, Intent, Segment, Timestamp, ViewState,
};
pub use crate::core::curves::peano::{
    Curve, CurveError, InvalidParameter, MAX_GENERATION_DEPTH, curve_len, generate,
};
pub use crate::core::data::{
    Colour, Orientation, PixelBuffer, PixelBufferError, Point, Rgba, Viewport, ViewportError,
};
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use input::gui::display_config::DisplayConfig;
