use anyhow::Context;
use log::info;
use winit::{
    dpi::LogicalSize,
    event_loop::EventLoop,
    window::{Fullscreen, Window, WindowBuilder},
};

use crate::controllers::animation::AnimationController;
use crate::core::animation::AnimationConfig;
use crate::input::gui::app::GuiApp;
use crate::input::gui::display_config::DisplayConfig;
use crate::presenters::pixels::presenter::PixelsPresenter;

pub struct RunGuiCommand {
    display: DisplayConfig,
    animation: AnimationConfig,
}

impl RunGuiCommand {
    pub fn new(display: DisplayConfig, animation: AnimationConfig) -> Self {
        Self { display, animation }
    }

    pub fn execute(&self) -> anyhow::Result<()> {
        let controller =
            AnimationController::new(self.animation).context("invalid animation settings")?;

        let event_loop = EventLoop::new().context("failed to create event loop")?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(&self.display.title)
                .with_inner_size(LogicalSize::new(self.display.width, self.display.height))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .with_fullscreen(self.display.fullscreen.then_some(Fullscreen::Borderless(None)))
                .build(&event_loop)
                .context("failed to create window")?,
        ));

        let presenter = PixelsPresenter::new(window).context("failed to create pixels surface")?;

        info!(
            "window open at {}x{}, {} fps",
            self.display.width, self.display.height, self.display.target_fps
        );

        GuiApp::new(window, &event_loop, &self.display, presenter, controller).run(event_loop)
    }
}
