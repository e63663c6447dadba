//! Windowed host loop: fixed-rate ticks, software raster and an egui status overlay.

use std::time::{Duration, Instant};

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{info, warn};
use winit::{
    event::{Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    keyboard::PhysicalKey,
    window::Window,
};

use crate::controllers::animation::AnimationController;
use crate::core::data::viewport::Viewport;
use crate::input::gui::display_config::DisplayConfig;
use crate::input::gui::key_input::KeyInputState;
use crate::presenters::pixels::presenter::{PixelsPresenter, PresenterError};

pub struct GuiApp {
    window: &'static Window,
    width: u32,
    height: u32,
    presenter: PixelsPresenter,
    controller: AnimationController,
    input: KeyInputState,
    frame_budget: Duration,
    started: Instant,
    last_tick_duration: Option<Duration>,
    skipped_frames: u64,
    last_error_message: Option<String>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl GuiApp {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        display: &DisplayConfig,
        presenter: PixelsPresenter,
        controller: AnimationController,
    ) -> Self {
        let size = window.inner_size();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            window,
            width: size.width,
            height: size.height,
            presenter,
            controller,
            input: KeyInputState::default(),
            frame_budget: display.frame_budget(),
            started: Instant::now(),
            last_tick_duration: None,
            skipped_frames: 0,
            last_error_message: None,
            egui_ctx,
            egui_state,
        }
    }

    /// Blocks until the window is closed or Escape is pressed.
    pub fn run(mut self, event_loop: EventLoop<()>) -> anyhow::Result<()> {
        let mut next_tick = Instant::now();
        let mut failure: Option<PresenterError> = None;

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == self.window.id() => {
                let _ = self.egui_state.on_window_event(self.window, event);

                if let Err(err) = self.handle_window_event(event, elwt) {
                    failure = Some(err);
                    elwt.exit();
                }
            }
            Event::AboutToWait => {
                let now = Instant::now();

                if now >= next_tick {
                    self.window.request_redraw();
                    next_tick += self.frame_budget;

                    // fell behind by more than a frame, don't try to catch up
                    if next_tick < now {
                        next_tick = now + self.frame_budget;
                    }
                }

                elwt.set_control_flow(ControlFlow::WaitUntil(next_tick));
            }
            _ => {}
        })?;

        match failure {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    fn handle_window_event(
        &mut self,
        event: &WindowEvent,
        elwt: &EventLoopWindowTarget<()>,
    ) -> Result<(), PresenterError> {
        match event {
            WindowEvent::CloseRequested => {
                info!("window closed");
                elwt.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key_code),
                        state,
                        ..
                    },
                ..
            } => {
                self.input.handle_key_event(*key_code, *state);

                if self.input.quit_requested() {
                    info!("quit requested");
                    elwt.exit();
                }
            }
            WindowEvent::Focused(false) => self.input.release_all(),
            WindowEvent::Resized(size) => self.resize(size.width, size.height)?,
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                let size = self.window.inner_size();
                self.resize(size.width, size.height)?;
            }
            WindowEvent::RedrawRequested => self.tick_and_render()?,
            _ => {}
        }

        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), PresenterError> {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.presenter.resize(width, height)
    }

    fn now_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    fn tick_and_render(&mut self) -> Result<(), PresenterError> {
        let snapshot = self.input.snapshot();
        let now = self.now_ms();

        if snapshot.reset {
            self.controller.reset();
        }

        // minimised: keep the clock and state moving, draw nothing
        let Ok(viewport) = Viewport::new(self.width, self.height) else {
            self.controller.advance(snapshot.intent, now);
            return Ok(());
        };

        let tick_start = Instant::now();

        match self.controller.tick(snapshot.intent, now, viewport) {
            Ok(frame) => {
                self.presenter.draw(&frame)?;
                self.last_error_message = None;
            }
            Err(err) => {
                warn!("skipping frame: {}", err);
                self.skipped_frames += 1;
                self.last_error_message = Some(err.to_string());
            }
        }

        self.last_tick_duration = Some(tick_start.elapsed());

        let mut egui_output = self.update_ui();
        self.egui_state.handle_platform_output(
            self.window,
            std::mem::take(&mut egui_output.platform_output),
        );

        self.presenter.render(egui_output, &self.egui_ctx)
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let state = *self.controller.view_state();
        let max_depth = self.controller.config().max_depth;

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Status")
                .default_pos([10.0, 10.0])
                .default_size([220.0, 180.0])
                .show(ctx, |ui| {
                    ui.heading("Peano Explorer");
                    ui.separator();

                    ui.label(format!("Depth: {} / {}", state.depth, max_depth));
                    ui.label(format!("Scale: {:.4}", state.scale));
                    ui.label(format!(
                        "Offset: ({:.0}, {:.0})",
                        state.offset.x, state.offset.y
                    ));
                    ui.label(format!("Hue: {:.3}", state.hue));

                    ui.separator();
                    ui.label(format!("Window size: {}x{}", self.width, self.height));
                    if let Some(duration) = self.last_tick_duration {
                        ui.label(format!("Frame time: {:.2} ms", duration.as_secs_f64() * 1e3));
                    }
                    if self.skipped_frames > 0 {
                        ui.label(format!("Skipped frames: {}", self.skipped_frames));
                    }
                    if let Some(message) = &self.last_error_message {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }

                    ui.separator();
                    ui.small("WASD pan, Up/Down zoom, R reset, Esc quit");
                });
        })
    }
}
