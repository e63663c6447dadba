use std::path::Path;
use std::time::{Duration, Instant};

use log::{info, warn};
use thiserror::Error;

use crate::controllers::animation::{AnimationController, AnimationError};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::draw_frame::draw_frame;
use crate::core::animation::{AnimationConfig, ConfigError, Intent, Timestamp};
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::viewport::Viewport;

#[derive(Debug, Error)]
pub enum HeadlessError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Animation(#[from] AnimationError),
    #[error(transparent)]
    PixelBuffer(#[from] PixelBufferError),
    #[error("nothing rendered yet")]
    NothingRendered,
    #[error("failed to write frame: {0}")]
    Io(#[from] std::io::Error),
}

/// Fixed-step replay of the animation without a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickPlan {
    pub ticks: u32,
    pub tick_ms: u64,
    pub intent: Intent,
}

impl Default for TickPlan {
    fn default() -> Self {
        Self {
            ticks: 250,
            tick_ms: 16,
            intent: Intent::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSummary {
    pub depth: u32,
    pub segments: usize,
    pub scale: f64,
    pub duration: Duration,
}

/// Drives the animation for a fixed number of ticks on a synthetic clock and
/// rasterises the final frame for a file presenter.
pub struct HeadlessController<P: FilePresenterPort> {
    presenter: P,
    animation: AnimationController,
    viewport: Viewport,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> HeadlessController<P> {
    pub fn new(
        presenter: P,
        config: AnimationConfig,
        viewport: Viewport,
    ) -> Result<Self, HeadlessError> {
        Ok(Self {
            presenter,
            animation: AnimationController::new(config)?,
            viewport,
            buffer: None,
        })
    }

    pub fn render(&mut self, plan: TickPlan) -> Result<RenderSummary, HeadlessError> {
        info!(
            "rendering {} ticks at {} ms into {}x{}",
            plan.ticks,
            plan.tick_ms,
            self.viewport.width(),
            self.viewport.height()
        );

        let start = Instant::now();

        for tick in 0..plan.ticks {
            let now: Timestamp = u64::from(tick).saturating_mul(plan.tick_ms);
            self.animation.advance(plan.intent, now);
        }

        let frame = self.animation.frame(self.viewport).inspect_err(|err| {
            warn!("skipping frame: {}", err);
        })?;

        let mut buffer = PixelBuffer::new(self.viewport.width(), self.viewport.height())?;
        draw_frame(&frame, &mut buffer, Colour::BLACK);
        self.buffer = Some(buffer);

        let summary = RenderSummary {
            depth: frame.depth,
            segments: frame.segments.len(),
            scale: self.animation.view_state().scale,
            duration: start.elapsed(),
        };

        info!(
            "depth {} with {} segments in {:?}",
            summary.depth, summary.segments, summary.duration
        );

        Ok(summary)
    }

    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), HeadlessError> {
        let buffer = self.buffer.as_ref().ok_or(HeadlessError::NothingRendered)?;
        self.presenter.present(buffer, filepath.as_ref())?;

        info!("wrote {}", filepath.as_ref().display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenters::file::ppm::PpmFilePresenter;
    use std::cell::RefCell;

    #[derive(Default)]
    struct CapturingPresenter {
        presented: RefCell<Vec<(u32, u32)>>,
    }

    impl FilePresenterPort for &CapturingPresenter {
        fn present(&self, buffer: &PixelBuffer, _filepath: &Path) -> std::io::Result<()> {
            self.presented
                .borrow_mut()
                .push((buffer.width(), buffer.height()));
            Ok(())
        }
    }

    fn viewport() -> Viewport {
        Viewport::new(120, 90).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let config = AnimationConfig {
            min_scale: 0.0,
            ..AnimationConfig::default()
        };

        let result = HeadlessController::new(PpmFilePresenter::new(), config, viewport());

        assert!(matches!(result, Err(HeadlessError::Config(_))));
    }

    #[test]
    fn write_before_render_fails() {
        let presenter = CapturingPresenter::default();
        let controller =
            HeadlessController::new(&presenter, AnimationConfig::default(), viewport()).unwrap();

        assert!(matches!(
            controller.write("unused.ppm"),
            Err(HeadlessError::NothingRendered)
        ));
        assert!(presenter.presented.borrow().is_empty());
    }

    #[test]
    fn render_reaches_expected_depth() {
        let presenter = CapturingPresenter::default();
        let mut controller =
            HeadlessController::new(&presenter, AnimationConfig::default(), viewport()).unwrap();

        let summary = controller
            .render(TickPlan {
                ticks: 100,
                ..TickPlan::default()
            })
            .unwrap();

        assert_eq!(summary.depth, 2);
        assert_eq!(summary.segments, 80);
    }

    #[test]
    fn render_draws_something_on_black() {
        let presenter = CapturingPresenter::default();
        let mut controller =
            HeadlessController::new(&presenter, AnimationConfig::default(), viewport()).unwrap();

        controller
            .render(TickPlan {
                ticks: 60,
                ..TickPlan::default()
            })
            .unwrap();

        let buffer = controller.buffer().unwrap();
        assert!(buffer.buffer().iter().any(|&byte| byte != 0));
        assert_eq!(buffer.pixel(0, 0), Some(Colour::BLACK));

        controller.write("unused.ppm").unwrap();
        assert_eq!(*presenter.presented.borrow(), vec![(120, 90)]);
    }

    #[test]
    fn zoom_plan_is_debounced_on_synthetic_clock() {
        let presenter = CapturingPresenter::default();
        let mut controller =
            HeadlessController::new(&presenter, AnimationConfig::default(), viewport()).unwrap();

        // 16 ms ticks: accepted at 0, 208, 416, 624, 832
        let summary = controller
            .render(TickPlan {
                ticks: 60,
                tick_ms: 16,
                intent: Intent {
                    zoom_in: true,
                    ..Intent::default()
                },
            })
            .unwrap();

        assert!((summary.scale - 1.3).abs() < 1e-9, "scale={}", summary.scale);
    }

    #[test]
    fn writes_ppm_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.ppm");
        let mut controller =
            HeadlessController::new(PpmFilePresenter::new(), AnimationConfig::default(), viewport())
                .unwrap();

        controller.render(TickPlan::default()).unwrap();
        controller.write(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P6\n120 90\n255\n"));
    }
}
