use crate::core::animation::{
    AnimationConfig, ConfigError, FrameDescription, Intent, StepReport, Timestamp, ViewState,
    build_frame, step_view,
};
use crate::core::curves::peano::CurveError;
use crate::core::data::viewport::Viewport;
use log::debug;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AnimationError {
    #[error("failed to generate curve for frame: {0}")]
    Curve(#[from] CurveError),
}

/// Owns the view state of the animation and turns one intent snapshot per tick
/// into a frame description.
///
/// Ticks must be driven sequentially by a single host loop.
pub struct AnimationController {
    config: AnimationConfig,
    state: ViewState,
}

impl AnimationController {
    pub fn new(config: AnimationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            state: ViewState::initial(&config),
        })
    }

    /// Advances the state by one tick, then produces the frame for `viewport`.
    ///
    /// On error the state has still advanced; the host should skip drawing
    /// this frame and carry on with the next tick.
    pub fn tick(
        &mut self,
        intent: Intent,
        now: Timestamp,
        viewport: Viewport,
    ) -> Result<FrameDescription, AnimationError> {
        self.advance(intent, now);
        self.frame(viewport)
    }

    pub fn advance(&mut self, intent: Intent, now: Timestamp) -> StepReport {
        let report = step_view(&mut self.state, intent, now, &self.config);

        if report.zoomed {
            debug!(
                "zoom accepted at {} ms, scale now {:.4}{}",
                now,
                self.state.scale,
                if report.scale_clamped { " (clamped)" } else { "" }
            );
        }

        if report.panned {
            debug!(
                "pan accepted at {} ms, offset now ({}, {})",
                now, self.state.offset.x, self.state.offset.y
            );
        }

        if report.depth_advanced {
            debug!("curve depth advanced to {}", self.state.depth);
        }

        report
    }

    /// Produces the frame for the current state without advancing it.
    pub fn frame(&self, viewport: Viewport) -> Result<FrameDescription, AnimationError> {
        Ok(build_frame(&self.state, &self.config, viewport)?)
    }

    pub fn reset(&mut self) {
        self.state = ViewState::initial(&self.config);
        debug!("view reset");
    }

    #[must_use]
    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new(AnimationConfig::default()).expect("default animation config is valid")
    }
}
