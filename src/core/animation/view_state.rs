use crate::core::animation::config::AnimationConfig;
use crate::core::animation::intent::{Intent, Timestamp};
use crate::core::data::point::Point;

/// Mutable view and timing state of the animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub depth: u32,
    /// Progress towards the next depth, in `[0, 1)`.
    pub animation_progress: f64,
    pub scale: f64,
    pub offset: Point,
    /// Hue of the first segment, in `[0, 1)`.
    pub hue: f64,
    pub last_zoom_at: Option<Timestamp>,
    pub last_move_at: Option<Timestamp>,
}

impl ViewState {
    #[must_use]
    pub fn initial(config: &AnimationConfig) -> Self {
        Self {
            depth: 0,
            animation_progress: 0.0,
            scale: config.initial_scale,
            offset: Point::default(),
            hue: 0.0,
            last_zoom_at: None,
            last_move_at: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    pub zoomed: bool,
    pub scale_clamped: bool,
    pub panned: bool,
    pub depth_advanced: bool,
}

/// Advances `state` by one tick.
///
/// Zoom and pan are each debounced on their own timestamp; a request is only
/// accepted once more than the configured delay has passed since the last
/// accepted one. Depth and hue advance on every tick regardless of intent.
pub fn step_view(
    state: &mut ViewState,
    intent: Intent,
    now: Timestamp,
    config: &AnimationConfig,
) -> StepReport {
    let mut report = StepReport::default();

    if intent.wants_zoom() && debounce_elapsed(state.last_zoom_at, now, config.zoom_delay_ms) {
        report.scale_clamped = apply_zoom(state, intent.zoom_direction(), config);
        report.zoomed = true;
        state.last_zoom_at = Some(now);
    }

    if intent.wants_pan() && debounce_elapsed(state.last_move_at, now, config.move_delay_ms) {
        let (pan_x, pan_y) = intent.pan_direction();
        state.offset.x += f64::from(pan_x) * config.move_speed;
        state.offset.y += f64::from(pan_y) * config.move_speed;
        state.last_move_at = Some(now);
        report.panned = true;
    }

    report.depth_advanced = advance_depth(state, config);
    state.hue = (state.hue + config.hue_speed).rem_euclid(1.0);

    report
}

fn debounce_elapsed(last: Option<Timestamp>, now: Timestamp, delay_ms: u64) -> bool {
    last.is_none_or(|last| now.saturating_sub(last) > delay_ms)
}

/// Returns whether the new scale had to be clamped.
fn apply_zoom(state: &mut ViewState, direction: i8, config: &AnimationConfig) -> bool {
    let requested = state.scale + f64::from(direction) * config.zoom_speed;
    state.scale = requested.clamp(config.min_scale, config.max_scale);

    state.scale != requested
}

/// Returns whether the depth went up. The depth never decreases.
fn advance_depth(state: &mut ViewState, config: &AnimationConfig) -> bool {
    state.animation_progress += config.animation_speed;

    if state.animation_progress < 1.0 {
        return false;
    }

    state.animation_progress = 0.0;
    let previous = state.depth;
    state.depth = (state.depth + 1).min(config.max_depth);

    state.depth != previous
}
