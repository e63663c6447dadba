pub mod config;
pub mod frame;
pub mod gradient;
pub mod intent;
pub mod view_state;

pub use config::{AnimationConfig, ConfigError};
pub use frame::{FrameDescription, Segment, build_frame};
pub use intent::{Intent, Timestamp};
pub use view_state::{StepReport, ViewState, step_view};
