use std::time::Duration;

/// Window settings handed to the GUI host at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    pub target_fps: u32,
}

impl DisplayConfig {
    /// Time budget of one tick. A zero rate is treated as one frame per second.
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps.max(1)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Peano Explorer".to_string(),
            width: 800,
            height: 600,
            fullscreen: false,
            target_fps: 60,
        }
    }
}
