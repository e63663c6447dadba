/// Milliseconds on a monotonic clock owned by the host.
pub type Timestamp = u64;

/// What the user is asking for during one tick.
///
/// Pan components are read through `signum`, so any positive value pans by one
/// step in the positive direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Intent {
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub pan_x: i8,
    pub pan_y: i8,
}

impl Intent {
    #[must_use]
    pub fn wants_zoom(&self) -> bool {
        self.zoom_in || self.zoom_out
    }

    #[must_use]
    pub fn wants_pan(&self) -> bool {
        self.pan_x != 0 || self.pan_y != 0
    }

    /// Zoom direction for this tick: `1` in, `-1` out, `0` none. Zooming in
    /// wins when both are requested.
    #[must_use]
    pub fn zoom_direction(&self) -> i8 {
        if self.zoom_in {
            1
        } else if self.zoom_out {
            -1
        } else {
            0
        }
    }

    #[must_use]
    pub fn pan_direction(&self) -> (i8, i8) {
        (self.pan_x.signum(), self.pan_y.signum())
    }
}
