//! Tick-driven controller for the curve animation.
//!
//! The host loop owns the clock, the viewport and the render target; the
//! controller owns the view state and turns one intent snapshot per tick into
//! a frame description.

mod controller;

pub use controller::{AnimationController, AnimationError};
