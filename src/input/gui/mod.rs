//! Windowed front end: winit for the window and keyboard, pixels for the
//! framebuffer and egui for the status overlay.

mod app;
pub mod commands;
pub mod display_config;
pub mod key_input;
