//! Input adapters that turn user input into animation intents.

#[cfg(feature = "gui")]
pub mod gui;
