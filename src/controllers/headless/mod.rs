mod controller;

pub use controller::{HeadlessController, HeadlessError, RenderSummary, TickPlan};
