pub mod actions;
pub mod animation;
pub mod curves;
pub mod data;
