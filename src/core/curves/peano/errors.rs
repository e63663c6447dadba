use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CurveError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] InvalidParameter),
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidParameter {
    #[error("size must be positive and finite, got {size}")]
    Size { size: f64 },
    #[error("center must be finite, got ({x}, {y})")]
    Center { x: f64, y: f64 },
    #[error("depth {depth} exceeds the maximum generation depth of {ceiling}")]
    Depth { depth: u32, ceiling: u32 },
}
