pub mod algorithm;
pub mod errors;
pub mod traversal;

pub use algorithm::{Curve, MAX_GENERATION_DEPTH, curve_len, generate};
pub use errors::{CurveError, InvalidParameter};
