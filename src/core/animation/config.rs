use crate::core::curves::peano::MAX_GENERATION_DEPTH;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("max depth {max_depth} exceeds the generation ceiling of {ceiling}")]
    DepthAboveCeiling { max_depth: u32, ceiling: u32 },
    #[error("scale range [{min}, {max}] must be finite, positive and ordered")]
    InvalidScaleRange { min: f64, max: f64 },
    #[error("initial scale {initial} lies outside [{min}, {max}]")]
    InitialScaleOutOfRange { initial: f64, min: f64, max: f64 },
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidRate { name: &'static str, value: f64 },
    #[error("base fraction must be finite and positive, got {value}")]
    InvalidBaseFraction { value: f64 },
}

/// Tunables of the animation. Every rate is applied once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    pub max_depth: u32,
    pub animation_speed: f64,
    pub initial_scale: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    pub zoom_speed: f64,
    pub zoom_delay_ms: u64,
    pub move_speed: f64,
    pub move_delay_ms: u64,
    pub hue_speed: f64,
    /// Fraction of the hue circle spread along the curve, first to last segment.
    pub hue_span: f64,
    /// Fraction of the smaller viewport side covered by the curve at scale 1.
    pub base_fraction: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            animation_speed: 0.02,
            initial_scale: 0.8,
            min_scale: 0.0001,
            max_scale: 5.0,
            zoom_speed: 0.1,
            zoom_delay_ms: 200,
            move_speed: 20.0,
            move_delay_ms: 200,
            hue_speed: 0.001,
            hue_span: 0.3,
            base_fraction: 0.8,
        }
    }
}

impl AnimationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth > MAX_GENERATION_DEPTH {
            return Err(ConfigError::DepthAboveCeiling {
                max_depth: self.max_depth,
                ceiling: MAX_GENERATION_DEPTH,
            });
        }

        let scale_range_valid = self.min_scale.is_finite()
            && self.max_scale.is_finite()
            && self.min_scale > 0.0
            && self.min_scale <= self.max_scale;
        if !scale_range_valid {
            return Err(ConfigError::InvalidScaleRange {
                min: self.min_scale,
                max: self.max_scale,
            });
        }

        if !(self.min_scale..=self.max_scale).contains(&self.initial_scale) {
            return Err(ConfigError::InitialScaleOutOfRange {
                initial: self.initial_scale,
                min: self.min_scale,
                max: self.max_scale,
            });
        }

        let rates = [
            ("animation speed", self.animation_speed),
            ("zoom speed", self.zoom_speed),
            ("move speed", self.move_speed),
            ("hue speed", self.hue_speed),
            ("hue span", self.hue_span),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidRate { name, value });
            }
        }

        if !self.base_fraction.is_finite() || self.base_fraction <= 0.0 {
            return Err(ConfigError::InvalidBaseFraction {
                value: self.base_fraction,
            });
        }

        Ok(())
    }
}
