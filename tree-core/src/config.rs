use crate::types::Color;
use thiserror::Error;

/// Iteration cap for [`Config::recursion_depth`]. A non-decaying
/// reduction factor would otherwise loop forever.
const DEPTH_CAP: u32 = 10_000;

#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Length of the trunk, in world units.
    pub initial_length: f32,
    /// Angle between a branch and each of its two children, in degrees.
    pub branch_angle: f32,
    /// Multiplicative decay applied to length and thickness per level.
    /// Must lie in (0, 1) for the recursion to terminate.
    pub reduction_factor: f32,
    /// Recursion floor: branches at or below this length are not drawn.
    pub min_length: f32,
    /// Turtle drawing speed, 1 (slow) to 10 (fast); 0 means instant.
    pub cursor_speed: u8,
    /// Pen width of the trunk, in world units.
    pub thickness: f32,
    pub branch_color: Color,
    pub leaf_color: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_length: 300.0,
            branch_angle: 20.0,
            reduction_factor: 0.9,
            min_length: 5.0,
            cursor_speed: 1,
            thickness: 10.0,
            branch_color: Color::BROWN,
            leaf_color: Color::GREEN,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("initial_length must be positive, got {0}")]
    InitialLength(f32),
    #[error("reduction_factor must be in (0, 1), got {0}")]
    ReductionFactor(f32),
    #[error("min_length must be positive, got {0}")]
    MinLength(f32),
    #[error("thickness must be positive, got {0}")]
    Thickness(f32),
}

impl Config {
    /// Checks that the parameters describe a terminating render.
    ///
    /// The renderer itself never validates; callers that want an error
    /// instead of unbounded recursion invoke this before rendering.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.initial_length > 0.0) {
            return Err(ConfigError::InitialLength(self.initial_length));
        }
        if !(self.reduction_factor > 0.0 && self.reduction_factor < 1.0) {
            return Err(ConfigError::ReductionFactor(self.reduction_factor));
        }
        if !(self.min_length > 0.0) {
            return Err(ConfigError::MinLength(self.min_length));
        }
        if !(self.thickness > 0.0) {
            return Err(ConfigError::Thickness(self.thickness));
        }
        Ok(())
    }

    /// Depth of the branch recursion for these parameters.
    ///
    /// Counts how many times `initial_length` can be multiplied by
    /// `reduction_factor` before dropping to `min_length` or below,
    /// i.e. `ceil(log(min_length / initial_length) / log(reduction_factor))`,
    /// or `0` when `initial_length <= min_length`.
    ///
    /// ### Returns
    /// `Some(depth)` for terminating parameters, `None` when the
    /// internal iteration cap is hit (e.g. `reduction_factor >= 1`).
    pub fn recursion_depth(&self) -> Option<u32> {
        let mut len = self.initial_length;
        let mut depth = 0u32;
        while len > self.min_length {
            if depth >= DEPTH_CAP {
                return None;
            }
            depth += 1;
            len *= self.reduction_factor;
        }
        Some(depth)
    }
}
