//! Table configuration
//!
//! Geometry is expressed as fractions of the window the table is drawn in,
//! so the same config scales to any window size. Physics tuning sits
//! alongside it so tests can run the board at different scales.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Table geometry and physics tuning, owned by the board at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    // === Geometry ===
    /// Side of the square window the table is laid out in (pixels)
    pub window_size: f32,
    /// Outer rect left/right edges as window fractions
    pub outer_left: f32,
    pub outer_right: f32,
    /// Outer rect top/bottom edges as window fractions
    pub outer_top: f32,
    pub outer_bottom: f32,
    /// Cushion width between outer and inner rect (window fraction)
    pub cushion_width: f32,
    /// Pocket radius (window fraction)
    pub pocket_radius: f32,
    /// Aim line length at zero pull (window fraction)
    pub min_aim_line: f32,
    /// Aim line growth per unit of pull distance (window fraction)
    pub aim_line_extension: f32,

    // === Balls ===
    pub ball_diameter: f32,
    pub initial_velocity_boost: f32,
    pub velocity_power: f32,
    pub gravity: f32,
    pub friction_coefficient: f32,
    pub seconds_per_frame: f32,

    // === Stick ===
    pub stick_rotate_step: f32,
    pub stick_pull_step: f32,
    pub stick_max_pull: f32,
    pub stick_initial_angle: f32,
    pub stick_initial_height: f32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            outer_left: 0.05,
            outer_right: 0.95,
            outer_top: 0.20,
            outer_bottom: 0.80,
            cushion_width: 0.05,
            pocket_radius: 0.025,
            min_aim_line: 0.1,
            aim_line_extension: 0.02,

            ball_diameter: BALL_DIAMETER,
            initial_velocity_boost: INITIAL_VELOCITY_BOOST,
            velocity_power: VELOCITY_POWER,
            gravity: GRAVITY,
            friction_coefficient: FRICTION_COEFFICIENT,
            seconds_per_frame: SECONDS_PER_FRAME,

            stick_rotate_step: STICK_ROTATE_STEP,
            stick_pull_step: STICK_PULL_STEP,
            stick_max_pull: STICK_MAX_PULL,
            stick_initial_angle: STICK_INITIAL_ANGLE,
            stick_initial_height: STICK_INITIAL_HEIGHT,
        }
    }
}

impl TableConfig {
    /// Default table laid out in a window of the given size
    pub fn with_window_size(window_size: f32) -> Self {
        Self {
            window_size,
            ..Self::default()
        }
    }

    /// Speed lost on each velocity axis per tick
    #[inline]
    pub fn friction_decel(&self) -> f32 {
        self.gravity * self.friction_coefficient * self.seconds_per_frame
    }

    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        log::info!("Loaded table config (window {})", config.window_size);
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("window_size", self.window_size)?;
        positive("ball_diameter", self.ball_diameter)?;
        positive("pocket_radius", self.pocket_radius)?;
        positive("seconds_per_frame", self.seconds_per_frame)?;
        positive("stick_pull_step", self.stick_pull_step)?;
        positive("stick_max_pull", self.stick_max_pull)?;
        non_negative("cushion_width", self.cushion_width)?;
        non_negative("gravity", self.gravity)?;
        non_negative("friction_coefficient", self.friction_coefficient)?;
        non_negative("min_aim_line", self.min_aim_line)?;
        non_negative("aim_line_extension", self.aim_line_extension)?;
        non_negative("initial_velocity_boost", self.initial_velocity_boost)?;
        non_negative("velocity_power", self.velocity_power)?;
        non_negative("stick_initial_height", self.stick_initial_height)?;
        finite("stick_rotate_step", self.stick_rotate_step)?;
        finite("stick_initial_angle", self.stick_initial_angle)?;
        finite("outer_right", self.outer_right)?;
        finite("outer_bottom", self.outer_bottom)?;

        if !(0.0..=1.0).contains(&self.outer_left) || self.outer_left >= self.outer_right {
            return Err(ConfigError::invalid(
                "outer_left",
                "outer rect needs 0 <= left < right",
            ));
        }
        if self.outer_right > 1.0 {
            return Err(ConfigError::invalid("outer_right", "must not exceed 1.0"));
        }
        if !(0.0..=1.0).contains(&self.outer_top) || self.outer_top >= self.outer_bottom {
            return Err(ConfigError::invalid(
                "outer_top",
                "outer rect needs 0 <= top < bottom",
            ));
        }
        if self.outer_bottom > 1.0 {
            return Err(ConfigError::invalid("outer_bottom", "must not exceed 1.0"));
        }

        let inner_w = (self.outer_right - self.outer_left - 2.0 * self.cushion_width)
            * self.window_size;
        let inner_h = (self.outer_bottom - self.outer_top - 2.0 * self.cushion_width)
            * self.window_size;
        if inner_w <= self.ball_diameter || inner_h <= self.ball_diameter {
            return Err(ConfigError::invalid(
                "cushion_width",
                format!(
                    "playable area {inner_w}x{inner_h} cannot fit a ball of diameter {}",
                    self.ball_diameter
                ),
            ));
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be positive, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("must be non-negative, got {value}"),
        ))
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be finite, got {value}")))
    }
}
