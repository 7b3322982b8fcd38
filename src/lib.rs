//! Eight Ball - single-table billiards simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, stick, player, board)
//! - `settings`: Data-driven table geometry and physics tuning
//! - `error`: Configuration errors
//!
//! Rendering, input plumbing and windowing live outside this crate; they
//! drive a [`sim::Board`] through its mutators and read it back through its
//! accessors.

pub mod error;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::TableConfig;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Diameter shared by every ball (pixels)
    pub const BALL_DIAMETER: f32 = 25.0;
    /// Velocity boost a ball starts with before the stick is charged
    pub const INITIAL_VELOCITY_BOOST: f32 = 3.0;
    /// Extra boost at full pull-back
    pub const VELOCITY_POWER: f32 = 6.0;

    /// Friction model: decel per tick = gravity * friction * seconds per frame
    pub const GRAVITY: f32 = 9.81;
    pub const FRICTION_COEFFICIENT: f32 = 0.15;
    pub const SECONDS_PER_FRAME: f32 = 0.01428;

    /// Balls of each scoring type (solids or stripes)
    pub const BALLS_PER_TYPE: usize = 7;
    /// Numbered balls on the table, excluding the cue ball
    pub const NUMBERED_BALLS: u8 = 15;
    pub const CUE_BALL_ID: u8 = 0;
    pub const EIGHT_BALL_ID: u8 = 8;

    /// Stick defaults
    pub const STICK_ROTATE_STEP: f32 = 0.05;
    pub const STICK_PULL_STEP: f32 = 5.0;
    pub const STICK_MAX_PULL: f32 = 20.0;
    pub const STICK_INITIAL_HEIGHT: f32 = 400.0;
    pub const STICK_INITIAL_ANGLE: f32 = std::f32::consts::FRAC_PI_2;

    /// Strike direction is the stick angle rotated a quarter turn
    pub const STRIKE_ANGLE_OFFSET: f32 = std::f32::consts::FRAC_PI_2;

    /// Classic window the table is laid out in
    pub const DEFAULT_WINDOW_SIZE: f32 = 1000.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
