//! Cue stick: aim angle and a ping-pong pull-back charge
//!
//! Holding the charge control repeatedly pulls the stick back until it
//! reaches the maximum, then pushes it forward again until it touches the
//! ball, and so on.

use serde::{Deserialize, Serialize};

use crate::settings::TableConfig;

/// Direction the pull-back is currently travelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PullPhase {
    /// Moving away from the ball, pull distance grows
    #[default]
    Charging,
    /// Moving back toward the ball, pull distance shrinks
    Releasing,
}

/// The player's cue stick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stick {
    /// Radians. Unbounded; only ever fed to trig functions.
    angle: f32,
    /// Distance pulled back from the ball, in [0, max_pull]
    pull: f32,
    /// Drawn length of the stick, grows with pull
    height: f32,
    phase: PullPhase,

    rotate_step: f32,
    pull_step: f32,
    max_pull: f32,
    initial_angle: f32,
    initial_height: f32,
}

impl Default for Stick {
    fn default() -> Self {
        Self::new(&TableConfig::default())
    }
}

impl Stick {
    pub fn new(config: &TableConfig) -> Self {
        Self {
            angle: config.stick_initial_angle,
            pull: 0.0,
            height: config.stick_initial_height,
            phase: PullPhase::Charging,
            rotate_step: config.stick_rotate_step,
            pull_step: config.stick_pull_step,
            max_pull: config.stick_max_pull,
            initial_angle: config.stick_initial_angle,
            initial_height: config.stick_initial_height,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn pull_distance(&self) -> f32 {
        self.pull
    }

    pub fn max_pull_distance(&self) -> f32 {
        self.max_pull
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn phase(&self) -> PullPhase {
        self.phase
    }

    /// Pull as a fraction of the maximum, in [0, 1]
    pub fn charge_ratio(&self) -> f32 {
        self.pull / self.max_pull
    }

    pub fn rotate_clockwise(&mut self) {
        self.angle += self.rotate_step;
    }

    pub fn rotate_counter_clockwise(&mut self) {
        self.angle -= self.rotate_step;
    }

    /// Advance the charge by one step.
    ///
    /// A press made while resting at an end only turns the stick around, so
    /// the charge holds at full (and at empty) for one extra press.
    pub fn pull_back(&mut self) {
        match self.phase {
            PullPhase::Charging if self.pull >= self.max_pull => {
                self.phase = PullPhase::Releasing;
            }
            PullPhase::Charging => {
                self.set_pull((self.pull + self.pull_step).min(self.max_pull));
            }
            PullPhase::Releasing if self.pull <= 0.0 => {
                self.phase = PullPhase::Charging;
            }
            PullPhase::Releasing => {
                self.set_pull((self.pull - self.pull_step).max(0.0));
            }
        }
    }

    /// Jump straight to a pull distance, clamped to [0, max]. The drawn
    /// height and the travel direction are left alone.
    pub fn set_pull_distance(&mut self, distance: f32) {
        self.pull = distance.clamp(0.0, self.max_pull);
    }

    pub fn reset(&mut self) {
        self.angle = self.initial_angle;
        self.pull = 0.0;
        self.height = self.initial_height;
        self.phase = PullPhase::Charging;
    }

    fn set_pull(&mut self, pull: f32) {
        self.height += pull - self.pull;
        self.pull = pull;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_defaults() {
        let stick = Stick::default();
        assert_eq!(stick.angle(), STICK_INITIAL_ANGLE);
        assert_eq!(stick.height(), STICK_INITIAL_HEIGHT);
        assert_eq!(stick.pull_distance(), 0.0);
        assert_eq!(stick.phase(), PullPhase::Charging);
    }

    #[test]
    fn test_rotation() {
        let mut stick = Stick::default();
        stick.rotate_clockwise();
        stick.rotate_clockwise();
        stick.rotate_counter_clockwise();
        assert!((stick.angle() - (STICK_INITIAL_ANGLE + STICK_ROTATE_STEP)).abs() < 1e-6);
    }

    #[test]
    fn test_pull_back_ping_pong() {
        let mut stick = Stick::default();
        let mut pulls = Vec::new();
        for _ in 0..12 {
            stick.pull_back();
            pulls.push(stick.pull_distance());
        }
        assert_eq!(
            pulls,
            vec![5.0, 10.0, 15.0, 20.0, 20.0, 15.0, 10.0, 5.0, 0.0, 0.0, 5.0, 10.0]
        );
    }

    #[test]
    fn test_phase_flips_on_press_at_an_end() {
        let mut stick = Stick::default();
        for _ in 0..4 {
            stick.pull_back();
            assert_eq!(stick.phase(), PullPhase::Charging);
        }
        assert_eq!(stick.pull_distance(), STICK_MAX_PULL);

        stick.pull_back();
        assert_eq!(stick.pull_distance(), STICK_MAX_PULL);
        assert_eq!(stick.phase(), PullPhase::Releasing);

        for _ in 0..4 {
            stick.pull_back();
            assert_eq!(stick.phase(), PullPhase::Releasing);
        }
        assert_eq!(stick.pull_distance(), 0.0);

        stick.pull_back();
        assert_eq!(stick.pull_distance(), 0.0);
        assert_eq!(stick.phase(), PullPhase::Charging);
    }

    #[test]
    fn test_height_tracks_pull() {
        let mut stick = Stick::default();
        for _ in 0..10 {
            stick.pull_back();
            assert_eq!(stick.height(), STICK_INITIAL_HEIGHT + stick.pull_distance());
        }
    }

    #[test]
    fn test_uneven_step_clamps_to_max() {
        let config = TableConfig {
            stick_pull_step: 8.0,
            ..TableConfig::default()
        };
        let mut stick = Stick::new(&config);
        for _ in 0..3 {
            stick.pull_back();
        }
        assert_eq!(stick.pull_distance(), 20.0);
        stick.pull_back();
        assert_eq!(stick.pull_distance(), 20.0);
        assert_eq!(stick.phase(), PullPhase::Releasing);
        stick.pull_back();
        assert_eq!(stick.pull_distance(), 12.0);
    }

    #[test]
    fn test_set_pull_distance_clamps() {
        let mut stick = Stick::default();
        stick.set_pull_distance(-30.0);
        assert_eq!(stick.pull_distance(), 0.0);

        stick.set_pull_distance(500.0);
        assert_eq!(stick.pull_distance(), STICK_MAX_PULL);
        assert_eq!(stick.height(), STICK_INITIAL_HEIGHT);
        assert_eq!(stick.phase(), PullPhase::Charging);
    }

    #[test]
    fn test_pushed_forward_after_set_to_max() {
        let mut stick = Stick::default();
        stick.set_pull_distance(stick.max_pull_distance());
        stick.pull_back();
        stick.pull_back();
        assert_eq!(stick.pull_distance(), 15.0);
        assert_eq!(stick.height(), STICK_INITIAL_HEIGHT - 5.0);
    }

    #[test]
    fn test_reset() {
        let mut stick = Stick::default();
        stick.rotate_clockwise();
        stick.pull_back();
        stick.pull_back();
        stick.reset();
        assert_eq!(stick, Stick::default());
    }
}
