//! Ball entity
//!
//! A ball is stored by the top-left corner of its bounding square, not its
//! center. Every ball shares the table's diameter, so helpers that need the
//! center take it as an argument.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::polar_to_cartesian;

/// Ball category, used for scoring rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BallKind {
    Striped,
    Solid,
    Cue,
    Eight,
}

impl BallKind {
    /// True for the two kinds a player can be assigned (solids or stripes)
    pub fn is_scoring(self) -> bool {
        matches!(self, BallKind::Solid | BallKind::Striped)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BallKind::Striped => "striped",
            BallKind::Solid => "solid",
            BallKind::Cue => "cue",
            BallKind::Eight => "eight",
        }
    }
}

/// A pool ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// 0 = cue, 1-7 solids, 8 = eight ball, 9-15 stripes
    pub id: u8,
    pub kind: BallKind,
    /// Top-left corner of the ball's bounding square
    pub pos: Vec2,
    pub vel: Vec2,
    /// Impulse magnitude applied by the next cue strike
    pub velocity_boost: f32,
}

impl Ball {
    pub fn new(id: u8, kind: BallKind, pos: Vec2, vel: Vec2) -> Self {
        Self {
            id,
            kind,
            pos,
            vel,
            velocity_boost: INITIAL_VELOCITY_BOOST,
        }
    }

    /// Ball at rest whose kind follows from its number
    pub fn numbered(id: u8, pos: Vec2) -> Self {
        Self::new(id, Self::kind_for_id(id), pos, Vec2::ZERO)
    }

    /// Standard eight-ball numbering
    pub fn kind_for_id(id: u8) -> BallKind {
        match id {
            CUE_BALL_ID => BallKind::Cue,
            EIGHT_BALL_ID => BallKind::Eight,
            1..=7 => BallKind::Solid,
            _ => BallKind::Striped,
        }
    }

    #[inline]
    pub fn center(&self, diameter: f32) -> Vec2 {
        self.pos + Vec2::splat(diameter / 2.0)
    }

    /// Place the ball so its center lands on `center`
    #[inline]
    pub fn set_center(&mut self, center: Vec2, diameter: f32) {
        self.pos = center - Vec2::splat(diameter / 2.0);
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.vel != Vec2::ZERO
    }

    /// One Euler step: position += velocity
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Shed `decel` of speed from each axis, snapping to exactly zero
    /// once an axis is slower than one step.
    pub fn apply_friction(&mut self, decel: f32) {
        self.vel.x = decay_axis(self.vel.x, decel);
        self.vel.y = decay_axis(self.vel.y, decel);
    }

    /// Add the cue impulse for a strike at `angle` (radians)
    pub fn strike(&mut self, angle: f32) {
        self.vel -= polar_to_cartesian(self.velocity_boost, angle);
    }
}

#[inline]
fn decay_axis(v: f32, decel: f32) -> f32 {
    if v.abs() <= decel {
        0.0
    } else {
        v - decel * v.signum()
    }
}
