//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per call, no wall-clock time
//! - Stable iteration order (collection order, cue ball first)
//! - No rendering or platform dependencies

pub mod ball;
pub mod board;
pub mod collision;
pub mod input;
pub mod player;
pub mod stick;
pub mod table;
pub mod tick;

pub use ball::{Ball, BallKind};
pub use board::{Board, RACK_COLUMNS, RACK_ORDER};
pub use collision::{WallAxis, ball_ball_collision, ball_wall_collision, pocket_containing};
pub use input::{Command, PointerEvent};
pub use player::{GamePhase, Player};
pub use stick::{PullPhase, Stick};
pub use table::{Rect, Table};
pub use tick::{GameEvent, tick};
