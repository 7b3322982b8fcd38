//! Input commands from the application shell
//!
//! The shell translates key presses and mouse events into these and hands
//! them to the board, which applies the same gating the game always had:
//! stick controls only while playing, restart only once the game is over,
//! and cue dragging only while the cue ball is waiting to be placed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::board::Board;

/// Discrete control presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    RotateLeft,
    RotateRight,
    /// Strike the cue ball
    Strike,
    /// One step of the pull-back charge
    Charge,
    /// Start a new game after a win or loss
    Restart,
}

impl Command {
    /// Default key binding: arrows aim, shoot and charge; space restarts
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "left" | "arrowleft" => Some(Command::RotateLeft),
            "right" | "arrowright" => Some(Command::RotateRight),
            "up" | "arrowup" => Some(Command::Strike),
            "down" | "arrowdown" => Some(Command::Charge),
            "space" | " " => Some(Command::Restart),
            _ => None,
        }
    }
}

/// Pointer events in window pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Cue ball follows the pointer
    Drag(Vec2),
    /// Cue ball is committed near the pointer
    Release(Vec2),
}

impl Board {
    /// Apply a control press. Returns whether it changed anything.
    pub fn handle_command(&mut self, command: Command) -> bool {
        if self.phase().is_over() {
            if command == Command::Restart {
                self.restart();
                return true;
            }
            return false;
        }

        match command {
            Command::RotateLeft => self.rotate_stick_left(),
            Command::RotateRight => self.rotate_stick_right(),
            Command::Charge => self.pull_stick_back(),
            Command::Strike => return self.hit_cue_ball(),
            Command::Restart => return false,
        }
        true
    }

    /// Apply a pointer event. Ignored unless the cue ball is in hand.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        if self.phase().is_over() || !self.is_cue_in_pocket() {
            return false;
        }
        match event {
            PointerEvent::Drag(pos) => self.set_cue_ball_position(pos),
            PointerEvent::Release(pos) => self.reposition_cue_ball(pos),
        }
        true
    }
}
