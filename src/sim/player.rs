//! Player bookkeeping: assigned ball kind, scored balls and game phase

use serde::{Deserialize, Serialize};

use super::ball::BallKind;

/// Overall state of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Shots are being played
    #[default]
    Playing,
    /// All seven assigned balls then the eight ball went down
    Won,
    /// Eight ball sunk early, or a ball of the other kind went down
    Lost,
}

impl GamePhase {
    pub fn is_over(self) -> bool {
        self != GamePhase::Playing
    }
}

/// The single player at the table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Kind the player must sink; `None` until the first solid or stripe drops
    required_kind: Option<BallKind>,
    /// Pocketed ball ids in the order they went down
    scored: Vec<u8>,
    phase: GamePhase,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required_kind(&self) -> Option<BallKind> {
        self.required_kind
    }

    /// Commit the assigned kind. Only the first solid or stripe counts;
    /// returns whether this call made the assignment.
    pub fn commit_required_kind(&mut self, kind: BallKind) -> bool {
        if self.required_kind.is_some() || !kind.is_scoring() {
            return false;
        }
        self.required_kind = Some(kind);
        true
    }

    /// Append a pocketed ball; the score moves with it
    pub fn record_scored(&mut self, id: u8) {
        self.scored.push(id);
    }

    pub fn score(&self) -> usize {
        self.scored.len()
    }

    /// Pocketed ball ids in display order
    pub fn ball_numbers(&self) -> &[u8] {
        &self.scored
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
