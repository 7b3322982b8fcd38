//! Single-frame simulation step
//!
//! Core game loop that advances the table by one tick and applies the
//! pocketing rules.

use serde::{Deserialize, Serialize};

use super::ball::{Ball, BallKind};
use super::board::Board;
use super::collision::{ball_ball_collision, ball_wall_collision, pocket_containing};
use super::player::{GamePhase, Player};
use crate::consts::BALLS_PER_TYPE;

/// Things that happened during a tick, for HUD and audio hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A numbered ball dropped and left the table
    Pocketed { id: u8, kind: BallKind },
    /// The cue ball dropped and was re-spotted
    CueScratched,
    /// The player's kind was decided by this pocket
    KindAssigned(BallKind),
    Won,
    Lost,
}

/// Advance the board by one frame. Does nothing once the game is over.
///
/// Balls are processed in collection order. A ball over a pocket is ruled
/// on; any other ball bounces off the cushions, slows down, collides with
/// every later ball and moves. Pocketed balls are swept out after the pass
/// so indices stay stable while it runs.
pub fn tick(board: &mut Board) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if board.player.phase().is_over() {
        return events;
    }

    let d = board.config.ball_diameter;
    let decel = board.config.friction_decel();
    let bounds = board.table.inner;
    let mut pocketed = vec![false; board.balls.len()];

    for i in 0..board.balls.len() {
        let center = board.balls[i].center(d);
        if pocket_containing(center, &board.table.pockets, board.table.pocket_radius).is_some() {
            let ball = &board.balls[i];
            let (id, kind) = (ball.id, ball.kind);
            if kind == BallKind::Cue {
                let spot = board.table.inner.center();
                board.place_cue_ball(spot);
                board.cue_in_pocket = true;
                log::info!("Scratch: cue ball re-spotted");
                events.push(GameEvent::CueScratched);
            } else {
                pocketed[i] = true;
                rule_on_pocket(&mut board.player, id, kind, &mut events);
            }
            continue;
        }

        let ball = &mut board.balls[i];
        ball_wall_collision(ball, &bounds, d);
        ball.apply_friction(decel);
        // Each unordered pair is resolved once per tick
        for j in (i + 1)..board.balls.len() {
            let (a, b) = pair_mut(&mut board.balls, i, j);
            ball_ball_collision(a, b, d);
        }
        board.balls[i].integrate();
    }

    // A ball still rolling as it drops keeps the stick hidden this frame
    board.stick_visible = board.balls.iter().all(|b| !b.is_moving());
    let mut flags = pocketed.iter();
    board
        .balls
        .retain(|_| !flags.next().copied().unwrap_or(false));

    events
}

/// Apply the eight-ball rules to a numbered ball that just dropped. The
/// first decisive outcome in a frame stands; later pockets that frame still
/// leave the table but are not ruled on.
fn rule_on_pocket(player: &mut Player, id: u8, kind: BallKind, events: &mut Vec<GameEvent>) {
    if player.phase().is_over() {
        return;
    }

    if kind == BallKind::Eight {
        if player.score() == BALLS_PER_TYPE {
            player.record_scored(id);
            player.set_phase(GamePhase::Won);
            log::info!("Eight ball down after clearing the group: won");
            events.push(GameEvent::Pocketed { id, kind });
            events.push(GameEvent::Won);
        } else {
            player.set_phase(GamePhase::Lost);
            log::info!("Eight ball down early with {} scored: lost", player.score());
            events.push(GameEvent::Lost);
        }
        return;
    }

    if player.commit_required_kind(kind) {
        log::info!("Player assigned {}", kind.as_str());
        events.push(GameEvent::KindAssigned(kind));
    }

    if player.required_kind() == Some(kind) {
        player.record_scored(id);
        log::debug!("Ball {} pocketed, score {}", id, player.score());
        events.push(GameEvent::Pocketed { id, kind });
    } else {
        player.set_phase(GamePhase::Lost);
        log::info!("Ball {} is {}, not the assigned kind: lost", id, kind.as_str());
        events.push(GameEvent::Lost);
    }
}

/// Borrow two distinct balls mutably, `i < j`
fn pair_mut(balls: &mut [Ball], i: usize, j: usize) -> (&mut Ball, &mut Ball) {
    let (head, tail) = balls.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
