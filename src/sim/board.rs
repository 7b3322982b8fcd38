//! The pool table and everything on it
//!
//! `Board` owns the balls, stick and player. The application shell calls its
//! mutators in response to input, calls [`super::tick`] once per frame, and
//! reads the accessors to draw.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::{Ball, BallKind};
use super::collision::pocket_containing;
use super::player::{GamePhase, Player};
use super::stick::Stick;
use super::table::{Rect, Table};
use crate::consts::*;
use crate::error::ConfigError;
use crate::polar_to_cartesian;
use crate::settings::TableConfig;

/// Ball numbers in rack order, apex first
pub const RACK_ORDER: [u8; 15] = [1, 11, 2, 6, 8, 12, 13, 7, 9, 3, 10, 4, 14, 15, 5];
/// Columns in the rack triangle
pub const RACK_COLUMNS: usize = 5;

/// Complete table state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub(crate) config: TableConfig,
    pub(crate) table: Table,
    /// Balls on the table, cue ball first once racked
    pub(crate) balls: Vec<Ball>,
    pub(crate) stick: Stick,
    pub(crate) player: Player,
    /// True iff every ball is at rest
    pub(crate) stick_visible: bool,
    /// Set between the cue ball dropping and the player placing it
    pub(crate) cue_in_pocket: bool,
    pub(crate) aim_line_length: f32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

impl Board {
    /// Empty table. Call [`Board::create_balls`] to rack.
    pub fn new(config: TableConfig) -> Self {
        let table = Table::new(&config);
        let stick = Stick::new(&config);
        Self {
            aim_line_length: table.min_aim_line,
            config,
            table,
            balls: Vec::new(),
            stick,
            player: Player::new(),
            stick_visible: true,
            cue_in_pocket: false,
        }
    }

    /// Validate the config, then build the board
    pub fn try_new(config: TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    // === Setup ===

    /// Create the cue ball and the fifteen numbered balls, then rack them
    pub fn create_balls(&mut self) {
        let inner = self.table.inner;
        let cue_start = Vec2::new(
            (inner.left + inner.right) / 4.0,
            (inner.top + inner.bottom) / 2.0,
        );
        let balls: Vec<Ball> = std::iter::once(self.new_ball(CUE_BALL_ID, cue_start))
            .chain((1..=NUMBERED_BALLS).map(|id| self.new_ball(id, Vec2::ZERO)))
            .collect();
        self.balls = balls;
        self.rack_balls();
        log::info!("Racked {} balls", self.balls.len());
    }

    fn new_ball(&self, id: u8, pos: Vec2) -> Ball {
        let mut ball = Ball::numbered(id, pos);
        ball.velocity_boost = self.config.initial_velocity_boost;
        ball
    }

    /// Lay the numbered balls out in a triangle whose apex sits at the
    /// table center. Each column holds one more ball than the last and is
    /// shifted up half a diameter so it stays centered on the apex.
    pub fn rack_balls(&mut self) {
        let d = self.config.ball_diameter;
        let mut pos = self.table.inner.center();
        let mut order = RACK_ORDER.iter();

        for balls_in_col in 1..=RACK_COLUMNS {
            for row in 0..balls_in_col {
                if let Some(id) = order.next() {
                    if let Some(ball) = self.balls.iter_mut().find(|b| b.id == *id) {
                        ball.pos = pos;
                    }
                }
                if row + 1 != balls_in_col {
                    pos.y += d;
                }
            }
            pos.y -= (balls_in_col - 1) as f32 * d;
            pos.x += d;
            pos.y -= d / 2.0;
        }
    }

    /// Clear the table for a new game. The caller re-racks with
    /// [`Board::create_balls`].
    pub fn reset(&mut self) {
        self.balls.clear();
        self.stick.reset();
        self.player.reset();
        self.stick_visible = true;
        self.cue_in_pocket = false;
        self.aim_line_length = self.table.min_aim_line;
        log::info!("Board reset");
    }

    /// Reset and rack in one step
    pub fn restart(&mut self) {
        self.reset();
        self.create_balls();
    }

    // === Stick ===

    pub fn rotate_stick_left(&mut self) {
        self.stick.rotate_clockwise();
    }

    pub fn rotate_stick_right(&mut self) {
        self.stick.rotate_counter_clockwise();
    }

    /// One step of the charge control. Boost and aim line are recomputed
    /// together from the new pull distance.
    pub fn pull_stick_back(&mut self) {
        self.stick.pull_back();
        let boost = self.config.initial_velocity_boost
            + self.config.velocity_power * self.stick.charge_ratio();
        if let Some(cue) = self.cue_ball_mut() {
            cue.velocity_boost = boost;
        }
        self.aim_line_length = self.table.aim_line_length(self.stick.pull_distance());
    }

    /// Strike the cue ball along the stick. Ignored while balls are rolling.
    pub fn hit_cue_ball(&mut self) -> bool {
        if !self.stick_visible {
            return false;
        }
        let angle = self.strike_angle();
        let Some(cue) = self.cue_ball_mut() else {
            return false;
        };
        cue.strike(angle);
        log::debug!("Cue struck at {:.3} rad, boost {:.2}", angle, cue.velocity_boost);
        self.stick_visible = false;
        true
    }

    /// Direction the cue ball travels when struck
    #[inline]
    pub fn strike_angle(&self) -> f32 {
        self.stick.angle() + STRIKE_ANGLE_OFFSET
    }

    // === Cue placement ===

    /// Move the cue ball while it is being dragged (no overlap check)
    pub fn set_cue_ball_position(&mut self, pos: Vec2) {
        if let Some(cue) = self.cue_ball_mut() {
            cue.pos = pos;
        }
    }

    /// Commit the cue ball near `pos` (top-left corner), sliding it to the
    /// first free spot
    pub fn reposition_cue_ball(&mut self, pos: Vec2) {
        let r = self.config.ball_diameter / 2.0;
        self.place_cue_ball(pos + Vec2::splat(r));
    }

    /// Put the cue ball at the first free spot scanning from `center`,
    /// stopped, and clear the cue-in-pocket flag
    pub(crate) fn place_cue_ball(&mut self, center: Vec2) {
        let d = self.config.ball_diameter;
        let spot = match self.find_free_spot(center) {
            Some(spot) => spot,
            None => {
                log::warn!("No free spot for cue ball, placing at {center}");
                self.clamp_to_cloth(center)
            }
        };
        if let Some(cue) = self.cue_ball_mut() {
            cue.set_center(spot, d);
            cue.vel = Vec2::ZERO;
            log::debug!("Cue ball placed at {spot}");
        }
        self.cue_in_pocket = false;
    }

    /// Scan the cloth in row-major steps of one diameter, starting at
    /// `center`, for a spot further than one diameter from every other
    /// ball and clear of the pockets. Rows wrap to the left edge and the
    /// last row wraps to the top. The scan gives up after one full sweep of
    /// the cloth.
    pub fn find_free_spot(&self, center: Vec2) -> Option<Vec2> {
        let d = self.config.ball_diameter;
        let cloth = self.cloth_for_centers();
        let cols = (cloth.width() / d).floor() as usize + 1;
        let rows = (cloth.height() / d).floor() as usize + 1;

        let mut candidate = self.clamp_to_cloth(center);
        // Start row plus every full row after it
        for _ in 0..(cols * (rows + 1)) {
            if !self.overlaps_other_ball(candidate) && !self.over_pocket(candidate) {
                return Some(candidate);
            }
            if candidate.x + d <= cloth.right {
                candidate.x += d;
            } else {
                candidate.x = cloth.left;
                candidate.y += d;
                if candidate.y > cloth.bottom {
                    candidate.y = cloth.top;
                }
            }
        }
        None
    }

    /// True if any ball other than the cue ball has its center within one
    /// diameter of `center`
    pub fn overlaps_other_ball(&self, center: Vec2) -> bool {
        let d = self.config.ball_diameter;
        self.balls
            .iter()
            .filter(|b| b.kind != BallKind::Cue)
            .any(|b| b.center(d).distance(center) <= d)
    }

    fn over_pocket(&self, center: Vec2) -> bool {
        pocket_containing(center, &self.table.pockets, self.table.pocket_radius).is_some()
    }

    /// Region a ball center may occupy without crossing a cushion
    fn cloth_for_centers(&self) -> Rect {
        self.table.inner.inset(self.config.ball_diameter / 2.0)
    }

    fn clamp_to_cloth(&self, center: Vec2) -> Vec2 {
        let cloth = self.cloth_for_centers();
        Vec2::new(
            center.x.clamp(cloth.left, cloth.right),
            center.y.clamp(cloth.top, cloth.bottom),
        )
    }

    // === Accessors ===

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    /// Replace the balls on the table (tests, snapshots, custom setups)
    pub fn set_balls(&mut self, balls: Vec<Ball>) {
        self.balls = balls;
    }

    pub fn cue_ball(&self) -> Option<&Ball> {
        self.balls.iter().find(|b| b.kind == BallKind::Cue)
    }

    pub(crate) fn cue_ball_mut(&mut self) -> Option<&mut Ball> {
        self.balls.iter_mut().find(|b| b.kind == BallKind::Cue)
    }

    pub fn stick(&self) -> &Stick {
        &self.stick
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn phase(&self) -> GamePhase {
        self.player.phase()
    }

    pub fn left_boundary(&self) -> f32 {
        self.table.inner.left
    }

    pub fn right_boundary(&self) -> f32 {
        self.table.inner.right
    }

    pub fn top_boundary(&self) -> f32 {
        self.table.inner.top
    }

    pub fn bottom_boundary(&self) -> f32 {
        self.table.inner.bottom
    }

    pub fn pocket_radius(&self) -> f32 {
        self.table.pocket_radius
    }

    pub fn pockets(&self) -> &[Vec2; 6] {
        &self.table.pockets
    }

    pub fn ball_diameter(&self) -> f32 {
        self.config.ball_diameter
    }

    pub fn is_stick_visible(&self) -> bool {
        self.stick_visible
    }

    pub fn is_cue_in_pocket(&self) -> bool {
        self.cue_in_pocket
    }

    pub fn aim_line_length(&self) -> f32 {
        self.aim_line_length
    }

    pub fn cue_center(&self) -> Option<Vec2> {
        self.cue_ball().map(|b| b.center(self.config.ball_diameter))
    }

    /// Far end of the aim line, drawn from the cue ball center along the
    /// strike direction
    pub fn aim_line_end(&self) -> Option<Vec2> {
        let angle = self.strike_angle();
        self.cue_center()
            .map(|c| c - polar_to_cartesian(self.aim_line_length, angle))
    }
}
