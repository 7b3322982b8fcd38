//! Table geometry derived from a [`TableConfig`]

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::TableConfig;

/// Axis-aligned rectangle in window space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Shrink by `margin` on every side
    pub fn inset(&self, margin: f32) -> Rect {
        Rect {
            left: self.left + margin,
            top: self.top + margin,
            right: self.right - margin,
            bottom: self.bottom - margin,
        }
    }
}

/// Fixed geometry of the pool table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Cushion outline
    pub outer: Rect,
    /// Playable cloth
    pub inner: Rect,
    /// Pocket centers, in the order pockets are tested
    pub pockets: [Vec2; 6],
    pub pocket_radius: f32,
    /// Aim line length at zero pull
    pub min_aim_line: f32,
    /// Aim line growth per unit of pull distance
    pub aim_line_extension: f32,
}

impl Table {
    pub fn new(config: &TableConfig) -> Self {
        let w = config.window_size;
        let outer = Rect {
            left: w * config.outer_left,
            top: w * config.outer_top,
            right: w * config.outer_right,
            bottom: w * config.outer_bottom,
        };
        let inner = outer.inset(w * config.cushion_width);
        let mid_x = (inner.left + inner.right) / 2.0;

        let pockets = [
            Vec2::new(inner.left, inner.bottom),
            Vec2::new(inner.left, inner.top),
            Vec2::new(inner.right, inner.top),
            Vec2::new(inner.right, inner.bottom),
            Vec2::new(mid_x, inner.top),
            Vec2::new(mid_x, inner.bottom),
        ];

        Self {
            outer,
            inner,
            pockets,
            pocket_radius: w * config.pocket_radius,
            min_aim_line: w * config.min_aim_line,
            aim_line_extension: w * config.aim_line_extension,
        }
    }

    /// Aim line length for a given stick pull distance
    #[inline]
    pub fn aim_line_length(&self, pull: f32) -> f32 {
        pull * self.aim_line_extension + self.min_aim_line
    }
}
