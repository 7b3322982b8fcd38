//! Collision detection and response
//!
//! Balls bounce off the cushions by flipping one velocity axis, and off each
//! other with the equal-mass elastic impulse along the line of centers.

use glam::Vec2;

use super::ball::Ball;
use super::table::Rect;

/// Which velocity axis a cushion hit flipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallAxis {
    /// Left or right cushion, x velocity negated
    Vertical,
    /// Top or bottom cushion, y velocity negated
    Horizontal,
}

/// Bounce a ball off the playable area's cushions.
///
/// A ball at or beyond the left/right edge gets its x velocity negated;
/// otherwise a ball at or beyond top/bottom gets its y velocity negated.
/// Only one axis is resolved per call, x first.
pub fn ball_wall_collision(ball: &mut Ball, bounds: &Rect, diameter: f32) -> Option<WallAxis> {
    if ball.pos.x <= bounds.left || ball.pos.x + diameter >= bounds.right {
        ball.vel.x = -ball.vel.x;
        Some(WallAxis::Vertical)
    } else if ball.pos.y <= bounds.top || ball.pos.y + diameter >= bounds.bottom {
        ball.vel.y = -ball.vel.y;
        Some(WallAxis::Horizontal)
    } else {
        None
    }
}

/// Resolve a collision between two equal-mass balls.
///
/// Returns false (and leaves both untouched) when the balls are separating
/// or not touching.
pub fn ball_ball_collision(a: &mut Ball, b: &mut Ball, diameter: f32) -> bool {
    let dp = a.center(diameter) - b.center(diameter);
    let dv = a.vel - b.vel;
    let dot = dv.dot(dp);

    // Not approaching (also covers coincident centers and a ball against itself)
    if dot >= 0.0 {
        return false;
    }
    if dp.length() > diameter {
        return false;
    }

    // The impulse is symmetric: (-dv)·(-dp) == dv·dp
    let impulse = dp * (dot / dp.length_squared());
    a.vel -= impulse;
    b.vel += impulse;
    true
}

/// Index of the first pocket whose center lies strictly within `radius`
/// of `center`
pub fn pocket_containing(center: Vec2, pockets: &[Vec2], radius: f32) -> Option<usize> {
    pockets
        .iter()
        .position(|pocket| pocket.distance(center) < radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BALL_DIAMETER;
    use crate::sim::ball::BallKind;
    use proptest::prelude::*;

    // Inner rect of the classic 1000px table
    fn bounds() -> Rect {
        Rect {
            left: 100.0,
            top: 250.0,
            right: 900.0,
            bottom: 750.0,
        }
    }

    fn cue(pos: Vec2, vel: Vec2) -> Ball {
        Ball::new(0, BallKind::Cue, pos, vel)
    }

    #[test]
    fn test_right_wall() {
        let b = bounds();
        let mut ball = cue(Vec2::new(b.right, b.bottom - 50.0), Vec2::new(3.3, 2.2));
        assert_eq!(ball_wall_collision(&mut ball, &b, BALL_DIAMETER), Some(WallAxis::Vertical));
        assert_eq!(ball.vel, Vec2::new(-3.3, 2.2));

        let mut past = cue(Vec2::new(b.right + 10.0, b.bottom - 50.0), Vec2::new(3.3, 2.2));
        assert!(ball_wall_collision(&mut past, &b, BALL_DIAMETER).is_some());
    }

    #[test]
    fn test_left_wall() {
        let b = bounds();
        let mut ball = cue(Vec2::new(b.left, b.bottom - 50.0), Vec2::new(-3.3, 2.2));
        assert!(ball_wall_collision(&mut ball, &b, BALL_DIAMETER).is_some());
        assert_eq!(ball.vel, Vec2::new(3.3, 2.2));

        let mut past = cue(Vec2::new(b.left - 10.0, b.bottom - 50.0), Vec2::new(3.3, 2.2));
        assert!(ball_wall_collision(&mut past, &b, BALL_DIAMETER).is_some());
    }

    #[test]
    fn test_top_wall() {
        let b = bounds();
        let mut ball = cue(Vec2::new(b.left + 60.0, b.top), Vec2::new(-3.3, 2.2));
        assert_eq!(ball_wall_collision(&mut ball, &b, BALL_DIAMETER), Some(WallAxis::Horizontal));
        assert_eq!(ball.vel, Vec2::new(-3.3, -2.2));

        let mut past = cue(Vec2::new(b.left + 40.0, b.top - 50.0), Vec2::new(3.3, 2.2));
        assert!(ball_wall_collision(&mut past, &b, BALL_DIAMETER).is_some());
    }

    #[test]
    fn test_bottom_wall() {
        let b = bounds();
        let mut ball = cue(Vec2::new(b.left + 60.0, b.bottom), Vec2::new(-3.3, -2.2));
        assert!(ball_wall_collision(&mut ball, &b, BALL_DIAMETER).is_some());
        assert_eq!(ball.vel, Vec2::new(-3.3, 2.2));

        let mut past = cue(Vec2::new(b.left + 40.0, b.bottom + 50.0), Vec2::new(3.3, 2.2));
        assert!(ball_wall_collision(&mut past, &b, BALL_DIAMETER).is_some());
    }

    #[test]
    fn test_corner_resolves_x_only() {
        let b = bounds();
        let mut ball = cue(Vec2::new(b.left, b.top), Vec2::new(-1.0, -1.0));
        assert_eq!(ball_wall_collision(&mut ball, &b, BALL_DIAMETER), Some(WallAxis::Vertical));
        assert_eq!(ball.vel, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_no_wall_in_open_table() {
        let mut ball = cue(Vec2::new(400.0, 400.0), Vec2::new(1.0, 1.0));
        assert_eq!(ball_wall_collision(&mut ball, &bounds(), BALL_DIAMETER), None);
        assert_eq!(ball.vel, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_two_ball_collision() {
        let b = bounds();
        let r = BALL_DIAMETER / 2.0;
        let mut cue_ball = cue(
            Vec2::new(b.left + 50.0 - r, b.bottom - 50.0 - r),
            Vec2::new(3.3, 2.2),
        );
        let mut ball = Ball::new(
            1,
            BallKind::Solid,
            Vec2::new(b.left + 60.0 - r, b.bottom - 50.0 - r),
            Vec2::new(-1.3, 2.0),
        );

        assert!(ball_ball_collision(&mut cue_ball, &mut ball, BALL_DIAMETER));
        assert!((cue_ball.vel.x - (-1.3)).abs() < 1e-4);
        assert!((cue_ball.vel.y - 2.2).abs() < 1e-4);
        assert!((ball.vel.x - 3.3).abs() < 1e-4);
        assert!((ball.vel.y - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_separating_balls_do_not_collide() {
        let mut a = cue(Vec2::new(100.0, 100.0), Vec2::new(-1.0, 0.0));
        let mut b = Ball::new(1, BallKind::Solid, Vec2::new(110.0, 100.0), Vec2::new(1.0, 0.0));
        assert!(!ball_ball_collision(&mut a, &mut b, BALL_DIAMETER));
        assert_eq!(a.vel, Vec2::new(-1.0, 0.0));
        assert_eq!(b.vel, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_distant_approaching_balls_do_not_collide() {
        let mut a = cue(Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0));
        let mut b = Ball::new(1, BallKind::Solid, Vec2::new(300.0, 100.0), Vec2::new(-1.0, 0.0));
        assert!(!ball_ball_collision(&mut a, &mut b, BALL_DIAMETER));
    }

    #[test]
    fn test_second_resolution_is_a_no_op() {
        let mut a = cue(Vec2::new(100.0, 100.0), Vec2::new(2.0, 0.0));
        let mut b = Ball::new(1, BallKind::Solid, Vec2::new(120.0, 100.0), Vec2::ZERO);
        assert!(ball_ball_collision(&mut a, &mut b, BALL_DIAMETER));
        assert!(!ball_ball_collision(&mut a, &mut b, BALL_DIAMETER));
        assert!(a.vel.x.abs() < 1e-5);
        assert!((b.vel.x - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_pocket_containing_first_match() {
        let pockets = [Vec2::new(0.0, 0.0), Vec2::new(5.0, 0.0)];
        assert_eq!(pocket_containing(Vec2::new(2.5, 0.0), &pockets, 10.0), Some(0));
        assert_eq!(pocket_containing(Vec2::new(5.0, 9.0), &pockets, 10.0), Some(1));
        assert_eq!(pocket_containing(Vec2::new(50.0, 50.0), &pockets, 10.0), None);
        // Boundary is exclusive
        assert_eq!(pocket_containing(Vec2::new(-10.0, 0.0), &pockets, 10.0), None);
    }

    proptest! {
        #[test]
        fn x_boundary_flips_only_x(
            y in 300.0f32..650.0,
            vx in -10.0f32..10.0,
            vy in -10.0f32..10.0,
            overshoot in 0.0f32..40.0,
            right in any::<bool>(),
        ) {
            let b = bounds();
            let x = if right { b.right - BALL_DIAMETER + overshoot } else { b.left - overshoot };
            let mut ball = cue(Vec2::new(x, y), Vec2::new(vx, vy));
            let hit = ball_wall_collision(&mut ball, &b, BALL_DIAMETER);
            prop_assert_eq!(hit, Some(WallAxis::Vertical));
            prop_assert_eq!(ball.vel, Vec2::new(-vx, vy));
        }

        #[test]
        fn y_boundary_flips_only_y(
            x in 150.0f32..800.0,
            vx in -10.0f32..10.0,
            vy in -10.0f32..10.0,
            overshoot in 0.0f32..40.0,
            bottom in any::<bool>(),
        ) {
            let b = bounds();
            let y = if bottom { b.bottom - BALL_DIAMETER + overshoot } else { b.top - overshoot };
            let mut ball = cue(Vec2::new(x, y), Vec2::new(vx, vy));
            let hit = ball_wall_collision(&mut ball, &b, BALL_DIAMETER);
            prop_assert_eq!(hit, Some(WallAxis::Horizontal));
            prop_assert_eq!(ball.vel, Vec2::new(vx, -vy));
        }
    }
}
