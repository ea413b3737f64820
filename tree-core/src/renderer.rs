//! Recursive fractal tree rendering.
//!
//! A full render is a fixed pipeline over an abstract [`Surface`]:
//! 1. Cosmetic setup — cursor speed, background, pen color.
//! 2. [`TreeRenderer::draw_ground`] — a decorative baseline.
//! 3. Cursor placement at the trunk origin.
//! 4. [`TreeRenderer::draw_branch`] — the recursive core, drawing one
//!    segment per branch and two mirrored sub-branches per level.
//!
//! The recursion carries no position stack: every call restores the
//! cursor pose it was entered with, so sibling branches always start
//! from the same pivot.

use crate::config::Config;
use crate::surface::Surface;
use crate::types::Color;
use glam::Vec2;

/// Left end of the ground baseline.
const GROUND_START: Vec2 = Vec2::new(-400.0, -300.0);
/// Length of the ground baseline.
const GROUND_LENGTH: f32 = 800.0;
/// Where the trunk grows from (bottom center, on the ground).
const TREE_ORIGIN: Vec2 = Vec2::new(0.0, -300.0);
/// Radius of a leaf dot at a branch tip.
const LEAF_RADIUS: f32 = 3.0;

/// Draws a recursive fractal tree on a [`Surface`].
///
/// The renderer holds only the immutable [`Config`]; all mutable state
/// (cursor pose, pen) lives in the surface and is driven exclusively
/// through turtle commands.
#[derive(Clone, Copy, Debug)]
pub struct TreeRenderer {
    cfg: Config,
}

impl TreeRenderer {
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    /// Overrides the branch and leaf colors from the configuration.
    pub fn set_colors(&mut self, branch: Color, leaf: Color) {
        self.cfg.branch_color = branch;
        self.cfg.leaf_color = leaf;
    }

    /// Performs a full scene render.
    ///
    /// 1. Sets the cursor speed and the sky background.
    /// 2. Sets the pen color to the branch color.
    /// 3. Draws the ground baseline.
    /// 4. Lifts the pen, moves to the trunk origin, lowers the pen.
    /// 5. Runs [`TreeRenderer::draw_branch`] with the initial length and
    ///    thickness.
    ///
    /// The surface is left ready for display; presenting it (and
    /// blocking until the window closes) is the display layer's job.
    ///
    /// ### Parameters
    /// - `surface` - The drawing surface; expected to start with the
    ///   cursor heading straight up.
    /// - `with_leaves` - Whether recursion base cases draw a leaf dot.
    pub fn render<S: Surface>(&self, surface: &mut S, with_leaves: bool) {
        surface.set_cursor_speed(self.cfg.cursor_speed);
        surface.set_background(Color::SKY_BLUE);
        surface.set_color(self.cfg.branch_color);

        self.draw_ground(surface);

        surface.pen_up();
        surface.move_to(TREE_ORIGIN);
        surface.pen_down();

        self.draw_branch(surface, self.cfg.initial_length, self.cfg.thickness, with_leaves);
    }

    /// Recursively draws one branch and its two children.
    ///
    /// While `length` is above the configured minimum:
    /// 1. Set the pen width to `thickness` and draw `length` forward.
    /// 2. Turn left by the branch angle and recurse with both `length`
    ///    and `thickness` scaled by the reduction factor.
    /// 3. Turn right by twice the branch angle (mirroring to the other
    ///    side) and recurse again with the same reduced values.
    /// 4. Turn left by the branch angle, restoring the entry heading,
    ///    and move back `length` to the branch's start. The backward
    ///    move retraces the drawn segment; it does not erase it.
    ///
    /// At the recursion floor nothing is drawn, except in leaf mode,
    /// where a filled dot in the leaf color marks the branch tip and the
    /// pen color is restored to the branch color afterwards. Leaves
    /// appear only at tips, never at interior branches.
    ///
    /// After any call the cursor pose (position and heading) equals the
    /// pose at entry, which is what lets sibling branches share a pivot
    /// without the renderer stacking positions.
    ///
    /// Termination requires `reduction_factor` in (0, 1); this is a
    /// documented precondition, not a runtime check (see
    /// [`Config::validate`]).
    ///
    /// ### Parameters
    /// - `surface` - The drawing surface.
    /// - `length` - Length of this branch segment.
    /// - `thickness` - Pen width for this branch segment.
    /// - `with_leaves` - Whether base cases draw a leaf dot.
    pub fn draw_branch<S: Surface>(
        &self,
        surface: &mut S,
        length: f32,
        thickness: f32,
        with_leaves: bool,
    ) {
        if length > self.cfg.min_length {
            let reduced_len = length * self.cfg.reduction_factor;
            let reduced_thick = thickness * self.cfg.reduction_factor;

            surface.set_pen_width(thickness);
            surface.forward(length);

            surface.turn_left(self.cfg.branch_angle);
            self.draw_branch(surface, reduced_len, reduced_thick, with_leaves);

            surface.turn_right(2.0 * self.cfg.branch_angle);
            self.draw_branch(surface, reduced_len, reduced_thick, with_leaves);

            surface.turn_left(self.cfg.branch_angle);
            surface.backward(length);
        } else if with_leaves {
            surface.set_color(self.cfg.leaf_color);
            surface.filled_circle(LEAF_RADIUS);
            surface.set_color(self.cfg.branch_color);
        }
    }

    /// Draws the horizontal ground baseline.
    ///
    /// Lifts the pen, moves to the far-left baseline point, lowers the
    /// pen and draws a fixed-length horizontal segment. The cursor ends
    /// at the right end of the segment with the pen down; the heading is
    /// turned right for the stroke and restored afterwards.
    pub fn draw_ground<S: Surface>(&self, surface: &mut S) {
        surface.pen_up();
        surface.move_to(GROUND_START);
        surface.pen_down();

        surface.turn_right(90.0);
        surface.forward(GROUND_LENGTH);
        surface.turn_left(90.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::recording::{Command, CommandLog};

    const EPS: f32 = 1e-3;

    /// Scenario used across tests: 10 -> 5 -> 2.5, floor at 4, so the
    /// recursion draws exactly two levels (a full binary tree of depth
    /// 2: 3 branch segments, 4 tips).
    fn shallow_cfg() -> Config {
        let mut cfg = Config::default();
        cfg.initial_length = 10.0;
        cfg.branch_angle = 30.0;
        cfg.reduction_factor = 0.5;
        cfg.min_length = 4.0;
        cfg
    }

    #[test]
    fn branch_recursion_restores_cursor_pose() {
        let renderer = TreeRenderer::new(shallow_cfg());
        let mut canvas = Canvas::new();

        // Start from a non-trivial pose.
        canvas.pen_up();
        canvas.move_to(Vec2::new(12.5, -40.0));
        canvas.turn_left(33.0);
        canvas.pen_down();

        let pos_before = canvas.position();
        let heading_before = canvas.heading();

        renderer.draw_branch(&mut canvas, 10.0, 5.0, true);

        let pos_after = canvas.position();
        assert!(
            (pos_after - pos_before).length() < EPS,
            "net displacement should be zero, got {pos_before:?} -> {pos_after:?}"
        );
        assert!(
            (canvas.heading() - heading_before).abs() < EPS,
            "heading should be restored"
        );
    }

    #[test]
    fn branch_segment_count_matches_full_binary_tree() {
        let renderer = TreeRenderer::new(shallow_cfg());
        let mut log = CommandLog::new();

        renderer.draw_branch(&mut log, 10.0, 5.0, false);

        // Depth 2 everywhere: 2^2 - 1 = 3 branch segments drawn forward,
        // each later retraced backward.
        assert_eq!(log.count(|c| matches!(c, Command::Forward(_))), 3);
        assert_eq!(log.count(|c| matches!(c, Command::Backward(_))), 3);

        // Per interior branch: left, right-mirror, left-restore.
        assert_eq!(log.count(|c| matches!(c, Command::TurnLeft(_))), 6);
        assert_eq!(log.count(|c| matches!(c, Command::TurnRight(_))), 3);
    }

    #[test]
    fn leaf_mode_draws_one_dot_per_recursion_tip() {
        let renderer = TreeRenderer::new(shallow_cfg());
        let mut log = CommandLog::new();

        renderer.draw_branch(&mut log, 10.0, 5.0, true);

        // A depth-2 full binary tree has 4 tips.
        assert_eq!(log.count(|c| matches!(c, Command::FilledCircle(_))), 4);
    }

    #[test]
    fn non_leaf_base_case_draws_nothing() {
        let renderer = TreeRenderer::new(shallow_cfg());
        let mut log = CommandLog::new();

        // Already at or below the floor: a no-op without leaves.
        renderer.draw_branch(&mut log, 4.0, 5.0, false);
        assert!(log.commands.is_empty());

        // With leaves it is exactly dot-with-color-swap.
        renderer.draw_branch(&mut log, 4.0, 5.0, true);
        assert_eq!(
            log.commands,
            vec![
                Command::SetColor(Color::GREEN),
                Command::FilledCircle(3.0),
                Command::SetColor(Color::BROWN),
            ]
        );
    }

    #[test]
    fn leaf_mode_only_adds_color_and_circle_commands() {
        let renderer = TreeRenderer::new(shallow_cfg());

        let mut bare = CommandLog::new();
        renderer.render(&mut bare, false);

        let mut leafy = CommandLog::new();
        renderer.render(&mut leafy, true);

        let movement = |commands: &[Command]| -> Vec<Command> {
            commands
                .iter()
                .filter(|c| {
                    !matches!(c, Command::SetColor(_) | Command::FilledCircle(_))
                })
                .copied()
                .collect()
        };

        // Both modes walk the identical path.
        assert_eq!(movement(&bare.commands), movement(&leafy.commands));

        assert_eq!(bare.count(|c| matches!(c, Command::FilledCircle(_))), 0);
        assert_eq!(leafy.count(|c| matches!(c, Command::FilledCircle(_))), 4);
    }

    #[test]
    fn render_sets_up_scene_before_recursing() {
        let cfg = shallow_cfg();
        let renderer = TreeRenderer::new(cfg);
        let mut log = CommandLog::new();

        renderer.render(&mut log, false);

        // Cosmetic setup, ground, then trunk placement.
        assert_eq!(
            &log.commands[..12],
            &[
                Command::SetCursorSpeed(cfg.cursor_speed),
                Command::SetBackground(Color::SKY_BLUE),
                Command::SetColor(cfg.branch_color),
                Command::PenUp,
                Command::MoveTo(Vec2::new(-400.0, -300.0)),
                Command::PenDown,
                Command::TurnRight(90.0),
                Command::Forward(800.0),
                Command::TurnLeft(90.0),
                Command::PenUp,
                Command::MoveTo(Vec2::new(0.0, -300.0)),
                Command::PenDown,
            ]
        );

        // First recursive command pair: trunk width, trunk segment.
        assert_eq!(log.commands[12], Command::SetPenWidth(cfg.thickness));
        assert_eq!(log.commands[13], Command::Forward(cfg.initial_length));
    }

    #[test]
    fn render_on_canvas_produces_expected_geometry() {
        let renderer = TreeRenderer::new(shallow_cfg());
        let mut canvas = Canvas::new();

        renderer.render(&mut canvas, true);

        // Ground (1) + 3 branch forwards + 3 backward retraces.
        assert_eq!(canvas.segment_count(), 7);
        assert_eq!(canvas.dot_count(), 4);
        assert_eq!(canvas.background, Color::SKY_BLUE);
        assert_eq!(canvas.cursor_speed, 1);

        // Trunk ends back at its origin, heading up, pen down.
        assert!((canvas.position() - Vec2::new(0.0, -300.0)).length() < EPS);
        assert!((canvas.heading() - 90.0).abs() < EPS);
        assert!(canvas.is_pen_down());
    }

    #[test]
    fn ground_is_a_horizontal_stroke_ending_pen_down() {
        let renderer = TreeRenderer::new(Config::default());
        let mut canvas = Canvas::new();

        renderer.draw_ground(&mut canvas);

        assert_eq!(canvas.segment_count(), 1);
        match canvas.items[0] {
            crate::canvas::Primitive::Segment { from, to, .. } => {
                assert!((from - Vec2::new(-400.0, -300.0)).length() < EPS);
                assert!((to - Vec2::new(400.0, -300.0)).length() < EPS);
            }
            ref other => panic!("expected the ground segment, got {other:?}"),
        }
        assert!(canvas.is_pen_down());
        // Heading restored to straight up for the trunk.
        assert!((canvas.heading() - 90.0).abs() < EPS);
    }

    #[test]
    fn set_colors_overrides_leaf_palette() {
        let mut renderer = TreeRenderer::new(shallow_cfg());
        let autumn = Color::rgb(200, 120, 30);
        renderer.set_colors(Color::BLACK, autumn);

        let mut log = CommandLog::new();
        renderer.draw_branch(&mut log, 4.0, 5.0, true);

        assert_eq!(
            log.commands,
            vec![
                Command::SetColor(autumn),
                Command::FilledCircle(3.0),
                Command::SetColor(Color::BLACK),
            ]
        );
    }
}
