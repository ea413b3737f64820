use crate::types::Color;
use glam::Vec2;

/// An abstract 2-D turtle drawing surface.
///
/// A surface owns the cursor: a position, a heading in degrees
/// (counter-clockwise, 0° pointing along +x), and a pen with an up/down
/// state, a width and a color. The renderer only ever mutates the
/// cursor through these commands, never directly.
///
/// Implementations decide what "drawing" means: [`crate::canvas::Canvas`]
/// produces geometry for a painter, [`crate::recording::CommandLog`]
/// just records the command stream.
pub trait Surface {
    /// Sets the background color of the whole scene.
    fn set_background(&mut self, color: Color);

    /// Lifts the pen; subsequent moves do not draw.
    fn pen_up(&mut self);

    /// Lowers the pen; subsequent moves draw.
    fn pen_down(&mut self);

    /// Moves the cursor to an absolute position, drawing if the pen is down.
    fn move_to(&mut self, pos: Vec2);

    /// Moves the cursor `distance` units along its heading.
    fn forward(&mut self, distance: f32);

    /// Moves the cursor `distance` units against its heading.
    ///
    /// Like a turtle, this draws (over the existing line) when the pen
    /// is down; it does not erase.
    fn backward(&mut self, distance: f32);

    /// Rotates the heading counter-clockwise by `degrees`.
    fn turn_left(&mut self, degrees: f32);

    /// Rotates the heading clockwise by `degrees`.
    fn turn_right(&mut self, degrees: f32);

    /// Sets the pen width for subsequent strokes.
    fn set_pen_width(&mut self, width: f32);

    /// Sets the pen color for subsequent strokes and fills.
    fn set_color(&mut self, color: Color);

    /// Draws a filled circle of the given radius at the cursor position,
    /// in the current pen color. The cursor does not move.
    fn filled_circle(&mut self, radius: f32);

    /// Sets the cursor animation speed (1 slow .. 10 fast, 0 instant).
    ///
    /// Purely cosmetic; backends without animation ignore it.
    fn set_cursor_speed(&mut self, speed: u8);
}
