use crate::surface::Surface;
use crate::types::Color;
use glam::Vec2;

/// One drawn shape, in world coordinates (y up).
///
/// Primitives are stored in the order they were drawn, so a viewer can
/// replay the drawing progressively the way a turtle window animates it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Segment {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    Dot {
        center: Vec2,
        radius: f32,
        color: Color,
    },
}

/// A concrete [`Surface`] that resolves turtle commands into geometry.
///
/// `Canvas` owns the full cursor state and appends a [`Primitive`] for
/// every pen-down move and every filled circle. It performs no drawing
/// itself; a display layer paints `items` however it likes.
///
/// The cursor starts at the origin heading straight up (90°) with the
/// pen down, matching how the renderer expects to be handed a surface.
#[derive(Debug)]
pub struct Canvas {
    /// Everything drawn so far, in draw order.
    pub items: Vec<Primitive>,
    /// Scene background color.
    pub background: Color,
    /// Last cursor speed set on this surface.
    pub cursor_speed: u8,

    pos: Vec2,
    heading: f32,
    pen_down: bool,
    pen_width: f32,
    pen_color: Color,
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            background: Color::SKY_BLUE,
            cursor_speed: 0,
            pos: Vec2::ZERO,
            heading: 90.0,
            pen_down: true,
            pen_width: 1.0,
            pen_color: Color::BLACK,
        }
    }

    /// Current cursor position in world coordinates.
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    /// Current heading in degrees (not normalized to [0, 360)).
    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    /// Number of line segments drawn so far.
    pub fn segment_count(&self) -> usize {
        self.items
            .iter()
            .filter(|p| matches!(p, Primitive::Segment { .. }))
            .count()
    }

    /// Number of filled dots (leaves) drawn so far.
    pub fn dot_count(&self) -> usize {
        self.items
            .iter()
            .filter(|p| matches!(p, Primitive::Dot { .. }))
            .count()
    }

    /// Unit vector along the current heading.
    fn dir(&self) -> Vec2 {
        Vec2::from_angle(self.heading.to_radians())
    }

    /// Moves the cursor to `to`, recording a segment if the pen is down.
    fn advance(&mut self, to: Vec2) {
        if self.pen_down {
            self.items.push(Primitive::Segment {
                from: self.pos,
                to,
                width: self.pen_width,
                color: self.pen_color,
            });
        }
        self.pos = to;
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for Canvas {
    fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    fn pen_up(&mut self) {
        self.pen_down = false;
    }

    fn pen_down(&mut self) {
        self.pen_down = true;
    }

    fn move_to(&mut self, pos: Vec2) {
        self.advance(pos);
    }

    fn forward(&mut self, distance: f32) {
        let to = self.pos + self.dir() * distance;
        self.advance(to);
    }

    fn backward(&mut self, distance: f32) {
        let to = self.pos - self.dir() * distance;
        self.advance(to);
    }

    fn turn_left(&mut self, degrees: f32) {
        self.heading += degrees;
    }

    fn turn_right(&mut self, degrees: f32) {
        self.heading -= degrees;
    }

    fn set_pen_width(&mut self, width: f32) {
        self.pen_width = width;
    }

    fn set_color(&mut self, color: Color) {
        self.pen_color = color;
    }

    fn filled_circle(&mut self, radius: f32) {
        self.items.push(Primitive::Dot {
            center: self.pos,
            radius,
            color: self.pen_color,
        });
    }

    fn set_cursor_speed(&mut self, speed: u8) {
        self.cursor_speed = speed;
    }
}
