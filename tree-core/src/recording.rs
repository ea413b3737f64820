use crate::surface::Surface;
use crate::types::Color;
use glam::Vec2;

/// One recorded surface command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    SetBackground(Color),
    PenUp,
    PenDown,
    MoveTo(Vec2),
    Forward(f32),
    Backward(f32),
    TurnLeft(f32),
    TurnRight(f32),
    SetPenWidth(f32),
    SetColor(Color),
    FilledCircle(f32),
    SetCursorSpeed(u8),
}

/// A [`Surface`] that records every command in order and draws nothing.
///
/// Used by tests to assert on the exact command sequence the renderer
/// emits, independent of any geometry backend.
#[derive(Debug, Default)]
pub struct CommandLog {
    pub commands: Vec<Command>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts commands matching `pred`.
    pub fn count(&self, pred: impl Fn(&Command) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl Surface for CommandLog {
    fn set_background(&mut self, color: Color) {
        self.commands.push(Command::SetBackground(color));
    }

    fn pen_up(&mut self) {
        self.commands.push(Command::PenUp);
    }

    fn pen_down(&mut self) {
        self.commands.push(Command::PenDown);
    }

    fn move_to(&mut self, pos: Vec2) {
        self.commands.push(Command::MoveTo(pos));
    }

    fn forward(&mut self, distance: f32) {
        self.commands.push(Command::Forward(distance));
    }

    fn backward(&mut self, distance: f32) {
        self.commands.push(Command::Backward(distance));
    }

    fn turn_left(&mut self, degrees: f32) {
        self.commands.push(Command::TurnLeft(degrees));
    }

    fn turn_right(&mut self, degrees: f32) {
        self.commands.push(Command::TurnRight(degrees));
    }

    fn set_pen_width(&mut self, width: f32) {
        self.commands.push(Command::SetPenWidth(width));
    }

    fn set_color(&mut self, color: Color) {
        self.commands.push(Command::SetColor(color));
    }

    fn filled_circle(&mut self, radius: f32) {
        self.commands.push(Command::FilledCircle(radius));
    }

    fn set_cursor_speed(&mut self, speed: u8) {
        self.commands.push(Command::SetCursorSpeed(speed));
    }
}
