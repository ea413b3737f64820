//! Streams renderer output from a worker thread to the UI.
//!
//! The recursive renderer is synchronous and, for slowly-decaying
//! reduction factors, can draw for an arbitrarily long time (the sample
//! parameters keep a turtle busy indefinitely, on purpose). Instead of
//! materializing the whole scene up front, [`spawn_render`] runs the
//! renderer on its own thread behind a [`StreamSurface`], which resolves
//! turtle commands into primitives and pushes them through a bounded
//! channel. The bound gives natural backpressure: the renderer draws no
//! faster than the viewer consumes, just like a turtle window.

use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread;

use tree_core::canvas::{Canvas, Primitive};
use tree_core::config::Config;
use tree_core::renderer::TreeRenderer;
use tree_core::surface::Surface;
use tree_core::types::Color;

/// In-flight primitives before the renderer thread blocks.
const CHANNEL_DEPTH: usize = 256;

/// One scene update sent from the render thread.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneEvent {
    /// Background color for the whole scene.
    Background(Color),
    /// Requested cursor animation speed.
    CursorSpeed(u8),
    /// One newly drawn primitive.
    Drew(Primitive),
}

/// A [`Surface`] that forwards everything a [`Canvas`] draws into a channel.
///
/// Cursor bookkeeping is delegated to an inner [`Canvas`]; after every
/// command, any primitives the canvas produced are drained and sent.
/// Once the receiving side hangs up, sending stops silently; the
/// renderer finishes its recursion without a listener.
pub struct StreamSurface {
    turtle: Canvas,
    tx: SyncSender<SceneEvent>,
    connected: bool,
}

impl StreamSurface {
    pub fn new(tx: SyncSender<SceneEvent>) -> Self {
        Self {
            turtle: Canvas::new(),
            tx,
            connected: true,
        }
    }

    fn send(&mut self, event: SceneEvent) {
        if self.connected && self.tx.send(event).is_err() {
            self.connected = false;
        }
    }

    /// Ships everything the inner canvas drew since the last flush.
    fn flush(&mut self) {
        let drawn: Vec<Primitive> = self.turtle.items.drain(..).collect();
        for p in drawn {
            self.send(SceneEvent::Drew(p));
        }
    }
}

impl Surface for StreamSurface {
    fn set_background(&mut self, color: Color) {
        self.turtle.set_background(color);
        self.send(SceneEvent::Background(color));
    }

    fn pen_up(&mut self) {
        self.turtle.pen_up();
    }

    fn pen_down(&mut self) {
        self.turtle.pen_down();
    }

    fn move_to(&mut self, pos: glam::Vec2) {
        self.turtle.move_to(pos);
        self.flush();
    }

    fn forward(&mut self, distance: f32) {
        self.turtle.forward(distance);
        self.flush();
    }

    fn backward(&mut self, distance: f32) {
        self.turtle.backward(distance);
        self.flush();
    }

    fn turn_left(&mut self, degrees: f32) {
        self.turtle.turn_left(degrees);
    }

    fn turn_right(&mut self, degrees: f32) {
        self.turtle.turn_right(degrees);
    }

    fn set_pen_width(&mut self, width: f32) {
        self.turtle.set_pen_width(width);
    }

    fn set_color(&mut self, color: Color) {
        self.turtle.set_color(color);
    }

    fn filled_circle(&mut self, radius: f32) {
        self.turtle.filled_circle(radius);
        self.flush();
    }

    fn set_cursor_speed(&mut self, speed: u8) {
        self.turtle.set_cursor_speed(speed);
        self.send(SceneEvent::CursorSpeed(speed));
    }
}

/// Renders the tree on a worker thread and returns the event stream.
///
/// The thread runs a full [`TreeRenderer::render`] pass and exits when
/// the recursion completes; the channel disconnecting is the "drawing
/// finished" signal on the receiving end.
pub fn spawn_render(cfg: Config, with_leaves: bool) -> Receiver<SceneEvent> {
    let (tx, rx) = mpsc::sync_channel(CHANNEL_DEPTH);

    thread::spawn(move || {
        let renderer = TreeRenderer::new(cfg);
        let mut surface = StreamSurface::new(tx);
        renderer.render(&mut surface, with_leaves);
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Small terminating scenario: two drawn levels, four leaf tips.
    fn shallow_cfg() -> Config {
        let mut cfg = Config::default();
        cfg.initial_length = 10.0;
        cfg.branch_angle = 30.0;
        cfg.reduction_factor = 0.5;
        cfg.min_length = 4.0;
        cfg
    }

    #[test]
    fn stream_surface_emits_full_scene_in_draw_order() {
        // Channel wide enough that nothing blocks on this thread.
        let (tx, rx) = mpsc::sync_channel(1024);
        let mut surface = StreamSurface::new(tx);

        TreeRenderer::new(shallow_cfg()).render(&mut surface, true);
        drop(surface);

        let events: Vec<SceneEvent> = rx.iter().collect();

        assert_eq!(events[0], SceneEvent::CursorSpeed(1));
        assert_eq!(events[1], SceneEvent::Background(Color::SKY_BLUE));

        // Ground + 3 forwards + 3 backward retraces, and 4 leaf dots.
        let segments = events
            .iter()
            .filter(|e| matches!(e, SceneEvent::Drew(Primitive::Segment { .. })))
            .count();
        let dots = events
            .iter()
            .filter(|e| matches!(e, SceneEvent::Drew(Primitive::Dot { .. })))
            .count();
        assert_eq!(segments, 7);
        assert_eq!(dots, 4);

        // The ground segment is the first thing drawn.
        let first_drawn = events
            .iter()
            .find(|e| matches!(e, SceneEvent::Drew(_)))
            .unwrap();
        match first_drawn {
            SceneEvent::Drew(Primitive::Segment { from, .. }) => {
                assert_eq!(*from, glam::Vec2::new(-400.0, -300.0));
            }
            other => panic!("expected the ground segment first, got {other:?}"),
        }
    }

    #[test]
    fn spawn_render_finishes_and_disconnects_for_terminating_config() {
        let rx = spawn_render(shallow_cfg(), false);

        // Blocking iteration ends when the render thread drops the sender.
        let events: Vec<SceneEvent> = rx.iter().collect();

        let drawn = events
            .iter()
            .filter(|e| matches!(e, SceneEvent::Drew(_)))
            .count();
        assert_eq!(drawn, 7, "no leaves expected in bare mode");
    }

    #[test]
    fn stream_surface_survives_receiver_hangup() {
        let (tx, rx) = mpsc::sync_channel(1024);
        let mut surface = StreamSurface::new(tx);
        drop(rx);

        // Rendering into a dead channel must not panic or block.
        TreeRenderer::new(shallow_cfg()).render(&mut surface, true);
    }
}
