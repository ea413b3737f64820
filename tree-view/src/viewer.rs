//! Interactive fractal tree viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which consumes the scene stream
//! produced by [`crate::stream::spawn_render`] and implements
//! [`eframe::App`] to paint the tree as it is drawn, with camera pan
//! and zoom.

use eframe::App;
use glam::Vec2;
use std::sync::mpsc::{Receiver, TryRecvError};

use crate::stream::{self, SceneEvent};
use tree_core::canvas::Primitive;
use tree_core::config::Config;
use tree_core::types::Color;

/// Hard per-frame intake cap, also used when the speed is "instant".
const MAX_DRAIN_PER_FRAME: usize = 50_000;

/// Primitives revealed per second at turtle speed 1.
const DRAIN_RATE_BASE: f64 = 120.0;

/// Main application state for the viewer.
///
/// [`Viewer`] glues together:
/// - The scene stream from the render thread (`rx`).
/// - The accumulated drawing (`items`, `background`).
/// - Camera state (pan/zoom) and playback state (paused, intake budget).
///
/// The typical per-frame update is:
/// 1. Drain a speed-dependent number of events from the stream.
/// 2. Handle pan/zoom input.
/// 3. Paint the background and every primitive received so far.
pub struct Viewer {
    rx: Receiver<SceneEvent>,
    items: Vec<Primitive>,
    background: Color,

    segments: usize,
    dots: usize,

    cursor_speed: u8,
    depth: Option<u32>,
    finished: bool,

    playing: bool,
    carry: f64,

    zoom: f32,
    pan: egui::Vec2,

    last_frame_time: f64,
}

impl Viewer {
    /// Starts a render of `cfg` on a worker thread and creates the
    /// viewer that will display it.
    ///
    /// The camera starts centered on the scene with a zoom that fits
    /// the ground line in a default window.
    pub fn new(cfg: Config, with_leaves: bool) -> Self {
        let depth = cfg.recursion_depth();
        match depth {
            Some(d) => log::info!("starting render, recursion depth {d}"),
            None => log::warn!(
                "reduction_factor {} does not decay; drawing will not finish",
                cfg.reduction_factor
            ),
        }

        let cursor_speed = cfg.cursor_speed;
        let rx = stream::spawn_render(cfg, with_leaves);
        Self::from_parts(rx, cursor_speed, depth)
    }

    /// Builds a viewer around an already-running scene stream.
    fn from_parts(rx: Receiver<SceneEvent>, cursor_speed: u8, depth: Option<u32>) -> Self {
        Self {
            rx,
            items: Vec::new(),
            background: Color::SKY_BLUE,
            segments: 0,
            dots: 0,
            cursor_speed,
            depth,
            finished: false,
            playing: true,
            carry: 0.0,
            zoom: 0.8,
            pan: egui::vec2(0.0, 0.0),
            last_frame_time: 0.0,
        }
    }

    /// Takes up to `budget` drawn primitives from the stream.
    ///
    /// Non-drawing events (background, cursor speed) are applied as they
    /// arrive and do not count against the budget. Returns the number of
    /// primitives taken; sets `finished` once the render thread hangs up.
    fn drain_events(&mut self, budget: usize) -> usize {
        let mut taken = 0;
        while taken < budget {
            match self.rx.try_recv() {
                Ok(SceneEvent::Drew(p)) => {
                    match p {
                        Primitive::Segment { .. } => self.segments += 1,
                        Primitive::Dot { .. } => self.dots += 1,
                    }
                    self.items.push(p);
                    taken += 1;
                }
                Ok(SceneEvent::Background(c)) => self.background = c,
                Ok(SceneEvent::CursorSpeed(s)) => self.cursor_speed = s,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !self.finished {
                        self.finished = true;
                        log::info!("drawing finished, {} primitives", self.items.len());
                    }
                    break;
                }
            }
        }
        taken
    }

    /// Computes this frame's intake budget from the cursor speed.
    ///
    /// Speed 0 means "as fast as possible" (capped per frame to keep the
    /// UI responsive); otherwise the rate scales linearly with the
    /// speed, with fractional amounts carried over between frames.
    fn frame_budget(&mut self, dt: f64) -> usize {
        if self.cursor_speed == 0 {
            return MAX_DRAIN_PER_FRAME;
        }
        self.carry += DRAIN_RATE_BASE * f64::from(self.cursor_speed) * dt;
        let budget = self.carry.floor();
        self.carry -= budget;
        (budget as usize).min(MAX_DRAIN_PER_FRAME)
    }

    /// Converts a world-space position to screen-space.
    ///
    /// World coordinates are scaled by `zoom`, offset by `pan`, and
    /// centered inside the given `rect`. The y-axis is flipped so that
    /// positive y goes up in world space, matching the turtle's frame.
    fn world_to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        let center = rect.center();
        egui::pos2(
            center.x + p.x * self.zoom + self.pan.x,
            center.y - p.y * self.zoom + self.pan.y,
        )
    }

    /// Inverse of [`Viewer::world_to_screen`] up to rounding.
    fn screen_to_world(&self, p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let center = rect.center();
        let x = (p.x - center.x - self.pan.x) / self.zoom;
        let y = (center.y - p.y + self.pan.y) / self.zoom;
        Vec2::new(x, y)
    }

    fn color32(c: Color) -> egui::Color32 {
        egui::Color32::from_rgb(c.r, c.g, c.b)
    }

    /// Builds the top panel UI (playback control, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let label = if self.playing { "⏸ Pause" } else { "▶ Draw" };
                if ui.button(label).clicked() {
                    self.playing = !self.playing;
                }

                ui.separator();
                ui.add(egui::Slider::new(&mut self.zoom, 0.1..=10.0).text("Zoom"));
            });
        });
    }

    /// Builds the bottom status bar (progress, depth, speed).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match self.depth {
                    Some(d) => ui.label(format!("depth = {d}")),
                    None => ui.label("depth = unbounded"),
                };
                ui.label(format!("speed = {}", self.cursor_speed));
                ui.separator();
                ui.label(format!("leaves = {}", self.dots));
                ui.label(format!("segments = {}", self.segments));
                ui.label(if self.finished {
                    "finished"
                } else if self.playing {
                    "drawing…"
                } else {
                    "paused"
                });
            });
        });
    }

    /// Builds the central panel: camera input, then the drawing itself.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            // Pan with drag.
            if response.dragged() {
                self.pan += response.drag_delta();
            }

            // Zoom around the mouse cursor.
            let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                let pointer_screen = response.hover_pos().unwrap_or(rect.center());
                let world_before = self.screen_to_world(pointer_screen, rect);

                let factor = (1.0 + scroll * 0.001).clamp(0.5, 2.0);
                self.zoom = (self.zoom * factor).clamp(0.1, 10.0);

                let screen_after = self.world_to_screen(world_before, rect);
                self.pan += pointer_screen - screen_after;
            }

            painter.rect_filled(rect, egui::CornerRadius::ZERO, Self::color32(self.background));

            for item in &self.items {
                match *item {
                    Primitive::Segment {
                        from,
                        to,
                        width,
                        color,
                    } => {
                        let a = self.world_to_screen(from, rect);
                        let b = self.world_to_screen(to, rect);
                        let stroke_w = (width * self.zoom).max(1.0);
                        painter.line_segment([a, b], egui::Stroke::new(stroke_w, Self::color32(color)));
                    }
                    Primitive::Dot {
                        center,
                        radius,
                        color,
                    } => {
                        let p = self.world_to_screen(center, rect);
                        let r = (radius * self.zoom).max(1.0);
                        painter.circle_filled(p, r, Self::color32(color));
                    }
                }
            }

            // Take in more of the drawing while it is playing.
            let now = ctx.input(|i| i.time);
            let dt = (now - self.last_frame_time).clamp(0.0, 0.25);
            self.last_frame_time = now;

            if self.playing && !self.finished {
                let budget = self.frame_budget(dt);
                self.drain_events(budget);
                ctx.request_repaint();
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}
