//! Core turtle-graphics fractal tree library.
//!
//! Main components:
//! - [`renderer`] — the recursive branch renderer.
//! - [`surface`] — the abstract drawing surface the renderer draws on.
//! - [`canvas`] — a concrete surface that turns turtle commands into
//!   line segments and leaf circles.
//! - [`recording`] — a surface that records raw commands, for tests.
//! - [`config`] — tree parameters and validation.
//! - [`types`] — shared small types (colors).

pub mod canvas;
pub mod config;
pub mod recording;
pub mod renderer;
pub mod surface;
pub mod types;
