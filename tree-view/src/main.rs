//! Application entry point for the fractal tree viewer.
//!
//! This binary sets up logging and eframe/egui, builds the sample tree
//! configuration, and delegates all drawing and playback to [`Viewer`]
//! from the `viewer` module. The eframe event loop is what blocks the
//! process until the user closes the window.

mod stream;
mod viewer;

use tree_core::config::Config;
use viewer::Viewer;

/// Starts the native eframe application.
///
/// Builds the sample configuration (trunk 300 units, 25° branch angle,
/// 0.9 reduction, floor at 2 units, speed 1, trunk width 10), validates
/// it, and launches the main window titled `"Fractal Tree"` rendering
/// in leaf mode. Invalid parameters are reported and abort the start
/// instead of recursing without bound.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if the configuration is invalid or eframe fails to create
///   the native window or event loop.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()
        .ok();

    let cfg = Config {
        initial_length: 300.0,
        branch_angle: 25.0,
        reduction_factor: 0.9,
        min_length: 2.0,
        cursor_speed: 1,
        thickness: 10.0,
        ..Config::default()
    };

    if let Err(err) = cfg.validate() {
        log::error!("invalid tree configuration: {err}");
        return Err(err.into());
    }

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Fractal Tree",
        options,
        Box::new(move |_cc| {
            // Construct the root app state for the viewer, leaf mode on.
            Ok(Box::new(Viewer::new(cfg, true)))
        }),
    )?;

    Ok(())
}
