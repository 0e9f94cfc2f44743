use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use pov_control::cli::Cli;
use pov_control::config::Settings;
use pov_control::controller::PovController;
use pov_control::core::FrameClock;
use pov_control::fov::FovController;
use pov_control::sim::Simulation;
use pov_control::types::PovUniform;

// === Constants ===

const VIEWPORT_WIDTH: u32 = 800;
const VIEWPORT_HEIGHT: u32 = 600;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    anyhow::ensure!(cli.fps > 0.0, "--fps must be positive, got {}", cli.fps);

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    log::info!("settings: {settings:?}");

    let controller = PovController::with_settings(&settings.controller)
        .context("Invalid controller settings")?;
    let mut fov = FovController::new(settings.fov).context("Invalid field of view settings")?;
    fov.set_viewport(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);

    let mut sim = Simulation::new(controller, cli.scenario, cli.frames);
    let clock = FrameClock::new();
    let frame_interval = 1.0 / cli.fps;
    let mut last_timestamp = 0.0;

    for frame in 0..cli.frames {
        let timestamp = if cli.realtime {
            clock.now()
        } else {
            frame as f64 * frame_interval
        };
        let record = sim.step(frame, timestamp);
        last_timestamp = timestamp;
        if cli.json {
            println!("{}", serde_json::to_string(&record)?);
        }
        if cli.realtime {
            thread::sleep(Duration::from_secs_f64(frame_interval));
        }
    }

    let pov = sim.controller().current_pov();
    let uniform = PovUniform::new(pov, &fov, last_timestamp as f32);
    log::info!("uniform: {} bytes", bytemuck::bytes_of(&uniform).len());

    println!(
        "{:?}: {} frames, location {:?}, center {:?}, up {:?}, arrived {}",
        cli.scenario,
        cli.frames,
        pov.location(),
        pov.center(),
        pov.up(),
        sim.arrived()
    );

    Ok(())
}
