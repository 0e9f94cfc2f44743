// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::sim::Scenario;

#[derive(Parser, Debug, Clone)]
#[command(name = "pov-sim")]
#[command(about = "Headless driver for the POV controller", long_about = None)]
pub struct Cli {
    /// JSON settings file (controller and field of view)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Scenario to drive the controller through
    #[arg(long, value_enum, default_value_t = Scenario::Fly)]
    pub scenario: Scenario,

    /// Simulated frames per second
    #[arg(long, default_value_t = 60.0)]
    pub fps: f64,

    /// Number of frames to run
    #[arg(long, default_value_t = 240)]
    pub frames: usize,

    /// Print every frame as a JSON line
    #[arg(long)]
    pub json: bool,

    /// Take timestamps from the wall clock instead of a fixed step
    #[arg(long)]
    pub realtime: bool,
}
