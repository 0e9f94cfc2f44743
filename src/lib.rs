pub mod cli;
pub mod config;
pub mod controller;
pub mod core;
pub mod flight;
pub mod fov;
pub mod gestures;
pub mod math;
pub mod pov;
pub mod sim;
pub mod traits;
pub mod types;

pub use controller::PovController;
pub use flight::{Flight, FlightConstants, FlightPhase, FlightStep};
pub use pov::{CenteredPov, FreeForwardPov, Pov, PovError};
