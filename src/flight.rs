//! Scripted transitions between two poses.
//!
//! A [`Flight`] moves along the straight path from its start pose to its
//! destination with a trapezoidal speed profile: it accelerates until it has
//! covered the coasting threshold, coasts at constant speed, then decelerates
//! over the final stretch. Speed and distance are normalized to the path length.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pov::CenteredPov;

/// Speed floor while decelerating when `min_speed` is zero, so a flight
/// cannot stall short of its destination.
pub const STALL_GUARD_SPEED: f64 = 1e-3;

/// Invoked once when a flight arrives.
pub type FlightCallback = Box<dyn FnOnce()>;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FlightError {
    #[error("coasting threshold must be in (0, 1), got {0}")]
    CoastingThreshold(f64),
    #[error("acceleration must be positive, got {0}")]
    Acceleration(f64),
    #[error("minimum speed must be non-negative, got {0}")]
    MinSpeed(f64),
    #[error("maximum speed {max} must exceed minimum speed {min}")]
    MaxSpeed { min: f64, max: f64 },
}

/// Shape of the speed profile, in path fractions and path fractions per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConstants {
    pub coasting_threshold: f64,
    pub acceleration: f64,
    pub min_speed: f64,
    pub max_speed: f64,
}

impl Default for FlightConstants {
    fn default() -> Self {
        Self {
            coasting_threshold: 0.33,
            acceleration: 6.0,
            min_speed: 0.01,
            max_speed: 10.0,
        }
    }
}

impl FlightConstants {
    pub fn validate(&self) -> Result<(), FlightError> {
        if !(self.coasting_threshold > 0.0 && self.coasting_threshold < 1.0) {
            return Err(FlightError::CoastingThreshold(self.coasting_threshold));
        }
        if !(self.acceleration > 0.0 && self.acceleration.is_finite()) {
            return Err(FlightError::Acceleration(self.acceleration));
        }
        if !(self.min_speed >= 0.0) {
            return Err(FlightError::MinSpeed(self.min_speed));
        }
        if !(self.max_speed > self.min_speed && self.max_speed.is_finite()) {
            return Err(FlightError::MaxSpeed {
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        Ok(())
    }

    fn deceleration_floor(&self) -> f64 {
        if self.min_speed > 0.0 {
            self.min_speed
        } else {
            STALL_GUARD_SPEED
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightPhase {
    New,
    Accelerating,
    Coasting,
    Decelerating,
    Arrived,
}

/// Result of advancing a flight by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightStep {
    InProgress(CenteredPov),
    Finished,
}

pub struct Flight {
    start: CenteredPov,
    destination: CenteredPov,
    constants: FlightConstants,
    callback: Option<FlightCallback>,
    last_update: Option<f64>,
    speed: f64,
    fractional_distance: f64,
    phase: FlightPhase,
    last_pov: CenteredPov,
}

impl Flight {
    /// Creates a flight whose elapsed-time baseline is `started_at`. With no
    /// baseline the first update advances by zero time.
    pub fn new(
        start: CenteredPov,
        destination: CenteredPov,
        constants: FlightConstants,
        started_at: Option<f64>,
        callback: Option<FlightCallback>,
    ) -> Result<Self, FlightError> {
        constants.validate()?;
        Ok(Self {
            start,
            destination,
            constants,
            callback,
            last_update: started_at,
            speed: constants.min_speed,
            fractional_distance: 0.0,
            phase: FlightPhase::New,
            last_pov: start,
        })
    }

    pub fn start(&self) -> &CenteredPov {
        &self.start
    }

    pub fn destination(&self) -> &CenteredPov {
        &self.destination
    }

    pub fn constants(&self) -> &FlightConstants {
        &self.constants
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn fractional_distance(&self) -> f64 {
        self.fractional_distance
    }

    /// Moves the time baseline to `timestamp` without advancing the flight.
    pub fn hold(&mut self, timestamp: f64) {
        self.last_update = Some(timestamp);
    }

    /// Advances the flight to `timestamp`.
    ///
    /// Distance is integrated with the previous frame's speed before this
    /// frame's phase and speed are decided.
    pub fn update(&mut self, timestamp: f64) -> FlightStep {
        let dt = self
            .last_update
            .map_or(0.0, |last| (timestamp - last).max(0.0));
        self.last_update = Some(timestamp);
        self.fractional_distance = (self.fractional_distance + self.speed * dt).min(1.0);

        let constants = self.constants;
        match self.phase {
            FlightPhase::New => {
                self.phase = FlightPhase::Accelerating;
            }
            FlightPhase::Accelerating => {
                if self.fractional_distance >= constants.coasting_threshold {
                    self.phase = FlightPhase::Coasting;
                } else {
                    self.speed += constants.acceleration * dt;
                    if self.speed >= constants.max_speed {
                        self.speed = constants.max_speed;
                        self.phase = FlightPhase::Coasting;
                    }
                }
            }
            FlightPhase::Coasting => {
                if self.fractional_distance >= 1.0 - constants.coasting_threshold {
                    self.phase = FlightPhase::Decelerating;
                }
            }
            FlightPhase::Decelerating => {
                if self.fractional_distance >= 1.0 {
                    self.fractional_distance = 1.0;
                    self.phase = FlightPhase::Arrived;
                } else {
                    let floor = constants.deceleration_floor();
                    let slowed = self.speed - constants.acceleration * dt;
                    if constants.min_speed <= 0.0 && slowed < floor {
                        log::debug!("flight stall guard holding speed at {floor}");
                    }
                    self.speed = slowed.max(floor);
                }
            }
            FlightPhase::Arrived => {
                if let Some(callback) = self.callback.take() {
                    callback();
                }
                return FlightStep::Finished;
            }
        }

        let pov = self.pov_at(self.fractional_distance);
        self.last_pov = pov;
        FlightStep::InProgress(pov)
    }

    fn pov_at(&self, t: f64) -> CenteredPov {
        if t >= 1.0 {
            return self.destination;
        }
        if t <= 0.0 {
            return self.start;
        }
        // A path through the look-at point has no forward direction there; hold the last pose.
        self.start
            .lerp(&self.destination, t)
            .unwrap_or(self.last_pov)
    }
}

impl fmt::Debug for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flight")
            .field("start", &self.start)
            .field("destination", &self.destination)
            .field("constants", &self.constants)
            .field("phase", &self.phase)
            .field("speed", &self.speed)
            .field("fractional_distance", &self.fractional_distance)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}
