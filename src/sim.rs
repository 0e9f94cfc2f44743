//! Scripted scenarios for driving a controller without a renderer.

use std::cell::Cell;
use std::f64::consts::FRAC_PI_2;
use std::rc::Rc;

use clap::ValueEnum;
use serde::Serialize;

use crate::controller::PovController;
use crate::flight::{FlightCallback, FlightPhase};
use crate::pov::CenteredPov;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// Fly to the default pose pulled back to twice its distance
    Fly,
    /// Hover one unit above the point under the camera's up direction
    Hover,
    /// Continuous orbit around the center
    Orbit,
    /// Drag, then pinch, then rotate
    Gestures,
}

/// One simulated frame, as printed by `pov-sim --json`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameRecord {
    pub frame: usize,
    pub timestamp: f64,
    pub pov: CenteredPov,
    pub phase: Option<FlightPhase>,
}

pub struct Simulation {
    controller: PovController,
    scenario: Scenario,
    frames: usize,
    arrived: Rc<Cell<bool>>,
}

impl Simulation {
    pub fn new(controller: PovController, scenario: Scenario, frames: usize) -> Self {
        Self {
            controller,
            scenario,
            frames: frames.max(1),
            arrived: Rc::new(Cell::new(false)),
        }
    }

    pub fn controller(&self) -> &PovController {
        &self.controller
    }

    /// True once a scenario flight has invoked its completion callback.
    pub fn arrived(&self) -> bool {
        self.arrived.get()
    }

    pub fn step(&mut self, frame: usize, timestamp: f64) -> FrameRecord {
        if frame == 0 {
            self.begin();
        }
        if self.scenario == Scenario::Gestures {
            self.gesture_input(frame);
        }
        self.controller.update(timestamp);
        FrameRecord {
            frame,
            timestamp,
            pov: *self.controller.current_pov(),
            phase: self.controller.flight_phase(),
        }
    }

    fn begin(&mut self) {
        let pov = *self.controller.current_pov();
        let arrived = Rc::clone(&self.arrived);
        let on_arrival: FlightCallback = Box::new(move || arrived.set(true));
        match self.scenario {
            Scenario::Fly => {
                let location = pov.center() + (pov.location() - pov.center()) * 2.0;
                match pov.with_location(location) {
                    Ok(destination) => self.controller.fly_to(destination, Some(on_arrival)),
                    Err(err) => log::warn!("fly scenario has no destination: {err}"),
                }
            }
            Scenario::Hover => {
                let point = pov.center() + pov.up() * pov.distance();
                self.controller.hover_over(point, 1.0, Some(on_arrival));
            }
            Scenario::Orbit => self.controller.set_orbit_enabled(true),
            Scenario::Gestures => {}
        }
    }

    fn gesture_input(&mut self, frame: usize) {
        let third = (self.frames / 3).max(1);
        let segment = frame / third;
        let progress = (frame % third) as f64 / third as f64;
        let starts_segment = frame % third == 0;

        match segment {
            0 => {
                if starts_segment {
                    self.controller.drag_began();
                }
                self.controller.drag_changed(0.5 * progress, 0.2 * progress);
            }
            1 => {
                if starts_segment {
                    self.controller.drag_ended();
                    self.controller.pinch_began();
                }
                self.controller.pinch_changed(1.0 + progress);
            }
            2 => {
                if starts_segment {
                    self.controller.pinch_ended();
                    self.controller.rotation_began();
                }
                self.controller.rotation_changed(FRAC_PI_2 * progress);
            }
            _ => self.controller.rotation_ended(),
        }
    }
}
