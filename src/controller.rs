//! The POV controller: single writer of the current pose.
//!
//! Each frame the host calls [`PovController::update`]. An in-progress flight
//! supplies the pose; otherwise the optional orbit motion rotates the camera
//! around its center. Gesture callbacks arrive between frames and mutate the
//! pose directly. Everything runs on the host's render thread.

use std::fmt;

use glam::{DMat4, DVec3};

use crate::config::ControllerSettings;
use crate::flight::{
    Flight, FlightCallback, FlightConstants, FlightError, FlightPhase, FlightStep,
};
use crate::gestures::{ActiveGesture, GestureKind, RadialMove, Roll, Sensitivity, Turn};
use crate::math::{rotate_about_point, Spherical};
use crate::pov::CenteredPov;
use crate::traits::{CameraController, PovObserver};

pub struct PovController {
    current: CenteredPov,
    default: CenteredPov,
    marked: Option<CenteredPov>,
    orbit_enabled: bool,
    orbit_speed: f64,
    frozen: bool,
    last_update: Option<f64>,
    flight: Option<Flight>,
    flight_constants: FlightConstants,
    gesture: ActiveGesture,
    sensitivity: Sensitivity,
    observer: Option<Box<dyn PovObserver>>,
}

impl PovController {
    /// Controller starting at `default_pov` with default settings otherwise.
    pub fn new(default_pov: CenteredPov) -> Self {
        let settings = ControllerSettings {
            default_pov,
            ..ControllerSettings::default()
        };
        Self::from_parts(&settings)
    }

    pub fn with_settings(settings: &ControllerSettings) -> Result<Self, FlightError> {
        settings.flight.validate()?;
        Ok(Self::from_parts(settings))
    }

    fn from_parts(settings: &ControllerSettings) -> Self {
        Self {
            current: settings.default_pov,
            default: settings.default_pov,
            marked: None,
            orbit_enabled: settings.orbit_enabled,
            orbit_speed: settings.orbit_speed,
            frozen: false,
            last_update: None,
            flight: None,
            flight_constants: settings.flight,
            gesture: ActiveGesture::None,
            sensitivity: settings.sensitivity,
            observer: None,
        }
    }

    pub fn set_observer(&mut self, observer: Box<dyn PovObserver>) {
        self.observer = Some(observer);
    }

    pub fn current_pov(&self) -> &CenteredPov {
        &self.current
    }

    pub fn default_pov(&self) -> &CenteredPov {
        &self.default
    }

    pub fn set_default_pov(&mut self, pov: CenteredPov) {
        self.default = pov;
    }

    pub fn marked_pov(&self) -> Option<&CenteredPov> {
        self.marked.as_ref()
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// While frozen no entry point changes the pose and flights are paused.
    pub fn set_frozen(&mut self, frozen: bool) {
        self.frozen = frozen;
    }

    pub fn orbit_enabled(&self) -> bool {
        self.orbit_enabled
    }

    pub fn set_orbit_enabled(&mut self, enabled: bool) {
        self.orbit_enabled = enabled;
    }

    pub fn orbit_speed(&self) -> f64 {
        self.orbit_speed
    }

    pub fn set_orbit_speed(&mut self, radians_per_second: f64) {
        self.orbit_speed = radians_per_second;
    }

    pub fn is_flying(&self) -> bool {
        self.flight.is_some()
    }

    pub fn flight_phase(&self) -> Option<FlightPhase> {
        self.flight.as_ref().map(Flight::phase)
    }

    pub fn active_gesture_kind(&self) -> Option<GestureKind> {
        self.gesture.kind()
    }

    pub fn view_matrix(&self) -> DMat4 {
        self.current.view_matrix()
    }

    pub fn mark_pov(&mut self) {
        self.marked = Some(self.current);
    }

    pub fn unset_mark(&mut self) {
        self.marked = None;
    }

    pub fn jump_to_default(&mut self) {
        self.jump_to(self.default);
    }

    pub fn jump_to_mark(&mut self) {
        if let Some(marked) = self.marked {
            self.jump_to(marked);
        }
    }

    pub fn jump_to(&mut self, pov: CenteredPov) {
        if self.frozen {
            log::debug!("ignoring jump while frozen");
            return;
        }
        self.set_current(pov);
    }

    /// Starts a flight to `destination`. Ignored while frozen or while another
    /// flight is in progress. A started flight ends any active gesture; its
    /// clock starts at the next frame.
    pub fn fly_to(&mut self, destination: CenteredPov, callback: Option<FlightCallback>) {
        if self.frozen {
            log::debug!("ignoring flight request while frozen");
            return;
        }
        if self.flight.is_some() {
            log::debug!("ignoring flight request while already flying");
            return;
        }
        match Flight::new(self.current, destination, self.flight_constants, None, callback) {
            Ok(flight) => {
                if self.gesture.is_active() {
                    log::debug!("flight ends active {:?} gesture", self.gesture.kind());
                    self.gesture = ActiveGesture::None;
                }
                log::debug!(
                    "flight started from {:?} to {:?}",
                    self.current.location(),
                    destination.location()
                );
                self.flight = Some(flight);
            }
            Err(err) => log::warn!("cannot start flight: {err}"),
        }
    }

    /// Flies to a pose with the same location and up but aimed at `point`.
    pub fn center_on(&mut self, point: DVec3, callback: Option<FlightCallback>) {
        match self.current.with_center(point) {
            Ok(destination) => self.fly_to(destination, callback),
            Err(err) => log::debug!("cannot center on {point:?}: {err}"),
        }
    }

    /// Stops orbiting and flies to a point `distance` beyond `point`, radially
    /// outward from the current center, keeping center and up.
    pub fn hover_over(&mut self, point: DVec3, distance: f64, callback: Option<FlightCallback>) {
        self.orbit_enabled = false;

        let center = self.current.center();
        let mut offset = Spherical::from_cartesian(point - center);
        offset.r += distance;
        let location = center + offset.to_cartesian();

        match CenteredPov::with_any_up(location, center, self.current.up()) {
            Ok(destination) => self.fly_to(destination, callback),
            Err(err) => log::debug!("cannot hover over {point:?}: {err}"),
        }
    }

    pub fn drag_began(&mut self) {
        if self.gesture_blocked() {
            return;
        }
        self.gesture = ActiveGesture::Turn(Turn::new(
            self.current,
            self.sensitivity.pan,
            self.sensitivity.scroll,
        ));
    }

    /// `pan` and `scroll` are cumulative fractions of the view size.
    pub fn drag_changed(&mut self, pan: f64, scroll: f64) {
        if self.frozen {
            return;
        }
        if let ActiveGesture::Turn(turn) = &self.gesture {
            let next = turn.changed(pan, scroll);
            self.apply_gesture(next);
        }
    }

    pub fn drag_ended(&mut self) {
        if matches!(self.gesture, ActiveGesture::Turn(_)) {
            self.gesture = ActiveGesture::None;
        }
    }

    pub fn pinch_began(&mut self) {
        if self.gesture_blocked() {
            return;
        }
        self.gesture =
            ActiveGesture::RadialMove(RadialMove::new(self.current, self.sensitivity.pinch));
    }

    /// `scale` is the cumulative pinch magnification; 1 means unchanged.
    pub fn pinch_changed(&mut self, scale: f64) {
        if self.frozen {
            return;
        }
        if let ActiveGesture::RadialMove(radial) = &self.gesture {
            let next = radial.changed(&self.current, scale);
            self.apply_gesture(next);
        }
    }

    pub fn pinch_ended(&mut self) {
        if matches!(self.gesture, ActiveGesture::RadialMove(_)) {
            self.gesture = ActiveGesture::None;
        }
    }

    pub fn rotation_began(&mut self) {
        if self.gesture_blocked() {
            return;
        }
        self.gesture = ActiveGesture::Roll(Roll::new(self.current, self.sensitivity.rotation));
    }

    /// `radians` is the cumulative rotation, counterclockwise positive.
    pub fn rotation_changed(&mut self, radians: f64) {
        if self.frozen {
            return;
        }
        if let ActiveGesture::Roll(roll) = &self.gesture {
            let next = roll.changed(&self.current, radians);
            self.apply_gesture(next);
        }
    }

    pub fn rotation_ended(&mut self) {
        if matches!(self.gesture, ActiveGesture::Roll(_)) {
            self.gesture = ActiveGesture::None;
        }
    }

    /// Per-frame tick. `timestamp` is monotonic wall-clock time in seconds.
    pub fn update(&mut self, timestamp: f64) {
        let dt = self.last_update.map(|last| (timestamp - last).max(0.0));
        self.last_update = Some(timestamp);

        if self.frozen {
            if let Some(flight) = self.flight.as_mut() {
                flight.hold(timestamp);
            }
            return;
        }

        if let Some(flight) = self.flight.as_mut() {
            match flight.update(timestamp) {
                FlightStep::InProgress(pov) => {
                    self.set_current(pov);
                    return;
                }
                FlightStep::Finished => {
                    log::debug!("flight arrived at {:?}", self.current.location());
                    self.flight = None;
                }
            }
        }

        if let Some(dt) = dt {
            self.orbit(dt);
        }
    }

    fn orbit(&mut self, dt: f64) {
        if !self.orbit_enabled || dt <= 0.0 || self.orbit_speed == 0.0 {
            return;
        }
        let angle = -self.orbit_speed * dt;
        let rotated = rotate_about_point(
            self.current.location(),
            self.current.center(),
            self.current.up(),
            angle,
        )
        .and_then(|location| self.current.with_location(location).ok());
        if let Some(pov) = rotated {
            self.set_current(pov);
        }
    }

    fn gesture_blocked(&self) -> bool {
        if self.frozen {
            log::debug!("ignoring gesture while frozen");
            return true;
        }
        if self.flight.is_some() {
            log::debug!("ignoring gesture while flying");
            return true;
        }
        false
    }

    fn apply_gesture(&mut self, next: Option<CenteredPov>) {
        match next {
            Some(pov) => self.set_current(pov),
            None => log::debug!("degenerate gesture input, pose unchanged"),
        }
    }

    fn set_current(&mut self, pov: CenteredPov) {
        self.current = pov;
        if let Some(observer) = self.observer.as_mut() {
            observer.pov_changed(&self.current);
        }
    }
}

impl Default for PovController {
    fn default() -> Self {
        Self::new(CenteredPov::default())
    }
}

impl CameraController for PovController {
    fn update(&mut self, timestamp: f64) {
        PovController::update(self, timestamp);
    }

    fn view_matrix(&self) -> [[f32; 4]; 4] {
        PovController::view_matrix(self).as_mat4().to_cols_array_2d()
    }

    fn position(&self) -> [f32; 3] {
        self.current.location().as_vec3().to_array()
    }

    fn forward(&self) -> [f32; 3] {
        self.current.forward().as_vec3().to_array()
    }

    fn up(&self) -> [f32; 3] {
        self.current.up().as_vec3().to_array()
    }
}

impl fmt::Debug for PovController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PovController")
            .field("current", &self.current)
            .field("default", &self.default)
            .field("marked", &self.marked)
            .field("orbit_enabled", &self.orbit_enabled)
            .field("orbit_speed", &self.orbit_speed)
            .field("frozen", &self.frozen)
            .field("last_update", &self.last_update)
            .field("flight", &self.flight)
            .field("gesture", &self.gesture)
            .finish_non_exhaustive()
    }
}
