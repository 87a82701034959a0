use crate::constants::{FULL_CIRCLE, HALF_CIRCLE};
use crate::hardware::RotorHal;
use crate::types::{Command, Direction, Position, RotorConfig, RotorState};

/// Start/stop positioning controller for a two-axis rotor.
///
/// Owns the rotor state and the hardware access layer. Commands overwrite the
/// targets; a periodic [`rotate`](RotorController::rotate) call samples the
/// feedback pots and asserts or clears the directional drive lines. Motion is
/// strictly bang-bang: an axis drives at full speed until its error falls
/// inside the `close_enough` band, then stops.
pub struct RotorController<H: RotorHal> {
    hal: H,
    config: RotorConfig,
    state: RotorState,
}

impl<H: RotorHal> RotorController<H> {
    /// Reads the initial position and parks the rotor: target equals current,
    /// every drive line deasserted.
    pub fn new(mut hal: H, config: RotorConfig) -> Self {
        let azimuth = hal.read_azimuth();
        let elevation = hal.read_elevation();
        let mut controller = RotorController {
            hal,
            config,
            state: RotorState {
                current_azimuth: azimuth,
                current_elevation: elevation,
                target_azimuth: azimuth,
                target_elevation: elevation,
                azimuth_active: false,
                elevation_active: false,
            },
        };
        controller.all_stop();
        controller
    }

    pub fn state(&self) -> &RotorState {
        &self.state
    }

    /// Apply a decoded command. The decoder has already validated the values,
    /// so targets are overwritten unconditionally; both axes become motion
    /// candidates and actual drive assertion is decided on the next rotate.
    pub fn accept_command(&mut self, command: Command) {
        match command {
            Command::MoveTo { azimuth, elevation } => {
                self.state.target_azimuth = azimuth;
                self.state.target_elevation = elevation;
                self.state.azimuth_active = true;
                self.state.elevation_active = true;
            }
        }
    }

    /// One feedback cycle, called on the rotor update interval. Each axis is
    /// handled independently.
    pub fn rotate(&mut self) {
        self.rotate_azimuth();
        self.rotate_elevation();
    }

    fn rotate_azimuth(&mut self) {
        self.state.current_azimuth = self.hal.read_azimuth();
        let diff = normalize_azimuth_move(self.state.target_azimuth - self.state.current_azimuth);
        if diff.abs() > self.config.close_enough && self.state.azimuth_active {
            self.hal.drive_azimuth(sign_direction(diff));
        } else {
            self.hal.stop_azimuth();
            self.state.azimuth_active = false;
        }
    }

    fn rotate_elevation(&mut self) {
        self.state.current_elevation = self.hal.read_elevation();
        let diff = self.state.target_elevation - self.state.current_elevation;
        if diff.abs() > self.config.close_enough && self.state.elevation_active {
            self.hal.drive_elevation(sign_direction(diff));
        } else {
            self.hal.stop_elevation();
            self.state.elevation_active = false;
        }
    }

    /// Deassert all four drive lines and clear both active flags, regardless
    /// of where the targets are. Safe to call at any time.
    pub fn all_stop(&mut self) {
        self.hal.stop_azimuth();
        self.hal.stop_elevation();
        self.state.azimuth_active = false;
        self.state.elevation_active = false;
    }
}

fn sign_direction(diff: Position) -> Direction {
    if diff > 0 {
        Direction::Positive
    } else {
        Direction::Negative
    }
}

/// Fold an azimuth move into the canonical half-circle range.
///
/// The azimuth pot covers 450 degrees, so headings in the 0..90 degree
/// overlap zone are reachable at two pot positions and the raw difference can
/// be up to +-45000. Subtracting or adding a full circle picks the
/// heading-equivalent shorter move and keeps the result within
/// [-18000, 18000] for every possible input.
pub fn normalize_azimuth_move(diff: Position) -> Position {
    if diff > HALF_CIRCLE {
        diff - FULL_CIRCLE
    } else if diff < -HALF_CIRCLE {
        diff + FULL_CIRCLE
    } else {
        diff
    }
}
