use strum_macros::{Display, EnumIter};

/// Rotor position in centidegrees (degrees * 100). Integer math is used
/// throughout so repeated updates never accumulate floating-point drift.
pub type Position = i32;

/// The two rotor axes.
#[derive(Debug, Display, EnumIter, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Axis {
    Azimuth,
    Elevation,
}

/// Motor polarity for one axis. Positive is Right on azimuth and Up on
/// elevation; Negative is Left/Down.
#[derive(Debug, Display, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Positive,
    Negative,
    Stop,
}

/// A fully validated positioning command. Currently only `MoveTo` exists;
/// further command kinds become new variants matched exhaustively by the
/// controller.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    MoveTo {
        azimuth: Position,
        elevation: Position,
    },
}

/// Everything the rotor controller knows about where the rotor is and where
/// it is going. The active flags are the sole authority for whether a drive
/// output may be asserted on an axis.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RotorState {
    pub current_azimuth: Position,
    pub current_elevation: Position,
    pub target_azimuth: Position,
    pub target_elevation: Position,
    pub azimuth_active: bool,
    pub elevation_active: bool,
}

/// Tunables supplied to the decoder and controller at construction.
#[derive(Debug, Clone, Copy)]
pub struct RotorConfig {
    pub max_azimuth: Position,
    pub max_elevation: Position,
    /// Tolerance band in centidegrees below which an axis is on target.
    pub close_enough: Position,
    pub update_interval: std::time::Duration,
    pub telemetry_interval: std::time::Duration,
}

impl Default for RotorConfig {
    fn default() -> Self {
        use crate::constants::*;
        RotorConfig {
            max_azimuth: MAX_ROTOR_AZIMUTH,
            max_elevation: MAX_ROTOR_ELEVATION,
            close_enough: DEFAULT_CLOSE_ENOUGH,
            update_interval: std::time::Duration::from_millis(DEFAULT_ROTOR_UPDATE_INTERVAL_MS),
            telemetry_interval: std::time::Duration::from_millis(DEFAULT_TELEMETRY_INTERVAL_MS),
        }
    }
}
