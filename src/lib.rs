mod calibration;
mod constants;
mod controller;
mod decoder;
mod hardware;
mod telemetry;
mod transport;
mod types;

pub use controller::{normalize_azimuth_move, RotorController};
pub use decoder::ProtocolDecoder;
pub use hardware::{AnalogIo, AnalogRotor, RotorHal, SimulatedIo};
pub use telemetry::{TelemetryEncoder, TelemetryError, TelemetryPayload};
pub use transport::Transport;
pub use types::{Axis, Command, Direction, Position, RotorConfig, RotorState};

// Re-export commonly used items
pub use calibration::AxisCalibration;
pub use constants::{DEFAULT_CONTROL_PORT, LAYOUT_ID_POSITION, MAX_ROTOR_AZIMUTH, MAX_ROTOR_ELEVATION};
