use crate::constants::LAYOUT_ID_POSITION;
use crate::types::{Position, RotorState};
use std::error::Error;
use std::fmt;

/// Fixed binary record of the current rotor position.
///
/// Wire form is 9 bytes: the layout id, then azimuth and elevation as
/// little-endian i32 centidegrees. The layout id leads so a consumer can
/// dispatch on it before touching the rest of the frame.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TelemetryPayload {
    pub layout_id: u8,
    pub azimuth: Position,
    pub elevation: Position,
}

#[derive(Debug)]
pub enum TelemetryError {
    Truncated { expected: usize, actual: usize },
    UnknownLayout(u8),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Truncated { expected, actual } => {
                write!(f, "Truncated payload: expected {} bytes but got {}", expected, actual)
            }
            TelemetryError::UnknownLayout(id) => write!(f, "Unknown telemetry layout id {}", id),
        }
    }
}

impl Error for TelemetryError {}

impl TelemetryPayload {
    pub const WIRE_LEN: usize = 9;

    pub fn to_bytes(&self) -> [u8; Self::WIRE_LEN] {
        let mut frame = [0u8; Self::WIRE_LEN];
        frame[0] = self.layout_id;
        frame[1..5].copy_from_slice(&self.azimuth.to_le_bytes());
        frame[5..9].copy_from_slice(&self.elevation.to_le_bytes());
        frame
    }

    pub fn from_bytes(frame: &[u8]) -> Result<Self, TelemetryError> {
        if frame.len() < Self::WIRE_LEN {
            return Err(TelemetryError::Truncated {
                expected: Self::WIRE_LEN,
                actual: frame.len(),
            });
        }
        if frame[0] != LAYOUT_ID_POSITION {
            return Err(TelemetryError::UnknownLayout(frame[0]));
        }
        Ok(TelemetryPayload {
            layout_id: frame[0],
            azimuth: Position::from_le_bytes(frame[1..5].try_into().unwrap()),
            elevation: Position::from_le_bytes(frame[5..9].try_into().unwrap()),
        })
    }
}

/// Stateless mapping from rotor state to the position payload. Deterministic
/// and idempotent; validation already happened upstream.
pub struct TelemetryEncoder;

impl TelemetryEncoder {
    pub fn produce(state: &RotorState) -> TelemetryPayload {
        TelemetryPayload {
            layout_id: LAYOUT_ID_POSITION,
            azimuth: state.current_azimuth,
            elevation: state.current_elevation,
        }
    }
}
