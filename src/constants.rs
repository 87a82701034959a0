use crate::types::Position;

/// Maximum rotor azimuth in centidegrees (the G-5500 azimuth rotor covers 450 degrees).
pub const MAX_ROTOR_AZIMUTH: Position = 45000;
/// Maximum rotor elevation in centidegrees.
pub const MAX_ROTOR_ELEVATION: Position = 18000;

/// One full circle in centidegrees, used for azimuth wraparound correction.
pub const FULL_CIRCLE: Position = 36000;
/// Half a circle in centidegrees; a normalized azimuth move lies in [-HALF_CIRCLE, HALF_CIRCLE].
pub const HALF_CIRCLE: Position = 18000;

/// Centidegrees per whole degree.
pub const DEGREE_SCALE: Position = 100;

/// Tolerance for az-el match in centidegrees. Take care if you lower this
/// value: wear or dirt on the pots in the rotors, or A/D jitter, may cause
/// hunting if it is too low.
pub const DEFAULT_CLOSE_ENOUGH: Position = 100;

/// Rotor move check interval in milliseconds.
pub const DEFAULT_ROTOR_UPDATE_INTERVAL_MS: u64 = 100;
/// Telemetry emission interval in milliseconds.
pub const DEFAULT_TELEMETRY_INTERVAL_MS: u64 = 500;

/// TCP port the control server listens on.
pub const DEFAULT_CONTROL_PORT: u16 = 23;

/// Layout id identifying the position telemetry payload.
pub const LAYOUT_ID_POSITION: u8 = 1;

// Rotor control lines on the G-5500 control box.
pub const PIN_EL_UP: u8 = 8;
pub const PIN_EL_DOWN: u8 = 9;
pub const PIN_AZ_LEFT: u8 = 10;
pub const PIN_AZ_RIGHT: u8 = 11;

// A/D converter channels carrying the rotor position voltages.
pub const ADC_AZIMUTH_CHANNEL: u8 = 0;
pub const ADC_ELEVATION_CHANNEL: u8 = 1;

/// Highest count a 10-bit A/D converter can report.
pub const ADC_MAX_COUNTS: u16 = 1023;
