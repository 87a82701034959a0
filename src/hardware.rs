use crate::calibration::AxisCalibration;
use crate::constants::*;
use crate::types::{Direction, Position};

/// Hardware access layer for the rotor.
///
/// The controller only ever talks to this trait, never to pins or converters
/// directly, so the control logic is testable against a substitute
/// implementation. Readings are assumed available and domain-valid; there is
/// no sensor-fault path.
pub trait RotorHal {
    fn read_azimuth(&mut self) -> Position;
    fn read_elevation(&mut self) -> Position;
    fn drive_azimuth(&mut self, direction: Direction);
    fn drive_elevation(&mut self, direction: Direction);
    fn stop_azimuth(&mut self);
    fn stop_elevation(&mut self);
}

/// Raw analog-in / digital-out primitives the rotor interface is built on.
pub trait AnalogIo {
    /// Sample one A/D channel; 10-bit counts (0..=1023).
    fn analog_read(&mut self, channel: u8) -> u16;
    fn digital_write(&mut self, pin: u8, level: bool);
}

/// G-5500 rotor interface over raw analog/digital primitives.
///
/// Position voltages come in on two converter channels and are scaled to
/// centidegrees by per-axis calibration; the four direction relays are plain
/// digital outputs. When changing direction the opposing pin is always
/// released before the requested one is asserted, so both relays of an axis
/// are never energized at once.
pub struct AnalogRotor<IO: AnalogIo> {
    io: IO,
    azimuth_cal: AxisCalibration,
    elevation_cal: AxisCalibration,
}

impl<IO: AnalogIo> AnalogRotor<IO> {
    pub fn new(io: IO) -> Self {
        Self::with_calibration(io, AxisCalibration::AZIMUTH, AxisCalibration::ELEVATION)
    }

    pub fn with_calibration(
        io: IO,
        azimuth_cal: AxisCalibration,
        elevation_cal: AxisCalibration,
    ) -> Self {
        AnalogRotor {
            io,
            azimuth_cal,
            elevation_cal,
        }
    }
}

impl<IO: AnalogIo> RotorHal for AnalogRotor<IO> {
    fn read_azimuth(&mut self) -> Position {
        let counts = self.io.analog_read(ADC_AZIMUTH_CHANNEL);
        self.azimuth_cal
            .position_from_counts(counts)
            .clamp(0, MAX_ROTOR_AZIMUTH)
    }

    fn read_elevation(&mut self) -> Position {
        let counts = self.io.analog_read(ADC_ELEVATION_CHANNEL);
        self.elevation_cal
            .position_from_counts(counts)
            .clamp(0, MAX_ROTOR_ELEVATION)
    }

    fn drive_azimuth(&mut self, direction: Direction) {
        match direction {
            Direction::Positive => {
                self.io.digital_write(PIN_AZ_LEFT, false);
                self.io.digital_write(PIN_AZ_RIGHT, true);
            }
            Direction::Negative => {
                self.io.digital_write(PIN_AZ_RIGHT, false);
                self.io.digital_write(PIN_AZ_LEFT, true);
            }
            Direction::Stop => self.stop_azimuth(),
        }
    }

    fn drive_elevation(&mut self, direction: Direction) {
        match direction {
            Direction::Positive => {
                self.io.digital_write(PIN_EL_DOWN, false);
                self.io.digital_write(PIN_EL_UP, true);
            }
            Direction::Negative => {
                self.io.digital_write(PIN_EL_UP, false);
                self.io.digital_write(PIN_EL_DOWN, true);
            }
            Direction::Stop => self.stop_elevation(),
        }
    }

    fn stop_azimuth(&mut self) {
        self.io.digital_write(PIN_AZ_LEFT, false);
        self.io.digital_write(PIN_AZ_RIGHT, false);
    }

    fn stop_elevation(&mut self) {
        self.io.digital_write(PIN_EL_UP, false);
        self.io.digital_write(PIN_EL_DOWN, false);
    }
}

/// Stand-in [`AnalogIo`] backend for hosts with no converter attached.
///
/// Each sample slews the pot counts a fixed step toward whichever drive pins
/// are asserted, clamped to the converter range, so the server binary is
/// fully demonstrable without a control box on the bench.
pub struct SimulatedIo {
    azimuth_counts: i32,
    elevation_counts: i32,
    pins: [bool; 16],
    counts_per_sample: i32,
}

impl SimulatedIo {
    pub fn new() -> Self {
        SimulatedIo {
            azimuth_counts: 0,
            elevation_counts: 0,
            pins: [false; 16],
            counts_per_sample: 2,
        }
    }

    fn step(&mut self) {
        if self.pins[PIN_AZ_RIGHT as usize] {
            self.azimuth_counts += self.counts_per_sample;
        }
        if self.pins[PIN_AZ_LEFT as usize] {
            self.azimuth_counts -= self.counts_per_sample;
        }
        if self.pins[PIN_EL_UP as usize] {
            self.elevation_counts += self.counts_per_sample;
        }
        if self.pins[PIN_EL_DOWN as usize] {
            self.elevation_counts -= self.counts_per_sample;
        }
        self.azimuth_counts = self.azimuth_counts.clamp(0, ADC_MAX_COUNTS as i32);
        self.elevation_counts = self.elevation_counts.clamp(0, ADC_MAX_COUNTS as i32);
    }
}

impl Default for SimulatedIo {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalogIo for SimulatedIo {
    fn analog_read(&mut self, channel: u8) -> u16 {
        self.step();
        match channel {
            ADC_AZIMUTH_CHANNEL => self.azimuth_counts as u16,
            _ => self.elevation_counts as u16,
        }
    }

    fn digital_write(&mut self, pin: u8, level: bool) {
        self.pins[pin as usize] = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Records every digital write and plays back scripted converter counts.
    #[derive(Clone)]
    struct RecordingIo {
        writes: Arc<Mutex<Vec<(u8, bool)>>>,
        azimuth_counts: u16,
        elevation_counts: u16,
    }

    impl RecordingIo {
        fn new(azimuth_counts: u16, elevation_counts: u16) -> Self {
            RecordingIo {
                writes: Arc::new(Mutex::new(Vec::new())),
                azimuth_counts,
                elevation_counts,
            }
        }
    }

    impl AnalogIo for RecordingIo {
        fn analog_read(&mut self, channel: u8) -> u16 {
            match channel {
                ADC_AZIMUTH_CHANNEL => self.azimuth_counts,
                _ => self.elevation_counts,
            }
        }

        fn digital_write(&mut self, pin: u8, level: bool) {
            self.writes.lock().push((pin, level));
        }
    }

    #[test]
    fn positive_azimuth_drive_releases_left_before_asserting_right() {
        let io = RecordingIo::new(0, 0);
        let writes = io.writes.clone();
        let mut rotor = AnalogRotor::new(io);
        rotor.drive_azimuth(Direction::Positive);
        assert_eq!(
            writes.lock().as_slice(),
            &[(PIN_AZ_LEFT, false), (PIN_AZ_RIGHT, true)]
        );
    }

    #[test]
    fn negative_elevation_drive_releases_up_before_asserting_down() {
        let io = RecordingIo::new(0, 0);
        let writes = io.writes.clone();
        let mut rotor = AnalogRotor::new(io);
        rotor.drive_elevation(Direction::Negative);
        assert_eq!(
            writes.lock().as_slice(),
            &[(PIN_EL_UP, false), (PIN_EL_DOWN, true)]
        );
    }

    #[test]
    fn stop_lowers_both_pins_of_the_axis() {
        let io = RecordingIo::new(0, 0);
        let writes = io.writes.clone();
        let mut rotor = AnalogRotor::new(io);
        rotor.stop_azimuth();
        rotor.stop_elevation();
        assert_eq!(
            writes.lock().as_slice(),
            &[
                (PIN_AZ_LEFT, false),
                (PIN_AZ_RIGHT, false),
                (PIN_EL_UP, false),
                (PIN_EL_DOWN, false),
            ]
        );
    }

    #[test]
    fn drive_stop_is_equivalent_to_stop() {
        let io = RecordingIo::new(0, 0);
        let writes = io.writes.clone();
        let mut rotor = AnalogRotor::new(io);
        rotor.drive_azimuth(Direction::Stop);
        assert_eq!(
            writes.lock().as_slice(),
            &[(PIN_AZ_LEFT, false), (PIN_AZ_RIGHT, false)]
        );
    }

    #[test]
    fn reads_apply_calibration_and_clamp_into_domain() {
        // 232 counts -> 10000 - 325 = 9675 centidegrees on azimuth.
        let mut rotor = AnalogRotor::new(RecordingIo::new(232, 0));
        assert_eq!(rotor.read_azimuth(), 9675);
        // 0 counts converts to -325, which clamps to the domain floor.
        let mut rotor = AnalogRotor::new(RecordingIo::new(0, 0));
        assert_eq!(rotor.read_azimuth(), 0);
    }

    #[test]
    fn simulated_pot_follows_the_drive_pins() {
        let mut io = SimulatedIo::new();
        io.digital_write(PIN_AZ_RIGHT, true);
        let first = io.analog_read(ADC_AZIMUTH_CHANNEL);
        let second = io.analog_read(ADC_AZIMUTH_CHANNEL);
        assert!(second > first);

        io.digital_write(PIN_AZ_RIGHT, false);
        let held = io.analog_read(ADC_AZIMUTH_CHANNEL);
        assert_eq!(held, second);
    }

    #[test]
    fn simulated_pot_never_leaves_the_converter_range() {
        let mut io = SimulatedIo::new();
        io.digital_write(PIN_EL_DOWN, true);
        for _ in 0..10 {
            assert_eq!(io.analog_read(ADC_ELEVATION_CHANNEL), 0);
        }
    }
}
