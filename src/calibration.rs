use crate::types::Position;

/// Per-axis conversion from raw A/D counts to centidegrees.
///
/// The 10-bit converters report 0..=1023; full scale corresponds to 450
/// degrees on azimuth and 180 degrees on elevation. Integer math is used, so
/// the scale value is the counts-per-degree ratio multiplied by 100:
/// `100 * (1023 / 450)` for azimuth and `100 * (1023 / 180)` for elevation.
/// The zero offset trims out pot misalignment after the control box has been
/// adjusted per its manual; the settings interact a bit, so expect to go back
/// and forth a few times when dialing them in.
#[derive(Debug, Clone, Copy)]
pub struct AxisCalibration {
    pub scale_factor: i64,
    pub zero_offset: i64,
}

impl AxisCalibration {
    pub const AZIMUTH: AxisCalibration = AxisCalibration {
        scale_factor: 232,
        zero_offset: 325,
    };

    pub const ELEVATION: AxisCalibration = AxisCalibration {
        scale_factor: 568,
        zero_offset: 0,
    };

    /// Convert a raw converter reading into a centidegree position.
    pub fn position_from_counts(&self, counts: u16) -> Position {
        ((counts as i64 * 10_000) / self.scale_factor - self.zero_offset) as Position
    }
}

#[cfg(test)]
mod tests {
    use super::AxisCalibration;

    #[test]
    fn azimuth_counts_convert_with_zero_offset_applied() {
        // 232 counts * 10000 / 232 = 10000, minus the 325 count trim.
        assert_eq!(AxisCalibration::AZIMUTH.position_from_counts(232), 9675);
    }

    #[test]
    fn elevation_full_scale_is_about_180_degrees() {
        let pos = AxisCalibration::ELEVATION.position_from_counts(1023);
        assert!((17900..=18100).contains(&pos), "got {pos}");
    }

    #[test]
    fn zero_counts_with_offset_goes_negative() {
        // The hardware layer clamps; the raw conversion itself does not.
        assert_eq!(AxisCalibration::AZIMUTH.position_from_counts(0), -325);
    }
}
