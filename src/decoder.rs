use crate::constants::DEGREE_SCALE;
use crate::types::{Command, Position, RotorConfig};

/// Where the decoder is inside a GS-232 "W" positioning sequence.
///
/// The index counts digits already consumed on the axis (0..3). The decoder
/// returns to `Idle` after all six digits, on any non-digit mid-sequence, or
/// when an accumulated value fails domain validation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum DecoderState {
    Idle,
    ReceivingAzimuth(u8),
    ReceivingElevation(u8),
}

/// Incremental parser for the GS-232 style "W<aaa><eee>" positioning command.
///
/// Feed it one byte at a time; it emits a fully validated [`Command`] once a
/// complete sequence has been seen, and silently discards anything malformed.
/// Purely a parser over the byte stream: no side effects, restartable from
/// `Idle` at any time.
pub struct ProtocolDecoder {
    state: DecoderState,
    /// Accumulated azimuth in whole degrees.
    azimuth_acc: Position,
    /// Accumulated elevation in whole degrees.
    elevation_acc: Position,
    config: RotorConfig,
}

impl ProtocolDecoder {
    pub fn new(config: RotorConfig) -> Self {
        ProtocolDecoder {
            state: DecoderState::Idle,
            azimuth_acc: 0,
            elevation_acc: 0,
            config,
        }
    }

    /// Consume one byte from the transport. Returns a command only when this
    /// byte completes a valid sequence.
    pub fn feed(&mut self, byte: u8) -> Option<Command> {
        match byte {
            // Trigger byte starts a sequence; mid-sequence it restarts one.
            b'W' | b'w' => {
                self.state = DecoderState::ReceivingAzimuth(0);
                self.azimuth_acc = 0;
                self.elevation_acc = 0;
                None
            }
            b'0'..=b'9' => self.feed_digit((byte - b'0') as Position),
            _ => {
                // Outside a sequence everything else is ignored; inside one,
                // a stray byte abandons the sequence.
                self.reset();
                None
            }
        }
    }

    fn feed_digit(&mut self, digit: Position) -> Option<Command> {
        match self.state {
            // Digits with no sequence in progress are ignored.
            DecoderState::Idle => None,

            DecoderState::ReceivingAzimuth(index) => {
                self.azimuth_acc += digit * Self::positional_weight(index);
                if index < 2 {
                    self.state = DecoderState::ReceivingAzimuth(index + 1);
                } else if self.azimuth_acc * DEGREE_SCALE > self.config.max_azimuth {
                    self.reset();
                } else {
                    self.state = DecoderState::ReceivingElevation(0);
                }
                None
            }

            DecoderState::ReceivingElevation(index) => {
                self.elevation_acc += digit * Self::positional_weight(index);
                if index < 2 {
                    self.state = DecoderState::ReceivingElevation(index + 1);
                    return None;
                }
                let command =
                    if self.elevation_acc * DEGREE_SCALE > self.config.max_elevation {
                        None
                    } else {
                        Some(Command::MoveTo {
                            azimuth: self.azimuth_acc * DEGREE_SCALE,
                            elevation: self.elevation_acc * DEGREE_SCALE,
                        })
                    };
                self.reset();
                command
            }
        }
    }

    /// Hundreds, tens, units of whole degrees.
    fn positional_weight(index: u8) -> Position {
        match index {
            0 => 100,
            1 => 10,
            _ => 1,
        }
    }

    fn reset(&mut self) {
        self.state = DecoderState::Idle;
        self.azimuth_acc = 0;
        self.elevation_acc = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(decoder: &mut ProtocolDecoder, bytes: &[u8]) -> Vec<Command> {
        bytes.iter().filter_map(|&b| decoder.feed(b)).collect()
    }

    #[test]
    fn well_formed_sequence_emits_one_command() {
        let mut decoder = ProtocolDecoder::new(RotorConfig::default());
        let commands = feed_all(&mut decoder, b"W180090");
        assert_eq!(
            commands,
            vec![Command::MoveTo {
                azimuth: 18000,
                elevation: 9000
            }]
        );
        assert_eq!(decoder.state, DecoderState::Idle);
    }

    #[test]
    fn lowercase_trigger_is_accepted() {
        let mut decoder = ProtocolDecoder::new(RotorConfig::default());
        let commands = feed_all(&mut decoder, b"w001002");
        assert_eq!(
            commands,
            vec![Command::MoveTo {
                azimuth: 100,
                elevation: 200
            }]
        );
    }

    #[test]
    fn maximum_values_are_still_valid() {
        let mut decoder = ProtocolDecoder::new(RotorConfig::default());
        let commands = feed_all(&mut decoder, b"W450180");
        assert_eq!(
            commands,
            vec![Command::MoveTo {
                azimuth: 45000,
                elevation: 18000
            }]
        );
    }

    #[test]
    fn azimuth_over_max_aborts_without_reusing_elevation_digits() {
        let mut decoder = ProtocolDecoder::new(RotorConfig::default());
        // 451 degrees exceeds the 450 degree limit; the trailing digits must
        // not be picked up as the start of anything.
        let commands = feed_all(&mut decoder, b"W451000090");
        assert!(commands.is_empty());
        assert_eq!(decoder.state, DecoderState::Idle);
    }

    #[test]
    fn elevation_over_max_aborts() {
        let mut decoder = ProtocolDecoder::new(RotorConfig::default());
        let commands = feed_all(&mut decoder, b"W000181");
        assert!(commands.is_empty());
        assert_eq!(decoder.state, DecoderState::Idle);
    }

    #[test]
    fn non_digit_mid_sequence_abandons_it() {
        let mut decoder = ProtocolDecoder::new(RotorConfig::default());
        assert!(feed_all(&mut decoder, b"W18x090").is_empty());
        // The decoder must be restartable after the abort.
        let commands = feed_all(&mut decoder, b"W180090");
        assert_eq!(commands.len(), 1);
    }

    #[test]
    fn bytes_outside_a_sequence_are_ignored() {
        let mut decoder = ProtocolDecoder::new(RotorConfig::default());
        let commands = feed_all(&mut decoder, b"  7C\r\nW090045\r\n");
        assert_eq!(
            commands,
            vec![Command::MoveTo {
                azimuth: 9000,
                elevation: 4500
            }]
        );
    }

    #[test]
    fn trigger_mid_sequence_restarts_accumulation() {
        let mut decoder = ProtocolDecoder::new(RotorConfig::default());
        let commands = feed_all(&mut decoder, b"W12W180090");
        assert_eq!(
            commands,
            vec![Command::MoveTo {
                azimuth: 18000,
                elevation: 9000
            }]
        );
    }

    #[test]
    fn back_to_back_sequences_each_emit() {
        let mut decoder = ProtocolDecoder::new(RotorConfig::default());
        let commands = feed_all(&mut decoder, b"W010020W030040");
        assert_eq!(commands.len(), 2);
        assert_eq!(
            commands[1],
            Command::MoveTo {
                azimuth: 3000,
                elevation: 4000
            }
        );
    }
}
