pub mod glyphs;

use alloc::format;
use alloc::string::String;

use log::info;
use smart_leds::{RGB8, SmartLedsWrite};

use crate::sensor::SensorReading;

/// Width of one text row on the character display.
const TEXT_COLUMNS: usize = 16;

/// Why a connection cycle ended without an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    TargetNotFound,
    RetriesExhausted,
    RadioFault,
}

/// State change the station wants reflected on the panel.
///
/// Events are consumed by [`FeedbackController::render`] as they happen and
/// never stored.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedbackEvent {
    Startup,
    Scanning,
    ConnectingAttempt(u8),
    ConnectSuccess(String),
    ConnectFailure(FailureReason),
    SteadyState {
        reading: SensorReading,
        /// Previous cycle's transmit outcome, `None` when nothing was sent
        tx: Option<bool>,
    },
}

/// Character display rows. Implementations swallow their own I/O errors;
/// a write that goes nowhere is fine.
pub trait TextDisplay {
    fn write_line(&mut self, row: u8, text: &str);
    fn clear(&mut self);
}

/// Tone channel. `beep` returns once the tone has finished.
pub trait ToneSounder {
    fn beep(&mut self, freq_hz: u16, duration_ms: u64);
}

/// Stateless translator from station state to the three feedback channels.
///
/// Hardware availability is probed once by the caller; a channel constructed
/// as `None` renders as a no-op forever after.
pub struct FeedbackController<M, D, S> {
    pub(crate) matrix: Option<M>,
    pub(crate) display: Option<D>,
    pub(crate) sounder: Option<S>,
}

impl<M, D, S> FeedbackController<M, D, S>
where
    M: SmartLedsWrite<Color = RGB8>,
    D: TextDisplay,
    S: ToneSounder,
{
    pub fn new(matrix: Option<M>, display: Option<D>, sounder: Option<S>) -> Self {
        if matrix.is_none() {
            info!("indicator matrix unavailable, rendering disabled");
        }
        if display.is_none() {
            info!("text display unavailable, rendering disabled");
        }
        if sounder.is_none() {
            info!("tone channel unavailable, rendering disabled");
        }

        Self {
            matrix,
            display,
            sounder,
        }
    }

    pub fn render(&mut self, event: FeedbackEvent) {
        match event {
            FeedbackEvent::Startup => {
                self.draw_glyph(&glyphs::ARROW, glyphs::GREEN);
                self.draw_glyph(&glyphs::LETTER_E, glyphs::BLUE);
                self.write_line(1, "Init sensors...");
                self.play_melody();
            }
            FeedbackEvent::Scanning => {
                self.write_line(0, "Scanning...");
            }
            FeedbackEvent::ConnectingAttempt(attempt) => {
                if attempt == 1 {
                    self.write_line(0, "Connecting");
                    self.draw_glyph(&glyphs::ARROW, glyphs::BLUE);
                }
                self.write_line(3, &format!("Try {}", attempt));
            }
            FeedbackEvent::ConnectSuccess(address) => {
                self.write_line(0, &format!("IP:{}", address));
                self.write_line(5, "WiFi: OK");
                self.draw_glyph(&glyphs::CHECK, glyphs::GREEN);
            }
            FeedbackEvent::ConnectFailure(reason) => {
                let line = match reason {
                    FailureReason::TargetNotFound => "Net NotFound",
                    FailureReason::RetriesExhausted => "WiFi FAIL",
                    FailureReason::RadioFault => "Radio FAIL",
                };
                self.write_line(0, line);
                self.write_line(5, "WiFi: --");
                self.draw_glyph(&glyphs::X_MARK, glyphs::RED);
            }
            FeedbackEvent::SteadyState { reading, tx } => {
                self.write_line(0, &format!("Lux: {:.1}", reading.illuminance_lux));
                self.write_line(1, &format!("X:{} Y:{}", reading.accel_x, reading.accel_y));
                self.write_line(2, &format!("Z: {}", reading.accel_z));
                match tx {
                    Some(true) => self.write_line(4, "TX: OK"),
                    Some(false) => self.write_line(4, "TX: ERR"),
                    None => {}
                }
            }
        }
    }

    fn draw_glyph(&mut self, glyph: &[u8; glyphs::PIXELS], color: RGB8) {
        if let Some(matrix) = self.matrix.as_mut() {
            let frame = glyph
                .iter()
                .map(|&lit| if lit != 0 { color } else { glyphs::OFF });
            let _ = matrix.write(frame);
        }
    }

    fn write_line(&mut self, row: u8, text: &str) {
        if let Some(display) = self.display.as_mut() {
            let end = text
                .char_indices()
                .nth(TEXT_COLUMNS)
                .map(|(index, _)| index)
                .unwrap_or(text.len());
            display.write_line(row, &text[..end]);
        }
    }

    fn play_melody(&mut self) {
        if let Some(sounder) = self.sounder.as_mut() {
            for (freq_hz, duration_ms) in glyphs::STARTUP_MELODY {
                sounder.beep(freq_hz, duration_ms);
            }
        }
    }
}
