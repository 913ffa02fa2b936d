//! Waveform to bit detection
//!
//! Averages each symbol over the shape's detection window and compares
//! against the midpoint threshold. With repetition coding enabled the
//! detected bits are collapsed through the fixed decode table afterwards.

use crate::coding;
use crate::error::{PhyError, PhyResult};
use crate::line_code::{validate_config, LineCode};
use crate::signal::{AmplitudeSignal, BitSignal};

/// Line-coding waveform detector
#[derive(Debug, Clone)]
pub struct Decoder {
    code: LineCode,
    samples_per_symbol: usize,
    amp_min: f64,
    amp_max: f64,
    repetition: bool,
}

impl Decoder {
    /// Create a decoder; the configuration mirrors the encoder's.
    pub fn new(
        code: LineCode,
        samples_per_symbol: usize,
        amp_min: f64,
        amp_max: f64,
        repetition: bool,
    ) -> PhyResult<Self> {
        validate_config(samples_per_symbol, amp_min, amp_max)?;
        Ok(Self {
            code,
            samples_per_symbol,
            amp_min,
            amp_max,
            repetition,
        })
    }

    pub fn line_code(&self) -> LineCode {
        self.code
    }

    pub fn samples_per_symbol(&self) -> usize {
        self.samples_per_symbol
    }

    /// Decode an amplitude waveform into bits.
    ///
    /// Input length must be a non-zero multiple of `samples_per_symbol`;
    /// with repetition coding the detected bit count must additionally be
    /// a multiple of the codeword length.
    pub fn decode(&self, signal: &AmplitudeSignal) -> PhyResult<BitSignal> {
        if signal.is_empty() {
            return Err(PhyError::SizeMismatch(
                "cannot decode an empty waveform".to_string(),
            ));
        }
        if signal.len() % self.samples_per_symbol != 0 {
            return Err(PhyError::SizeMismatch(format!(
                "waveform length {} is not a multiple of samples_per_symbol {}",
                signal.len(),
                self.samples_per_symbol
            )));
        }

        let detected = self.detect(signal);
        if self.repetition {
            coding::collapse(&detected)
        } else {
            Ok(detected)
        }
    }

    /// Threshold each symbol's window average at the amplitude midpoint.
    fn detect(&self, signal: &AmplitudeSignal) -> BitSignal {
        let n = self.samples_per_symbol;
        let window = self.code.detection_window(n);
        let low = self.code.low_reference(self.amp_min);
        let threshold = (low + self.amp_max) / 2.0;

        let mut bits = BitSignal::new();
        for symbol in signal.as_slice().chunks_exact(n) {
            let slice = &symbol[window.clone()];
            let average = slice.iter().sum::<f64>() / slice.len() as f64;
            bits.push(average >= threshold);
        }
        bits
    }
}
