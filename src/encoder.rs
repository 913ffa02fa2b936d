//! Bit to waveform encoding
//!
//! Expands each bit (optionally repetition-coded first) into
//! `samples_per_symbol` amplitude samples according to the configured line
//! code. NRZT shapes its transition ramps from the neighboring bits;
//! boundary symbols have no neighbor and anchor their ramp at zero instead.

use crate::coding;
use crate::error::{PhyError, PhyResult};
use crate::line_code::{validate_config, LineCode};
use crate::signal::{AmplitudeSignal, BitSignal};

/// Line-coding waveform synthesizer
#[derive(Debug, Clone)]
pub struct Encoder {
    code: LineCode,
    samples_per_symbol: usize,
    amp_min: f64,
    amp_max: f64,
    repetition: bool,
}

impl Encoder {
    /// Create an encoder.
    ///
    /// # Arguments
    /// * `code` - waveform shape (NRZ, RZ or NRZT)
    /// * `samples_per_symbol` - oversampling factor, positive multiple of 3
    /// * `amp_min`, `amp_max` - amplitude range, `amp_min <= amp_max`
    /// * `repetition` - expand each bit through the rate-1/3 code first
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

    pub fn amplitude(&self) -> (f64, f64) {
        (self.amp_min, self.amp_max)
    }

    pub fn repetition(&self) -> bool {
        self.repetition
    }

    /// Encode a bit sequence into an amplitude waveform.
    ///
    /// Output length is `bit_count * samples_per_symbol`, where the bit
    /// count is tripled first when repetition coding is enabled.
    pub fn encode(&self, bits: &BitSignal) -> PhyResult<AmplitudeSignal> {
        if bits.is_empty() {
            return Err(PhyError::InvalidInput("cannot encode an empty bit sequence"));
        }

        let coded;
        let symbols = if self.repetition {
            coded = coding::expand(bits);
            coded.as_slice()
        } else {
            bits.as_slice()
        };

        let mut out = AmplitudeSignal::with_capacity(symbols.len() * self.samples_per_symbol);
        for (i, &bit) in symbols.iter().enumerate() {
            let prev = if i > 0 { Some(symbols[i - 1]) } else { None };
            let next = symbols.get(i + 1).copied();
            match self.code {
                LineCode::Nrz => self.shape_nrz(bit, &mut out),
                LineCode::Rz => self.shape_rz(bit, &mut out),
                LineCode::Nrzt => self.shape_nrzt(bit, prev, next, &mut out),
            }
        }
        Ok(out)
    }

    fn level(&self, bit: bool) -> f64 {
        if bit {
            self.amp_max
        } else {
            self.amp_min
        }
    }

    fn shape_nrz(&self, bit: bool, out: &mut AmplitudeSignal) {
        let level = self.level(bit);
        for _ in 0..self.samples_per_symbol {
            out.push(level);
        }
    }

    fn shape_rz(&self, bit: bool, out: &mut AmplitudeSignal) {
        let third = self.samples_per_symbol / 3;
        let pulse = if bit { self.amp_max } else { 0.0 };
        for _ in 0..third {
            out.push(0.0);
        }
        for _ in 0..third {
            out.push(pulse);
        }
        for _ in 2 * third..self.samples_per_symbol {
            out.push(0.0);
        }
    }

    fn shape_nrzt(
        &self,
        bit: bool,
        prev: Option<bool>,
        next: Option<bool>,
        out: &mut AmplitudeSignal,
    ) {
        let third = self.samples_per_symbol / 3;
        let cur = self.level(bit);

        // Leading ramp: continues from the midpoint shared with the
        // previous symbol, or rises from zero at the sequence edge.
        for i in 0..third {
            let sample = match prev {
                None => cur * (i as f64 / third as f64),
                Some(p) => {
                    let p = self.level(p);
                    let x = (i as f64 / third as f64) / 2.0 + 0.5;
                    p - (p - cur) * x
                }
            };
            out.push(sample);
        }

        // Flat middle third carries the bit level.
        for _ in 0..third {
            out.push(cur);
        }

        // Trailing ramp: heads for the midpoint shared with the next
        // symbol, or falls to zero at the sequence edge.
        for j in 0..self.samples_per_symbol - 2 * third {
            let sample = match next {
                None => cur - cur * (j as f64 / third as f64),
                Some(nx) => {
                    let nx = self.level(nx);
                    let x = (j as f64 / third as f64) / 2.0;
                    cur - (cur - nx) * x
                }
            };
            out.push(sample);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder(code: LineCode, sps: usize) -> Encoder {
        Encoder::new(code, sps, 0.0, 1.0, false).unwrap()
    }

    #[test]
    fn test_rejects_invalid_configuration() {
        assert!(Encoder::new(LineCode::Nrz, 0, 0.0, 1.0, false).is_err());
        assert!(Encoder::new(LineCode::Nrz, 10, 0.0, 1.0, false).is_err());
        assert!(Encoder::new(LineCode::Nrz, 30, 1.0, 0.0, false).is_err());
    }

    #[test]
    fn test_rejects_empty_input() {
        let enc = encoder(LineCode::Nrz, 30);
        assert!(matches!(
            enc.encode(&BitSignal::new()),
            Err(PhyError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_output_length() {
        let enc = encoder(LineCode::Nrz, 30);
        let bits = BitSignal::from_bits(&[true, false, true, true]);
        assert_eq!(enc.encode(&bits).unwrap().len(), 4 * 30);
    }

    #[test]
    fn test_nrz_waveform() {
        let enc = Encoder::new(LineCode::Nrz, 3, -1.0, 1.0, false).unwrap();
        let bits = BitSignal::from_bits(&[true, false]);
        let wave = enc.encode(&bits).unwrap();
        assert_eq!(wave.as_slice(), &[1.0, 1.0, 1.0, -1.0, -1.0, -1.0]);
    }

    #[test]
    fn test_rz_waveform() {
        let enc = encoder(LineCode::Rz, 6);
        let bits = BitSignal::from_bits(&[true, false]);
        let wave = enc.encode(&bits).unwrap();
        assert_eq!(
            wave.as_slice(),
            &[0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_rz_false_symbol_is_all_zero_even_with_nonzero_amp_min() {
        let enc = Encoder::new(LineCode::Rz, 6, -1.0, 1.0, false).unwrap();
        let bits = BitSignal::from_bits(&[false]);
        let wave = enc.encode(&bits).unwrap();
        assert!(wave.iter().all(|x| x == 0.0));
    }

    #[test]
    fn test_nrzt_waveform_with_boundary_ramps() {
        let enc = encoder(LineCode::Nrzt, 6);
        let bits = BitSignal::from_bits(&[true, false]);
        let wave = enc.encode(&bits).unwrap();
        // First symbol ramps up from zero, hands off at the midpoint;
        // second symbol finishes the ramp and falls back to zero.
        let expected = [
            0.0, 0.5, 1.0, 1.0, 1.0, 0.75, //
            0.5, 0.25, 0.0, 0.0, 0.0, 0.0,
        ];
        assert_eq!(wave.len(), expected.len());
        for (i, (&got, &want)) in wave.as_slice().iter().zip(&expected).enumerate() {
            assert!(
                (got - want).abs() < 1e-12,
                "sample {}: got {}, want {}",
                i,
                got,
                want
            );
        }
    }

    #[test]
    fn test_nrzt_middle_third_is_flat() {
        let enc = Encoder::new(LineCode::Nrzt, 30, -1.0, 1.0, false).unwrap();
        let bits = BitSignal::from_bits(&[true, false, true]);
        let wave = enc.encode(&bits).unwrap();
        for (sym, &level) in [1.0, -1.0, 1.0].iter().enumerate() {
            for i in 10..20 {
                let got = wave.get(sym * 30 + i).unwrap();
                assert_eq!(got, level, "symbol {} sample {}", sym, i);
            }
        }
    }

    #[test]
    fn test_nrzt_single_symbol_anchors_both_edges_at_zero() {
        let enc = encoder(LineCode::Nrzt, 3);
        let wave = enc.encode(&BitSignal::from_bits(&[true])).unwrap();
        assert_eq!(wave.as_slice(), &[0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_repetition_triples_output_length() {
        let enc = Encoder::new(LineCode::Nrz, 3, 0.0, 1.0, true).unwrap();
        let wave = enc.encode(&BitSignal::from_bits(&[true])).unwrap();
        // true -> 101 -> three NRZ symbols
        assert_eq!(
            wave.as_slice(),
            &[1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0]
        );
    }
}
