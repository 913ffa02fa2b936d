//! End-to-end transmission chain
//!
//! The pipeline is linear and synchronous, so the chain invokes encoder,
//! channel and decoder directly in order and retains every intermediate
//! sequence for read-back, BER and SNR measurement.

use crate::channel::NoisyChannel;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::PhyResult;
use crate::noise::NoiseModel;
use crate::signal::{AmplitudeSignal, BitSignal};

/// Encoder -> NoisyChannel -> Decoder pipeline with retained intermediates
#[derive(Debug, Clone)]
pub struct TransmissionChain {
    encoder: Encoder,
    channel: NoisyChannel,
    decoder: Decoder,
    sent: Option<BitSignal>,
    transmitted: Option<AmplitudeSignal>,
    received: Option<AmplitudeSignal>,
    decoded: Option<BitSignal>,
}

impl TransmissionChain {
    pub fn new(encoder: Encoder, channel: NoisyChannel, decoder: Decoder) -> Self {
        Self {
            encoder,
            channel,
            decoder,
            sent: None,
            transmitted: None,
            received: None,
            decoded: None,
        }
    }

    /// Run the full pipeline on a bit sequence and return the decoded bits.
    pub fn transmit(&mut self, bits: &BitSignal) -> PhyResult<BitSignal> {
        let transmitted = self.encoder.encode(bits)?;
        let received = self.channel.process(&transmitted)?;
        let decoded = self.decoder.decode(&received)?;

        self.sent = Some(bits.clone());
        self.transmitted = Some(transmitted);
        self.received = Some(received);
        self.decoded = Some(decoded.clone());
        Ok(decoded)
    }

    /// Bits pushed into the encoder on the last run
    pub fn sent(&self) -> Option<&BitSignal> {
        self.sent.as_ref()
    }

    /// Waveform emitted by the encoder on the last run
    pub fn transmitted(&self) -> Option<&AmplitudeSignal> {
        self.transmitted.as_ref()
    }

    /// Waveform received from the channel on the last run
    pub fn received(&self) -> Option<&AmplitudeSignal> {
        self.received.as_ref()
    }

    /// Bits recovered by the decoder on the last run
    pub fn decoded(&self) -> Option<&BitSignal> {
        self.decoded.as_ref()
    }

    /// Noise drawn by the channel on the last run
    pub fn noise(&self) -> Option<&NoiseModel> {
        self.channel.noise()
    }

    /// Mismatched-bit count over sent-bit count for the last run
    pub fn bit_error_rate(&self) -> Option<f64> {
        let sent = self.sent.as_ref()?;
        let decoded = self.decoded.as_ref()?;
        let errors = sent
            .iter()
            .zip(decoded.iter())
            .filter(|(a, b)| a != b)
            .count();
        Some(errors as f64 / sent.len() as f64)
    }

    /// Measured SNR in dB: transmitted signal power over drawn noise
    /// power, `+infinity` when the noise power is zero.
    pub fn measured_snr_db(&self) -> Option<f64> {
        let transmitted = self.transmitted.as_ref()?;
        let noise = self.channel.noise()?;
        let noise_power = noise.power();
        if noise_power == 0.0 {
            return Some(f64::INFINITY);
        }
        Some(10.0 * (transmitted.power() / noise_power).log10())
    }
}
