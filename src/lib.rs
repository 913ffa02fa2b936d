//! Baseband transmission chain simulator
//!
//! Encodes a bit sequence into an oversampled line-coded waveform (NRZ,
//! RZ or NRZT, optionally repetition-coded), passes it through a channel
//! with multipath echoes and white Gaussian noise calibrated to a target
//! per-bit SNR, and detects the received waveform back into bits. The
//! [`TransmissionChain`] ties the stages together and measures bit-error
//! rate and effective SNR per run.
//!
//! Every stage is a pure, synchronous transform over a complete in-memory
//! sequence; the only mutable state is the channel's noise generator.

pub mod chain;
pub mod channel;
pub mod coding;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod line_code;
pub mod multipath;
pub mod noise;
pub mod signal;
pub mod source;

// Re-export core types for convenience
pub use chain::TransmissionChain;
pub use channel::NoisyChannel;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{PhyError, PhyResult};
pub use line_code::LineCode;
pub use multipath::MultipathDescriptor;
pub use noise::NoiseModel;
pub use signal::{AmplitudeSignal, BitSignal};
