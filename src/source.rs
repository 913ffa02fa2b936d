//! Bit message construction
//!
//! Helpers for building the message pushed into the encoder: a
//! pseudo-random sequence (reproducible under a seed) or a fixed pattern
//! parsed from a "0101..." string.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{PhyError, PhyResult};
use crate::signal::BitSignal;

/// Pseudo-random message of `len` bits; a seed makes it reproducible.
pub fn random_bits(len: usize, seed: Option<u64>) -> BitSignal {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    (0..len).map(|_| rng.gen::<bool>()).collect()
}

/// Parse a message string of '0' and '1' characters.
pub fn fixed_bits(message: &str) -> PhyResult<BitSignal> {
    message
        .chars()
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(PhyError::InvalidInput(
                "message must contain only '0' and '1'",
            )),
        })
        .collect()
}
