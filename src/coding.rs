//! Rate-1/3 repetition channel code
//!
//! Encode maps each bit to a fixed 3-bit codeword: 0 -> 010, 1 -> 101.
//! The decode table is a fixed dictionary over all 8 received triples, NOT
//! a majority vote; the two disagree on some inputs and the table is the
//! authoritative mapping.

use crate::error::{PhyError, PhyResult};
use crate::signal::BitSignal;

/// Codeword length of the repetition code
pub const CODEWORD_LEN: usize = 3;

/// The 3-bit codeword for one source bit
pub fn encode_bit(bit: bool) -> [bool; CODEWORD_LEN] {
    if bit {
        [true, false, true]
    } else {
        [false, true, false]
    }
}

/// Decode one received triple through the fixed table.
pub fn decode_triple(triple: [bool; CODEWORD_LEN]) -> bool {
    match triple {
        [false, false, false] => false,
        [false, false, true] => true,
        [false, true, false] => false,
        [false, true, true] => false,
        [true, false, false] => true,
        [true, false, true] => true,
        [true, true, false] => false,
        [true, true, true] => true,
    }
}

/// Expand a bit sequence through the encode map, tripling its length.
pub fn expand(bits: &BitSignal) -> BitSignal {
    let mut coded = BitSignal::new();
    for bit in bits.iter() {
        for b in encode_bit(bit) {
            coded.push(b);
        }
    }
    coded
}

/// Collapse a received bit sequence, three bits at a time, through the
/// decode table. Length must be a multiple of the codeword length.
pub fn collapse(bits: &BitSignal) -> PhyResult<BitSignal> {
    if bits.len() % CODEWORD_LEN != 0 {
        return Err(PhyError::SizeMismatch(format!(
            "received bit count {} is not a multiple of {}",
            bits.len(),
            CODEWORD_LEN
        )));
    }
    let mut decoded = BitSignal::new();
    for triple in bits.as_slice().chunks_exact(CODEWORD_LEN) {
        decoded.push(decode_triple([triple[0], triple[1], triple[2]]));
    }
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codewords() {
        assert_eq!(encode_bit(false), [false, true, false]);
        assert_eq!(encode_bit(true), [true, false, true]);
    }

    #[test]
    fn test_decode_table_is_exactly_the_fixed_dictionary() {
        // 000->0 001->1 010->0 011->0 100->1 101->1 110->0 111->1
        assert!(!decode_triple([false, false, false]));
        assert!(decode_triple([false, false, true]));
        assert!(!decode_triple([false, true, false]));
        assert!(!decode_triple([false, true, true]));
        assert!(decode_triple([true, false, false]));
        assert!(decode_triple([true, false, true]));
        assert!(!decode_triple([true, true, false]));
        assert!(decode_triple([true, true, true]));
    }

    #[test]
    fn test_table_is_not_majority_vote() {
        // 011 has two ones but decodes to 0; 100 has one but decodes to 1
        assert!(!decode_triple([false, true, true]));
        assert!(decode_triple([true, false, false]));
    }

    #[test]
    fn test_expand_triples_length() {
        let bits = BitSignal::from_bits(&[true, false, true]);
        let coded = expand(&bits);
        assert_eq!(coded.len(), 9);
        assert_eq!(
            coded.as_slice(),
            &[true, false, true, false, true, false, true, false, true]
        );
    }

    #[test]
    fn test_round_trip_without_errors() {
        let bits = BitSignal::from_bits(&[false, true, true, false, false, true]);
        assert_eq!(collapse(&expand(&bits)).unwrap(), bits);
    }

    #[test]
    fn test_collapse_rejects_partial_codeword() {
        let bits = BitSignal::from_bits(&[true, false, true, false]);
        assert!(matches!(
            collapse(&bits),
            Err(PhyError::SizeMismatch(_))
        ));
    }
}
