//! Propagation path descriptor

use crate::error::{PhyError, PhyResult};

/// One echo path of the channel: a sample delay plus an attenuation factor.
///
/// The direct path (delay 0, unit gain) is implicit and never stored; a
/// channel holds zero or more of these describing the echoes only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultipathDescriptor {
    delay: usize,
    attenuation: f64,
}

impl MultipathDescriptor {
    /// Create a path with `delay` samples of lag and gain `attenuation`.
    ///
    /// Attenuation must lie in `[0, 1]`; anything else (NaN included) is
    /// rejected with `InvalidParameter`.
    pub fn new(delay: usize, attenuation: f64) -> PhyResult<Self> {
        if !(0.0..=1.0).contains(&attenuation) {
            return Err(PhyError::InvalidParameter(format!(
                "attenuation {} outside [0, 1]",
                attenuation
            )));
        }
        Ok(Self { delay, attenuation })
    }

    /// Delay in samples
    pub fn delay(&self) -> usize {
        self.delay
    }

    /// Attenuation factor in `[0, 1]`
    pub fn attenuation(&self) -> f64 {
        self.attenuation
    }
}
