//! Additive white Gaussian noise calibrated to a per-bit SNR
//!
//! Samples are drawn with the Box-Muller transform: each pair of
//! independent uniform draws yields two independent Gaussian outputs. The
//! standard deviation is derived analytically from the target SNR, the
//! signal power and the oversampling factor; the histogram statistics
//! exposed here are diagnostic only.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;
use std::f64::consts::PI;

/// A generated noise sequence with its calibration and statistics.
///
/// Built fresh per channel invocation and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct NoiseModel {
    samples: Vec<f64>,
    std_dev: f64,
}

impl NoiseModel {
    /// Noise standard deviation for a target per-bit SNR:
    /// `sqrt(P * n_ech / (2 * 10^(SNRdB/10)))`.
    ///
    /// An SNR of `+infinity` yields 0, so the noise vanishes entirely.
    pub fn sigma_for_snr(snr_db: f64, signal_power: f64, samples_per_symbol: usize) -> f64 {
        let snr_lin = 10.0_f64.powf(snr_db / 10.0);
        ((signal_power * samples_per_symbol as f64) / (snr_lin * 2.0)).sqrt()
    }

    /// Generate `n` samples calibrated to `snr_db` against `signal_power`.
    pub fn calibrated(
        n: usize,
        snr_db: f64,
        signal_power: f64,
        samples_per_symbol: usize,
        rng: &mut ChaCha8Rng,
    ) -> Self {
        let sigma = Self::sigma_for_snr(snr_db, signal_power, samples_per_symbol);
        Self::with_sigma(n, sigma, rng)
    }

    /// Generate `n` zero-mean Gaussian samples of standard deviation `sigma`.
    ///
    /// The second output of the final Box-Muller pair is discarded when
    /// `n` is odd.
    pub fn with_sigma(n: usize, sigma: f64, rng: &mut ChaCha8Rng) -> Self {
        let mut samples = vec![0.0; n];
        let mut i = 0;
        while i < n {
            // u1 clamped away from 0: rand draws from [0, 1)
            let u1: f64 = rng.gen::<f64>().max(1e-10);
            let u2: f64 = rng.gen();
            let r = (-2.0 * u1.ln()).sqrt();
            let theta = 2.0 * PI * u2;
            samples[i] = r * theta.cos() * sigma;
            if i + 1 < n {
                samples[i + 1] = r * theta.sin() * sigma;
            }
            i += 2;
        }
        Self {
            samples,
            std_dev: sigma,
        }
    }

    /// The generated samples, one per signal sample
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The analytic standard deviation the samples were drawn with
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Mean squared amplitude of the generated samples
    pub fn power(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().map(|&x| x * x).sum::<f64>() / self.samples.len() as f64
    }

    /// Arithmetic mean of the generated samples
    pub fn mean(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    /// Sample counts bucketed at `resolution`.
    ///
    /// Keys are bucket indices; bucket `k` covers
    /// `[k * resolution, (k + 1) * resolution)`.
    pub fn histogram(&self, resolution: f64) -> BTreeMap<i64, usize> {
        debug_assert!(resolution > 0.0);
        let mut buckets = BTreeMap::new();
        for &x in &self.samples {
            let key = (x / resolution).floor() as i64;
            *buckets.entry(key).or_insert(0) += 1;
        }
        buckets
    }

    /// Histogram-based variance estimate at `resolution`:
    /// `sum(bucket_value^2 * bucket_probability) - mean^2`.
    pub fn histogram_variance(&self, resolution: f64) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let n = self.samples.len() as f64;
        let second_moment: f64 = self
            .histogram(resolution)
            .iter()
            .map(|(&key, &count)| {
                let value = key as f64 * resolution;
                value * value * (count as f64 / n)
            })
            .sum();
        second_moment - self.mean().powi(2)
    }

    /// Square root of the histogram-based variance estimate
    pub fn histogram_std_dev(&self, resolution: f64) -> f64 {
        self.histogram_variance(resolution).sqrt()
    }
}
