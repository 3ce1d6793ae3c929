use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand_distr::{Distribution, Normal, NormalError};
use std::error::Error;
use std::f64::consts::TAU;
use std::fmt;

/// Samples per simulated sensor reading.
pub const SAMPLE_COUNT: usize = 200;

const STRAIN_AMPLITUDE: f64 = 0.9;
const STRAIN_PERIOD_FRAMES: f64 = 50.0;
const STRAIN_WAVELENGTH: f64 = 40.0;
const STRAIN_NOISE_STD_DEV: f64 = 0.03;

const TEMPERATURE_BASELINE: f64 = 25.0;
const TEMPERATURE_AMPLITUDE: f64 = 2.0;
const TEMPERATURE_PERIOD_FRAMES: f64 = 80.0;
const TEMPERATURE_WAVELENGTH: f64 = 60.0;

#[derive(Debug)]
pub enum SensorSignalsError {
    NegativeNoise(f64),
    InvalidNoise(NormalError),
}

impl fmt::Display for SensorSignalsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeNoise(std_dev) => {
                write!(f, "strain noise standard deviation must not be negative, got {}", std_dev)
            }
            Self::InvalidNoise(err) => write!(f, "invalid strain noise distribution: {}", err),
        }
    }
}

impl Error for SensorSignalsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NegativeNoise(_) => None,
            Self::InvalidNoise(err) => Some(err),
        }
    }
}

impl From<NormalError> for SensorSignalsError {
    fn from(err: NormalError) -> Self {
        Self::InvalidNoise(err)
    }
}

/// One frame of simulated sensor data.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorFrame {
    pub strain: Vec<f64>,
    pub temperature: Vec<f64>,
}

/// Generates a noisy travelling strain wave and a slower temperature wave
/// over a fixed sample domain, phase-shifted by the frame index.
#[derive(Debug)]
pub struct SensorSignals {
    x: Vec<f64>,
    noise: Normal<f64>,
    rng: SmallRng,
}

impl SensorSignals {
    pub fn new() -> Result<Self, SensorSignalsError> {
        Self::with_rng(SmallRng::from_entropy(), STRAIN_NOISE_STD_DEV)
    }

    pub fn with_seed(seed: u64) -> Result<Self, SensorSignalsError> {
        Self::with_rng(SmallRng::seed_from_u64(seed), STRAIN_NOISE_STD_DEV)
    }

    /// `noise_std_dev` of zero gives a noiseless strain wave.
    pub fn with_rng(rng: SmallRng, noise_std_dev: f64) -> Result<Self, SensorSignalsError> {
        // Normal::new only rejects non-finite deviations
        if noise_std_dev < 0.0 {
            return Err(SensorSignalsError::NegativeNoise(noise_std_dev));
        }

        Ok(Self {
            x: (0..SAMPLE_COUNT).map(|i| i as f64).collect(),
            noise: Normal::new(0.0, noise_std_dev)?,
            rng,
        })
    }

    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn generate(&mut self, frame_index: u32) -> SensorFrame {
        let frame = f64::from(frame_index);
        let strain_phase = TAU * (frame / STRAIN_PERIOD_FRAMES);
        let temperature_phase = TAU * (frame / TEMPERATURE_PERIOD_FRAMES);

        let strain = self
            .x
            .iter()
            .map(|&x| {
                STRAIN_AMPLITUDE * (strain_phase + x / STRAIN_WAVELENGTH).sin()
                    + self.noise.sample(&mut self.rng)
            })
            .collect();

        let temperature = self
            .x
            .iter()
            .map(|&x| {
                TEMPERATURE_BASELINE
                    + TEMPERATURE_AMPLITUDE * (temperature_phase + x / TEMPERATURE_WAVELENGTH).sin()
            })
            .collect();

        SensorFrame {
            strain,
            temperature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noiseless() -> SensorSignals {
        SensorSignals::with_rng(SmallRng::seed_from_u64(7), 0.0).unwrap()
    }

    #[test]
    fn test_domain_is_fixed_sample_range() {
        let signals = noiseless();

        assert_eq!(signals.x().len(), SAMPLE_COUNT);
        assert_eq!(signals.x()[0], 0.0);
        assert_eq!(signals.x()[SAMPLE_COUNT - 1], 199.0);
    }

    #[test]
    fn test_frame_zero_noiseless_values() {
        let mut signals = noiseless();

        let frame = signals.generate(0);

        assert_eq!(frame.strain.len(), SAMPLE_COUNT);
        assert_eq!(frame.temperature.len(), SAMPLE_COUNT);
        assert!(frame.strain[0].abs() < 1e-12);
        assert!((frame.temperature[0] - 25.0).abs() < 1e-12);
        assert!((frame.strain[40] - 0.9 * 1.0_f64.sin()).abs() < 1e-12);
    }

    #[test]
    fn test_frame_index_shifts_phase() {
        let mut signals = noiseless();

        let quarter = signals.generate(20);

        // 20 / 80 of a cycle puts the temperature wave at its crest for x = 0.
        assert!((quarter.temperature[0] - 27.0).abs() < 1e-12);
        // Strain repeats every 50 frames.
        let repeated = signals.generate(70);
        assert!((quarter.strain[10] - repeated.strain[10]).abs() < 1e-9);
    }

    #[test]
    fn test_temperature_stays_within_band() {
        let mut signals = SensorSignals::with_seed(1).unwrap();

        for frame_index in 0..100 {
            let frame = signals.generate(frame_index);
            assert!(frame.temperature.iter().all(|t| (23.0..=27.0).contains(t)));
        }
    }

    #[test]
    fn test_noise_is_small_and_present() {
        let mut noisy = SensorSignals::with_seed(42).unwrap();
        let mut clean = noiseless();

        let noisy_frame = noisy.generate(3);
        let clean_frame = clean.generate(3);

        let deviations: Vec<f64> = noisy_frame
            .strain
            .iter()
            .zip(&clean_frame.strain)
            .map(|(a, b)| a - b)
            .collect();

        assert!(deviations.iter().any(|d| d.abs() > 0.0));
        assert!(deviations.iter().all(|d| d.abs() < 0.3));
    }

    #[test]
    fn test_negative_noise_is_rejected() {
        let result = SensorSignals::with_rng(SmallRng::seed_from_u64(0), -1.0);

        assert!(matches!(result, Err(SensorSignalsError::NegativeNoise(d)) if d == -1.0));
    }

    #[test]
    fn test_non_finite_noise_is_rejected() {
        for std_dev in [f64::NAN, f64::INFINITY] {
            let result = SensorSignals::with_rng(SmallRng::seed_from_u64(0), std_dev);

            assert!(matches!(result, Err(SensorSignalsError::InvalidNoise(_))));
        }
    }
}
