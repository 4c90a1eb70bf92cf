//! Configuration for the TDOA table generator.
//!
//! All defaults come from [`crate::constants`]. The table is meant to match
//! a specific board, so the binary never reads these values from the command
//! line; tests build alternative configurations directly.
//!
//! ```
//! use tdoa_rom::config::TdoaConfig;
//!
//! let config = TdoaConfig::default();
//! assert_eq!(config.directions.len(), 8);
//! assert_eq!(config.directions[0].label, "N ");
//! ```

use serde::Serialize;

use crate::constants::{
    COMPASS, MIC_A, MIC_B, MIC_C, PROBE_RADIUS_M, SAMPLE_RATE_HZ, SPEED_OF_SOUND_MPS,
};
use crate::error::{Result, TdoaError};
use crate::geometry::{MicArray, Point2D};

/// Number of compass directions, one per 3-bit case index
pub const DIRECTION_COUNT: usize = 8;

/// Compass bearing probed by one table row
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompassDirection {
    /// Angle from the +X axis in degrees, counter-clockwise (90 = North)
    pub angle_degrees: f64,
    /// Two-character label emitted as the row comment, e.g. `"N "`
    pub label: &'static str,
}

impl CompassDirection {
    pub const fn new(angle_degrees: f64, label: &'static str) -> Self {
        Self {
            angle_degrees,
            label,
        }
    }

    pub fn angle_radians(&self) -> f64 {
        self.angle_degrees.to_radians()
    }
}

/// Propagation and sampling parameters
#[derive(Debug, Clone)]
pub struct AcousticConfig {
    /// ADC sample rate in Hz
    pub sample_rate_hz: f64,
    /// Speed of sound in m/s
    pub speed_of_sound_mps: f64,
}

/// Probe geometry
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Distance from the array centroid to each probe point in meters
    pub radius_m: f64,
}

/// Complete generator configuration
#[derive(Debug, Clone)]
pub struct TdoaConfig {
    pub acoustic: AcousticConfig,
    pub probe: ProbeConfig,
    /// Microphone positions in board coordinates (not recentered)
    pub array: MicArray,
    /// Directions in hardware case-index order
    pub directions: [CompassDirection; DIRECTION_COUNT],
}

impl TdoaConfig {
    /// Check the inputs the table arithmetic depends on
    pub fn validate(&self) -> Result<()> {
        let c = self.acoustic.speed_of_sound_mps;
        if !c.is_finite() || c <= 0.0 {
            return Err(TdoaError::InvalidSpeedOfSound(c));
        }

        let fs = self.acoustic.sample_rate_hz;
        if !fs.is_finite() || fs <= 0.0 {
            return Err(TdoaError::InvalidSampleRate(fs));
        }

        let r = self.probe.radius_m;
        if !r.is_finite() || r <= 0.0 {
            return Err(TdoaError::InvalidProbeRadius(r));
        }

        self.array.validate()
    }
}

impl Default for AcousticConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: SAMPLE_RATE_HZ,
            speed_of_sound_mps: SPEED_OF_SOUND_MPS,
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            radius_m: PROBE_RADIUS_M,
        }
    }
}

impl Default for TdoaConfig {
    fn default() -> Self {
        Self {
            acoustic: AcousticConfig::default(),
            probe: ProbeConfig::default(),
            array: MicArray::new(
                Point2D::from(MIC_A),
                Point2D::from(MIC_B),
                Point2D::from(MIC_C),
            ),
            directions: COMPASS.map(|(angle, label)| CompassDirection::new(angle, label)),
        }
    }
}
