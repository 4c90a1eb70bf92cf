//! Physical constants of the microphone array
//!
//! These are the values baked into the hardware lookup table. Coordinates are
//! in meters, measured on the board before recentering.

/// ADC sample rate in Hz.
pub const SAMPLE_RATE_HZ: f64 = 46875.0;

/// Speed of sound in m/s.
pub const SPEED_OF_SOUND_MPS: f64 = 343.0;

/// Distance from the array center to each probe point, in meters.
/// Large compared to the microphone spacing, so the probe approximates a
/// far-field source.
pub const PROBE_RADIUS_M: f64 = 0.25;

/// Reference microphone A.
pub const MIC_A: (f64, f64) = (0.01, 0.04);

/// Microphone B.
pub const MIC_B: (f64, f64) = (0.10, 0.01);

/// Microphone C.
pub const MIC_C: (f64, f64) = (0.15, 0.06);

/// Compass bearings as (angle from +X in degrees, label).
///
/// 0° = East, 90° = North. The order is the hardware case index and must not
/// be sorted.
pub const COMPASS: [(f64, &str); 8] = [
    (90.0, "N "),
    (45.0, "NE"),
    (0.0, "E "),
    (315.0, "SE"),
    (270.0, "S "),
    (225.0, "SW"),
    (180.0, "W "),
    (135.0, "NW"),
];
