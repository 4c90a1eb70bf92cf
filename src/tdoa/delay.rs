use crate::config::CompassDirection;
use crate::geometry::{MicArray, Point2D};

/// Far-field probe for a direction, relative to the frame origin
pub fn probe_point(direction: &CompassDirection, radius: f64) -> Point2D {
    Point2D::from_polar(direction.angle_radians(), radius)
}

/// Convert a path length difference in meters to a delay in samples
pub fn delay_samples(path_difference_m: f64, speed_of_sound_mps: f64, sample_rate_hz: f64) -> f64 {
    path_difference_m / speed_of_sound_mps * sample_rate_hz
}

/// Round a delay to the nearest whole sample, ties away from zero
pub fn round_samples(samples: f64) -> i32 {
    samples.round() as i32
}

/// Unrounded (A-B, A-C) delays in samples for a source at `probe`.
///
/// `probe` and `mics` must be in the same frame.
pub fn tdoa_for_probe(
    probe: Point2D,
    mics: &MicArray,
    speed_of_sound_mps: f64,
    sample_rate_hz: f64,
) -> (f64, f64) {
    let d = mics.distances_from(probe);
    (
        delay_samples(d.ab(), speed_of_sound_mps, sample_rate_hz),
        delay_samples(d.ac(), speed_of_sound_mps, sample_rate_hz),
    )
}
