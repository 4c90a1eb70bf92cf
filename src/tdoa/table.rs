//! Expected-TDOA lookup table
//!
//! Each row holds the sample offsets a source in one compass direction
//! produces between reference microphone A and microphones B and C. The
//! microphones are first moved into a frame centered on their centroid, and
//! probe points are placed on a circle of `probe.radius_m` around it.

use serde::Serialize;

use super::delay::{probe_point, round_samples, tdoa_for_probe};
use crate::config::{CompassDirection, TdoaConfig};
use crate::error::Result;
use crate::geometry::Point2D;

/// One row of the table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TdoaEntry {
    /// Hardware case index (position in the direction list)
    pub index: usize,
    pub direction: CompassDirection,
    /// Probe position in the recentered frame
    pub probe: Point2D,
    /// Unrounded A-B delay in samples
    pub raw_ab: f64,
    /// Unrounded A-C delay in samples
    pub raw_ac: f64,
    pub exp_ab: i32,
    pub exp_ac: i32,
}

/// Lookup table in direction-list order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TdoaTable {
    /// Centroid removed from the board coordinates
    pub centroid: Point2D,
    pub entries: Vec<TdoaEntry>,
}

impl TdoaTable {
    /// Compute the table for `config`.
    ///
    /// Rows come out in the same order as `config.directions`.
    pub fn generate(config: &TdoaConfig) -> Result<Self> {
        config.validate()?;

        let centroid = config.array.centroid();
        let mics = config.array.recentered();
        log::debug!("Array centroid: {}", centroid);
        log::debug!("Recentered mics: A={} B={} C={}", mics.a, mics.b, mics.c);

        let speed = config.acoustic.speed_of_sound_mps;
        let fs = config.acoustic.sample_rate_hz;

        let entries = config
            .directions
            .iter()
            .enumerate()
            .map(|(index, direction)| {
                let probe = probe_point(direction, config.probe.radius_m);
                let (raw_ab, raw_ac) = tdoa_for_probe(probe, &mics, speed, fs);
                log::trace!(
                    "{} ({}°): probe {} raw AB {:.4} AC {:.4}",
                    direction.label.trim_end(),
                    direction.angle_degrees,
                    probe,
                    raw_ab,
                    raw_ac
                );
                TdoaEntry {
                    index,
                    direction: *direction,
                    probe,
                    raw_ab,
                    raw_ac,
                    exp_ab: round_samples(raw_ab),
                    exp_ac: round_samples(raw_ac),
                }
            })
            .collect();

        Ok(Self { centroid, entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TdoaEntry> {
        self.entries.iter()
    }

    /// (exp_AB, exp_AC) for every row, in order
    pub fn offsets(&self) -> Vec<(i32, i32)> {
        self.entries.iter().map(|e| (e.exp_ab, e.exp_ac)).collect()
    }

    /// Smallest distance from any raw delay to a half-sample rounding
    /// boundary. A small margin means a tiny change in geometry flips a value.
    pub fn min_rounding_margin(&self) -> f64 {
        self.entries
            .iter()
            .flat_map(|e| [e.raw_ab, e.raw_ac])
            .map(|raw| 0.5 - (raw - raw.round()).abs())
            .fold(f64::INFINITY, f64::min)
    }
}
