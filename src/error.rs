use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TdoaError {
    #[error("Speed of sound must be positive and finite, got {0} m/s")]
    InvalidSpeedOfSound(f64),

    #[error("Sample rate must be positive and finite, got {0} Hz")]
    InvalidSampleRate(f64),

    #[error("Probe radius must be positive and finite, got {0} m")]
    InvalidProbeRadius(f64),

    #[error("All three microphones are at the same position")]
    CoincidentMicrophones,

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, TdoaError>;
