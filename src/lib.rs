pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod output;
pub mod tdoa;

pub use config::TdoaConfig;
pub use error::{Result, TdoaError};
pub use tdoa::TdoaTable;
