pub mod delay;
pub mod table;

pub use delay::{delay_samples, probe_point, round_samples, tdoa_for_probe};
pub use table::{TdoaEntry, TdoaTable};
