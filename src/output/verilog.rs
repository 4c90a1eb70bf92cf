//! Verilog case-item output.
//!
//! One line per direction, indexed by a 3-bit case label:
//!
//! ```text
//! 3'd1: begin exp_AB =   6; exp_AC =  16; end // NE
//! ```
//!
//! Values are right-aligned in three columns. The label is written exactly as
//! stored, so single-letter directions keep their trailing space.

use super::Formatter;
use crate::error::Result;
use crate::tdoa::TdoaEntry;

pub struct VerilogFormatter;

impl Formatter for VerilogFormatter {
    fn format(&self, entry: &TdoaEntry) -> Result<String> {
        Ok(format!(
            "3'd{}: begin exp_AB = {:3}; exp_AC = {:3}; end // {}",
            entry.index, entry.exp_ab, entry.exp_ac, entry.direction.label
        ))
    }
}
