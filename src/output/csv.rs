use super::Formatter;
use crate::error::Result;
use crate::tdoa::TdoaEntry;

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, entry: &TdoaEntry) -> Result<String> {
        Ok(format!(
            "{},{},{},{:.6},{:.6},{:.4},{:.4},{},{}",
            entry.index,
            entry.direction.label.trim_end(),
            entry.direction.angle_degrees,
            entry.probe.x,
            entry.probe.y,
            entry.raw_ab,
            entry.raw_ac,
            entry.exp_ab,
            entry.exp_ac
        ))
    }

    fn header(&self) -> Option<&'static str> {
        Some("index,label,angle_deg,probe_x,probe_y,raw_ab,raw_ac,exp_ab,exp_ac")
    }
}
