use serde::Serialize;

use super::Formatter;
use crate::error::{Result, TdoaError};
use crate::tdoa::TdoaEntry;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonRow<'a> {
    index: usize,
    label: &'a str,
    angle_deg: f64,
    raw_ab: f64,
    raw_ac: f64,
    exp_ab: i32,
    exp_ac: i32,
}

impl Formatter for JsonFormatter {
    fn format(&self, entry: &TdoaEntry) -> Result<String> {
        let row = JsonRow {
            index: entry.index,
            label: entry.direction.label.trim_end(),
            angle_deg: entry.direction.angle_degrees,
            raw_ab: entry.raw_ab,
            raw_ac: entry.raw_ac,
            exp_ab: entry.exp_ab,
            exp_ac: entry.exp_ac,
        };
        serde_json::to_string(&row).map_err(|e| TdoaError::Serialization(e.to_string()))
    }
}
