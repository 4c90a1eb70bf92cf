mod csv;
mod json;
mod verilog;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::verilog::VerilogFormatter;

use crate::error::Result;
use crate::tdoa::{TdoaEntry, TdoaTable};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Verilog case items, pasted into the TDOA matcher
    #[default]
    Verilog,
    Csv,
    /// One JSON object per line
    Json,
}

pub trait Formatter {
    fn format(&self, entry: &TdoaEntry) -> Result<String>;

    fn header(&self) -> Option<&'static str> {
        None
    }
}

pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Verilog => Box::new(VerilogFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Render every row of `table`, newline-terminated, header first
pub fn render(table: &TdoaTable, formatter: &dyn Formatter) -> Result<String> {
    let mut out = String::new();
    if let Some(header) = formatter.header() {
        out.push_str(header);
        out.push('\n');
    }
    for entry in table.iter() {
        out.push_str(&formatter.format(entry)?);
        out.push('\n');
    }
    Ok(out)
}
