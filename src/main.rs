use anyhow::Context;
use clap::Parser;

use tdoa_rom::TdoaTable;
use tdoa_rom::config::TdoaConfig;
use tdoa_rom::output::{OutputFormat, create_formatter, render};

#[derive(Parser, Debug)]
#[command(name = "tdoa-rom")]
#[command(about = "Print the expected TDOA lookup table for the compass microphone array", long_about = None)]
struct Args {
    /// Output format: verilog, csv, json
    #[arg(short = 'f', long, value_enum, default_value = "verilog")]
    format: OutputFormat,

    /// Increase log verbosity (logs go to stderr)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = TdoaConfig::default();
    log::info!(
        "fs={} Hz, c={} m/s, probe radius={} m",
        config.acoustic.sample_rate_hz,
        config.acoustic.speed_of_sound_mps,
        config.probe.radius_m
    );

    let table = TdoaTable::generate(&config).context("Failed to compute TDOA table")?;
    log::info!(
        "Smallest rounding margin: {:.3} samples",
        table.min_rounding_margin()
    );

    let formatter = create_formatter(args.format);
    let text = render(&table, formatter.as_ref()).context("Failed to format TDOA table")?;
    print!("{}", text);

    Ok(())
}
