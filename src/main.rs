use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use imc::core::config;
use imc::tui;

#[derive(Parser)]
#[command(name = "imc", about = "Terminal BMI (IMC) calculator")]
struct Args {
    /// Disable severity icons next to the classification message
    #[arg(long)]
    no_icons: bool,

    /// Config file path (default: ~/.imc/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file path
    #[arg(long, default_value = "imc.log")]
    log_file: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize file logger - stdout belongs to ratatui
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config(args.config.as_deref())?;
    let resolved = config::resolve(&file_config, args.no_icons);
    log::info!("imc starting up (icons: {})", resolved.show_icons);

    tui::run(resolved)?;

    log::info!("imc shut down");
    Ok(())
}
