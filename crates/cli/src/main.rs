//! Prebid Mobile CLI for ad-unit configuration.
//!
//! This tool provides commands for:
//! - Classifying requested ad-unit formats into internal ad formats
//! - Validating settings files
//! - Rendering the OpenRTB native request of every configured native ad unit

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use prebid_mobile_common::ad_format::AdUnitFormat;

mod config;
mod error;
mod request;

use error::CliError;

#[derive(Parser)]
#[command(name = "pbmcli")]
#[command(about = "Prebid Mobile CLI for ad-unit configuration")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify ad-unit formats into internal ad formats
    Formats {
        /// Requested ad-unit format (repeatable)
        #[arg(long = "format", value_enum, required = true)]
        formats: Vec<FormatArg>,

        /// Treat the slot as an interstitial
        #[arg(long)]
        interstitial: bool,
    },

    /// Validate a settings file
    Validate {
        /// Path to the TOML settings file
        #[arg(long, short, env = "PREBID_MOBILE_SETTINGS")]
        file: PathBuf,
    },

    /// Print ad formats and native requests for every configured ad unit
    Request {
        /// Path to the TOML settings file
        #[arg(long, short, env = "PREBID_MOBILE_SETTINGS")]
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum, Debug)]
enum FormatArg {
    Banner,
    Video,
}

impl From<FormatArg> for AdUnitFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Banner => AdUnitFormat::Banner,
            FormatArg::Video => AdUnitFormat::Video,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logger(cli.verbose).and_then(|()| run(cli)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let output = match cli.command {
        Commands::Formats {
            formats,
            interstitial,
        } => {
            let formats: Vec<AdUnitFormat> = formats.into_iter().map(Into::into).collect();
            request::classify(&formats, interstitial)?
        }
        Commands::Validate { file } => config::validate(&file)?,
        Commands::Request { file } => request::render_requests(&file)?,
    };

    println!("{}", output);
    Ok(())
}

fn init_logger(verbose: bool) -> Result<(), CliError> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}  {} {}",
                chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}
