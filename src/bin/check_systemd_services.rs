// Nagios check for services known to systemd.
//
// Classifies every unit the service manager reports, escalates failed
// critical units to CRITICAL and other anomalies to WARNING.

use clap::Parser;
use std::collections::HashSet;
use std::process::ExitCode;
use sysprobe::status::{Status, Verdict};
use sysprobe::systemd::{self, ListingCommand};
use sysprobe::version::build_info;

#[derive(Parser, Debug)]
#[command(name = "check-systemd-services")]
#[command(about = "Check all services known to systemd for anomalies", long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Unit to return critical when failed (repeatable)
    #[arg(short = 's', long = "critical", value_name = "UNIT")]
    critical_units: Vec<String>,

    /// Command used to obtain the unit listing
    #[arg(
        long,
        value_name = "CMD",
        default_value = "systemctl --all --no-legend --no-pager list-units"
    )]
    list_command: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Show version information
    #[arg(short = 'V', long)]
    version: bool,

    /// Show detailed build information
    #[arg(long)]
    build_info: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle version flag
    if cli.version {
        println!("{}", build_info().format_display());
        return ExitCode::SUCCESS;
    }

    // Handle build info flag
    if cli.build_info {
        println!("{}", build_info().format_display());
        println!("\n{}", build_info().format_build_info());
        return ExitCode::SUCCESS;
    }

    init_logging(cli.debug);

    let critical_units: HashSet<String> = cli.critical_units.into_iter().collect();

    let verdict = match ListingCommand::new(&cli.list_command) {
        Ok(listing) => systemd::run(&listing, &critical_units),
        Err(error) => Verdict::new(Status::Unknown, format!("{:#}", error)),
    };

    println!("{}", verdict.render());
    verdict.status.into()
}

fn init_logging(debug: bool) {
    // stdout carries the plugin protocol, logs go to stderr
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
