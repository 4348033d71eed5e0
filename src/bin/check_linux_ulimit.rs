// Nagios check for the per-process open file limit.
//
// Scans the process table and reports processes at or near their soft
// nofile limit.

use clap::Parser;
use std::process::ExitCode;
use sysprobe::ulimit::UlimitCheck;
use sysprobe::version::build_info;

#[derive(Parser, Debug)]
#[command(name = "check-linux-ulimit")]
#[command(
    about = "Check all running processes for the nofile limit",
    long_about = "Check all running processes for the nofile limit. Throws a warning \
                  if the limit is nearly reached and critical if it is reached."
)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Percentage of the limit which may be reached until a warning is
    /// thrown. With -w 99 and a nofile limit of 1000 the warning occurs
    /// at 990 or more open files.
    #[arg(short, long, value_name = "PERCENT", default_value_t = 60)]
    warning: u64,

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

    let verdict = UlimitCheck::new(cli.warning).run();

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
