//! CLI definitions and entry point

use std::ffi::OsString;
use std::process::ExitCode;

use clap::{CommandFactory, FromArgMatches, Parser};
use log::debug;

use super::commands;
use sysup::config::Config;
use sysup::core::models::BuildError;

/// Usage text shown on malformed invocations (after the program name)
pub const USAGE_ARGS: &str = "-i IP-ADDRESS1,IP-ADDRESS2,IP-ADDRESSN -p PORT1,PORT2,PORTN";

/// Exit status for invocation and configuration errors
///
/// Scans stop at 254 targets, so a failure count never reaches this value.
const USAGE_EXIT: u8 = 255;

/// sysup - Check that TCP services are reachable
#[derive(Parser, Debug)]
#[command(
    name = "sysup",
    version,
    about = "Check that TCP services are reachable",
    long_about = "Check that TCP services are reachable.\n\n\
                  The first address is checked on the first port, the second \
                  address on the second port, and so on. The exit status is \
                  the number of targets that could not be reached, or 255 \
                  for an invalid invocation."
)]
pub struct Cli {
    /// Comma-separated IPv4 addresses to check (repeatable)
    #[arg(short = 'i', value_name = "IP-ADDRESSES")]
    pub hosts: Vec<String>,

    /// Comma-separated ports, one per address (repeatable)
    #[arg(short = 'p', value_name = "PORTS")]
    pub ports: Vec<String>,
}

/// Run the CLI
pub fn run() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match parse_args(&program_name(), std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version land here too and go to stdout
            return if err.use_stderr() { ExitCode::from(USAGE_EXIT) } else { ExitCode::SUCCESS };
        },
    };

    match execute(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            if err.downcast_ref::<BuildError>().is_some() {
                eprintln!("Usage: {} {USAGE_ARGS}", program_name());
            }
            ExitCode::from(USAGE_EXIT)
        },
    }
}

/// Command definition with the usage line naming `program`
fn command(program: &str) -> clap::Command {
    Cli::command().override_usage(format!("{program} {USAGE_ARGS}"))
}

fn parse_args<I, T>(program: &str, args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut command = command(program);
    let matches = command.try_get_matches_from_mut(args)?;
    Cli::from_arg_matches(&matches).map_err(|err| err.format(&mut command))
}

fn execute(cli: &Cli) -> anyhow::Result<u8> {
    let config = Config::load()?;
    debug!("using {config:?}");

    let summary = commands::scan(&cli.hosts.join(","), &cli.ports.join(","), &config)?;
    Ok(summary.exit_code())
}

fn program_name() -> String {
    std::env::args_os()
        .next()
        .map_or_else(|| "sysup".to_string(), |arg| arg.to_string_lossy().into_owned())
}
