//! Helpers shared by the demonstration programs

use std::convert::TryFrom;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use svrkit_datasets::generate::MIN_SAMPLES;

/// Log to stderr, `RUST_LOG` defaults to `info`
pub fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}

/// Parse the command line
///
/// Usage errors are printed and turned into exit code 1, `--help` and
/// `--version` into a successful exit.
pub fn parse_args<C: Parser>() -> Result<C, ExitCode> {
    C::try_parse().map_err(|err| {
        let _ = err.print();
        if err.use_stderr() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    })
}

/// Requested number of samples, raised to [`MIN_SAMPLES`]
pub fn sample_count(requested: i64) -> usize {
    usize::try_from(requested).unwrap_or(0).max(MIN_SAMPLES)
}

/// Print a quadratic risk along with its root
pub fn report_risk(label: &str, risk: f64) {
    println!("{:>34} : {}", label, risk);
    println!("{:>34} : {}", "i.e. error", risk.sqrt());
}
