//! filem CLI entry point
//!
//! This is the single point where errors become terminal output and a
//! process exit status. Command handlers below this level only ever return
//! `Result`; usage errors and operation failures both exit with status 1,
//! while `--help` and `--version` exit 0.

use clap::Parser;
use clap::error::ErrorKind;
use filem::cli::Cli;
use filem::core::user_friendly_error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // clap's default exit code for usage errors is 2; the filem contract
    // is 0 on success and 1 on every failure, so parse errors are mapped
    // by hand here instead of going through Cli::parse.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // RUST_LOG wins over the --verbose/--quiet mapping when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    match cli.execute().await {
        Ok(()) => {}
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
