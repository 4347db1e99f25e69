use color_eyre::Result;
use credkeep::cli::{parse_args, run_cli_command, USAGE};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;

    // RUST_LOG=credkeep=debug for verbose output. Secret values are never logged.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("credkeep=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args(std::env::args()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    run_cli_command(args)
}
