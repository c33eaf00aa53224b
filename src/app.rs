use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::interfaces::cli::{self, CliArgs};

pub fn run() {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let args = CliArgs::parse();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to start runtime: {}", e);
            std::process::exit(1);
        }
    };

    match runtime.block_on(cli::execute(&args)) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            error!(file = %args.file.display(), "Ingestion failed");
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
