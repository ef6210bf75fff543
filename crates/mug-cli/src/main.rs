use mug_core::logging;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    match cli.log_file.as_deref() {
        Some(path) => {
            if let Err(err) = logging::init_logging_file(path) {
                logging::init_logging_stderr();
                tracing::warn!("file logging unavailable, using stderr: {:#}", err);
            }
        }
        None => logging::init_logging_stderr(),
    }

    if let Err(err) = cli.run().await {
        eprintln!("mug error: {:#}", err);
        std::process::exit(1);
    }
}
