mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;
mod types_file;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    setup_logger(&cli);
    cli.run().await.emit()
}

/// Logs go to stderr so stdout carries only compiled output.
fn setup_logger(cli: &Cli) {
    let (log_level, warning) = cli.log_level();
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}
