use crate::commands;
use crate::CommandResult;
use clap::CommandFactory;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[derive(clap::Parser, Debug)]
#[command(name = "gqlshape", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Enable verbose output. Overrides the `LOG_LEVEL` environment \
             variable.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// The level to log at, plus a warning to emit once logging is up if
    /// `LOG_LEVEL` held something unrecognized.
    pub(crate) fn log_level(&self) -> (tracing::Level, Option<String>) {
        let env_val = std::env::var("LOG_LEVEL").ok();
        log_level_from(self.verbose, env_val.as_deref())
    }

    /// Run the selected subcommand, or print help when there is none.
    pub(crate) async fn run(mut self) -> CommandResult {
        match self.cmd.take() {
            Some(command) => command.run(&self).await,
            None => CommandResult::success(Self::command().render_help().to_string()),
        }
    }
}

fn log_level_from(
    verbose: bool,
    env_val: Option<&str>,
) -> (tracing::Level, Option<String>) {
    if verbose {
        return (tracing::Level::DEBUG, None);
    }
    match env_val.map(str::trim) {
        None => (DEFAULT_LOG_LEVEL, None),
        Some(level) => match level.to_ascii_lowercase().as_str() {
            "debug" | "verbose" => (tracing::Level::DEBUG, None),
            "info" => (tracing::Level::INFO, None),
            "trace" => (tracing::Level::TRACE, None),
            "warn" => (tracing::Level::WARN, None),
            _ => (
                DEFAULT_LOG_LEVEL,
                Some(format!("Invalid `LOG_LEVEL` environment variable value: `{level}`")),
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::log_level_from;

    #[test]
    fn verbose_wins_over_environment() {
        assert_eq!(log_level_from(true, Some("trace")), (tracing::Level::DEBUG, None));
    }

    #[test]
    fn environment_levels_are_case_insensitive() {
        assert_eq!(log_level_from(false, Some(" TRACE ")).0, tracing::Level::TRACE);
        assert_eq!(log_level_from(false, Some("Verbose")).0, tracing::Level::DEBUG);
        assert_eq!(log_level_from(false, None), (tracing::Level::INFO, None));
    }

    #[test]
    fn unknown_level_falls_back_with_a_warning() {
        let (level, warning) = log_level_from(false, Some("loud"));

        assert_eq!(level, tracing::Level::INFO);
        assert!(warning.is_some_and(|w| w.contains("`loud`")));
    }
}
