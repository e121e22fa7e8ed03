use crate::Cli;
use crate::CommandResult;

/// A `gqlshape` subcommand. Commands never print; everything they want shown
/// goes into the returned [`CommandResult`].
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: &Cli) -> CommandResult;
}
