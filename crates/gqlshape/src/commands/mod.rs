mod compile;

use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use compile::CompileCmd;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum CommandEnum {
    /// Compile query-spec files into GraphQL request payloads.
    Compile(Box<CompileCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: &Cli) -> CommandResult {
        match self {
            Self::Compile(cmd) => RunnableCommand::run(*cmd, cli).await,
        }
    }
}
