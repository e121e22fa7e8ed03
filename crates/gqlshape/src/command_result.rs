use std::process::ExitCode;

/// Output of one command run. `stdout` carries compiled artifacts only, so it
/// can be piped; diagnostics go to `stderr`.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}
impl CommandResult {
    pub fn failure(stderr: String) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(stderr),
            stdout: None,
        }
    }

    pub fn success(stdout: String) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(stdout),
        }
    }

    /// Report whatever succeeded on stdout alongside any failures on stderr.
    /// Any failure makes the whole run fail.
    pub fn from_outputs(outputs: Vec<String>, failures: Vec<String>) -> Self {
        let stdout = (!outputs.is_empty()).then(|| outputs.join("\n"));
        if failures.is_empty() {
            return Self {
                exit_code: ExitCode::SUCCESS,
                stderr: None,
                stdout,
            };
        }
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(failures.join("\n")),
            stdout,
        }
    }

    pub fn emit(self) -> ExitCode {
        if let Some(stdout) = self.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = self.stderr {
            eprintln!("{stderr}");
        }
        self.exit_code
    }
}
