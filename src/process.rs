use log::error;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::ProcessError;

#[derive(Debug)]
pub struct CommandResult {
    pub status: ExitStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandResult {
    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }
}

/// Runs `command` through `sh -c`, blocking until it exits, and captures
/// both output streams. A non-zero exit logs whatever was captured before
/// returning the error.
pub fn execute(command: &str) -> Result<CommandResult, ProcessError> {
    let output = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| ProcessError::Spawn {
            command: command.to_string(),
            source,
        })?;

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        error!("OUT: {}", stdout.trim_end());
        error!("ERR: {}", stderr.trim_end());
        return Err(ProcessError::Exit {
            command: command.to_string(),
            code: output.status.code(),
        });
    }

    Ok(CommandResult {
        status: output.status,
        stdout: output.stdout,
        stderr: output.stderr,
    })
}
