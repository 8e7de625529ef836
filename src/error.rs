use thiserror::Error;

/// The display query command could not be run or exited unsuccessfully.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Captured output is logged by the executor, not repeated here.
    #[error("`{command}` failed (exit code: {})", .code.map_or("signal".to_string(), |c| c.to_string()))]
    Exit { command: String, code: Option<i32> },
}

/// The command output did not hold exactly one usable `dimensions:` line.
#[derive(Debug, Error)]
#[error("expected exactly one dimensions match, got {}: [{}]", .matches.len(), .matches.join(", "))]
pub struct ParseError {
    pub matches: Vec<String>,
}

#[derive(Debug, Error)]
pub enum DimensionsError {
    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_error_reports_command_and_code() {
        let err = ProcessError::Exit {
            command: "xdpyinfo | grep dimensions".to_string(),
            code: Some(1),
        };
        assert_eq!(
            err.to_string(),
            "`xdpyinfo | grep dimensions` failed (exit code: 1)"
        );
    }

    #[test]
    fn exit_error_without_code_says_signal() {
        let err = ProcessError::Exit {
            command: "xdpyinfo".to_string(),
            code: None,
        };
        assert!(err.to_string().contains("exit code: signal"));
    }

    #[test]
    fn parse_error_lists_matches() {
        let err = ParseError {
            matches: vec!["1920x1080".to_string(), "2560x1440".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "expected exactly one dimensions match, got 2: [1920x1080, 2560x1440]"
        );
    }

    #[test]
    fn parse_error_with_no_matches() {
        let err = ParseError { matches: vec![] };
        assert_eq!(
            err.to_string(),
            "expected exactly one dimensions match, got 0: []"
        );
    }
}
