use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    /// Rendered help text; shown to the user but still a failed invocation
    #[error("{0}")]
    Help(String),

    #[error("{0}")]
    Usage(String),

    #[error("Failed to determine current directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error(
        "Did not find {program}, which is a required dependency for ide command.\n\n\
         You can install tmux e.g. via homebrew by running\n\
         brew install tmux\n"
    )]
    TmuxNotInstalled { program: String },

    #[error(transparent)]
    Tmux(#[from] TmuxError),

    #[error("Failed to serialize project: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Process exit status for this error (2 for argument problems, 1 otherwise)
    pub(crate) fn exit_code(&self) -> u8 {
        match self {
            AppError::Help(_) | AppError::Usage(_) => 2,
            _ => 1,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ProjectError {
    #[error("Invalid path {}: Not a directory.", .path.display())]
    NotADirectory { path: PathBuf },

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub(crate) enum TmuxError {
    #[error("Failed to run tmux {command}: {source}")]
    Spawn {
        command: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("tmux {command} failed ({status}){}", stderr_suffix(.stderr))]
    Failed {
        command: &'static str,
        status: ExitStatus,
        stderr: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}
