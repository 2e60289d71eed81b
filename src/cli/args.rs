//! CLI argument definitions

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{CommandFactory, FromArgMatches, Parser};

use crate::error::AppError;

#[derive(Debug, Parser)]
#[command(name = "cs")]
#[command(about = "Open a tmux session for a project directory")]
#[command(
    long_about = "Open a tmux session for a project directory.\n\n\
                  The session is named after the directory and created on first use. \
                  Inside tmux the current client switches to it; otherwise the terminal attaches."
)]
pub(crate) struct Cli {
    /// Project directory (defaults to the current directory)
    pub(crate) path: Option<PathBuf>,

    /// Print the session name and exit
    #[arg(short = 'n', long)]
    pub(crate) print_name: bool,

    /// Print the resolved project as JSON and exit
    #[arg(long, conflicts_with = "print_name")]
    pub(crate) json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Parse `args` (including the program name).
    ///
    /// Help is returned as [`AppError::Help`], using the invoked command name
    /// in the usage line.
    pub(crate) fn from_args<I, T>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let mut command = Self::command();
        if let Some(bin_name) = args
            .first()
            .and_then(|arg0| Path::new(arg0).file_name())
            .map(|name| name.to_string_lossy().into_owned())
        {
            command = command.bin_name(bin_name);
        }

        let matches = command
            .try_get_matches_from(args)
            .map_err(|err| match err.kind() {
                ErrorKind::DisplayHelp => AppError::Help(err.render().to_string()),
                _ => AppError::Usage(err.render().to_string()),
            })?;

        Self::from_arg_matches(&matches).map_err(|err| AppError::Usage(err.render().to_string()))
    }
}
