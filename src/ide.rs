//! Attach-or-create orchestration for a project's tmux session

use std::path::Path;

use tracing::{debug, info};

use crate::consts::TMUX_ENV;
use crate::error::{AppError, TmuxError};
use crate::project::Project;

/// Operations on tmux sessions
pub(crate) trait SessionManager {
    /// Binary that has to be on PATH for the other operations to work
    fn program(&self) -> &str;

    /// Whether a session named `session` exists. Failures count as "no".
    fn has_session(&self, session: &str) -> bool;

    /// Create a detached session rooted at `dir`
    fn new_session(&self, session: &str, dir: &Path) -> Result<(), TmuxError>;

    /// Attach the invoking terminal to `session`
    fn attach(&self, session: &str) -> Result<(), TmuxError>;

    /// Move the current tmux client to `session`
    fn switch(&self, session: &str) -> Result<(), TmuxError>;
}

/// Executable search path lookup
pub(crate) trait ShellPath {
    fn contains(&self, program: &str) -> bool;
}

/// External capabilities available to [`start`]
pub(crate) struct ShellEnv<'a> {
    pub(crate) tmux: &'a dyn SessionManager,
    pub(crate) path: &'a dyn ShellPath,
    /// The process was started from inside a tmux client
    pub(crate) attached: bool,
}

impl ShellEnv<'_> {
    /// Read the tmux marker from the process environment
    pub(crate) fn attached_from_env() -> bool {
        std::env::var_os(TMUX_ENV).is_some()
    }
}

/// Open the project's session, creating it first if needed.
///
/// Inside tmux the current client is switched over; otherwise the terminal
/// attaches. Stops at the first error.
pub(crate) fn start(project: &Project, shell: &ShellEnv<'_>) -> Result<(), AppError> {
    let program = shell.tmux.program();
    if !shell.path.contains(program) {
        return Err(AppError::TmuxNotInstalled {
            program: program.to_string(),
        });
    }

    if shell.tmux.has_session(&project.name) {
        debug!(session = %project.name, "reusing existing session");
    } else {
        info!(
            session = %project.name,
            dir = %project.working_dir.display(),
            "creating session"
        );
        shell.tmux.new_session(&project.name, &project.working_dir)?;
    }

    if shell.attached {
        debug!(session = %project.name, "switching client");
        shell.tmux.switch(&project.name)?;
    } else {
        debug!(session = %project.name, "attaching");
        shell.tmux.attach(&project.name)?;
    }

    Ok(())
}
