use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::consts::TMUX_PROGRAM;
use crate::error::TmuxError;
use crate::ide::SessionManager;

/// Runs tmux as a child process
#[derive(Debug, Clone)]
pub(crate) struct Tmux {
    program: String,
}

impl Tmux {
    pub(crate) fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command<I, S>(&self, args: I) -> Command
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        cmd
    }

    /// Run with the invoking terminal's stdin/stdout/stderr until tmux exits
    fn run_interactive(&self, command: &'static str, session: &str) -> Result<(), TmuxError> {
        let target = exact_target(session);
        let status = self
            .command([command, "-t", target.as_str()])
            .status()
            .map_err(|source| TmuxError::Spawn { command, source })?;

        if status.success() {
            Ok(())
        } else {
            Err(TmuxError::Failed {
                command,
                status,
                stderr: String::new(),
            })
        }
    }
}

/// `=name` only matches a session called exactly `name`; a bare name also
/// falls back to prefix and pattern matches.
fn exact_target(session: &str) -> String {
    format!("={session}")
}

impl Default for Tmux {
    fn default() -> Self {
        Self::new(TMUX_PROGRAM)
    }
}

impl SessionManager for Tmux {
    fn program(&self) -> &str {
        &self.program
    }

    fn has_session(&self, session: &str) -> bool {
        let target = exact_target(session);
        let result = self
            .command(["has-session", "-t", target.as_str()])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match result {
            Ok(status) => {
                debug!(session, %status, "has-session");
                status.success()
            }
            Err(e) => {
                debug!(session, error = %e, "has-session could not run, assuming no session");
                false
            }
        }
    }

    fn new_session(&self, session: &str, dir: &Path) -> Result<(), TmuxError> {
        let command = "new-session";
        let output = self
            .command([command, "-ds", session, "-c"])
            .arg(dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| TmuxError::Spawn { command, source })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(TmuxError::Failed {
                command,
                status: output.status,
                stderr: stderr.trim().to_string(),
            })
        }
    }

    fn attach(&self, session: &str) -> Result<(), TmuxError> {
        self.run_interactive("attach", session)
    }

    fn switch(&self, session: &str) -> Result<(), TmuxError> {
        self.run_interactive("switch-client", session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING: &str = "tmuxide-no-such-tmux-630e";

    #[test]
    fn default_program_is_tmux() {
        assert_eq!(Tmux::default().program(), "tmux");
    }

    #[test]
    fn has_session_is_false_when_program_cannot_run() {
        assert!(!Tmux::new(MISSING).has_session("abc-dabf"));
    }

    #[test]
    fn new_session_reports_spawn_failure() {
        let err = Tmux::new(MISSING)
            .new_session("abc-dabf", Path::new("/tmp"))
            .unwrap_err();
        assert!(matches!(err, TmuxError::Spawn { command: "new-session", .. }));
    }

    #[test]
    fn attach_and_switch_report_spawn_failure() {
        let tmux = Tmux::new(MISSING);
        assert!(matches!(
            tmux.attach("abc-dabf").unwrap_err(),
            TmuxError::Spawn { command: "attach", .. }
        ));
        assert!(matches!(
            tmux.switch("abc-dabf").unwrap_err(),
            TmuxError::Spawn { command: "switch-client", .. }
        ));
    }

    #[test]
    fn targets_are_exact_session_matches() {
        assert_eq!(exact_target("api-630e"), "=api-630e");
    }

    /// Stand-in tmux that logs its argv, one invocation per line
    #[cfg(unix)]
    fn recording_tmux(dir: &Path) -> (Tmux, std::path::PathBuf) {
        use std::os::unix::fs::PermissionsExt;

        let script = dir.join("tmux");
        let log = dir.join("calls.log");
        std::fs::write(
            &script,
            format!("#!/bin/sh\nprintf '%s\\n' \"$*\" >> '{}'\n", log.display()),
        )
        .expect("write script");
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
            .expect("chmod script");
        (Tmux::new(script.to_string_lossy()), log)
    }

    #[cfg(unix)]
    #[test]
    fn commands_use_exact_targets() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (tmux, log) = recording_tmux(dir.path());

        assert!(tmux.has_session("api-630e"));
        tmux.new_session("api-630e", Path::new("/srv/api")).expect("new");
        tmux.attach("api-630e").expect("attach");
        tmux.switch("api-630e").expect("switch");

        let calls = std::fs::read_to_string(log).expect("read log");
        assert_eq!(
            calls.lines().collect::<Vec<_>>(),
            vec![
                "has-session -t =api-630e",
                "new-session -ds api-630e -c /srv/api",
                "attach -t =api-630e",
                "switch-client -t =api-630e",
            ]
        );
    }

    // `false` ignores its arguments and exits 1, standing in for a tmux that rejects the call
    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_failure() {
        let tmux = Tmux::new("false");
        assert!(!tmux.has_session("abc-dabf"));
        assert!(matches!(
            tmux.new_session("abc-dabf", Path::new("/tmp")).unwrap_err(),
            TmuxError::Failed { command: "new-session", .. }
        ));
        assert!(matches!(
            tmux.attach("abc-dabf").unwrap_err(),
            TmuxError::Failed { command: "attach", .. }
        ));
    }
}
