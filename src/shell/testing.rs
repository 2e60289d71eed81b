//! Recording test doubles for the shell capabilities

use std::cell::RefCell;
use std::io;
use std::path::Path;

use crate::consts::TMUX_PROGRAM;
use crate::error::TmuxError;
use crate::ide::{SessionManager, ShellPath};

/// Records every session call as `[op, args...]`
#[derive(Debug)]
pub(crate) struct SpyTmux {
    program: String,
    sessions: Vec<String>,
    fail_new: bool,
    calls: RefCell<Vec<Vec<String>>>,
}

impl Default for SpyTmux {
    fn default() -> Self {
        Self {
            program: TMUX_PROGRAM.to_string(),
            sessions: Vec::new(),
            fail_new: false,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl SpyTmux {
    pub(crate) fn with_session(session: &str) -> Self {
        Self {
            sessions: vec![session.to_string()],
            ..Self::default()
        }
    }

    pub(crate) fn with_program(program: &str) -> Self {
        Self {
            program: program.to_string(),
            ..Self::default()
        }
    }

    pub(crate) fn failing_new() -> Self {
        Self {
            fail_new: true,
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: &[&str]) {
        self.calls
            .borrow_mut()
            .push(call.iter().map(|s| s.to_string()).collect());
    }
}

impl SessionManager for SpyTmux {
    fn program(&self) -> &str {
        &self.program
    }

    fn has_session(&self, session: &str) -> bool {
        self.record(&["HasSession", session]);
        self.sessions.iter().any(|s| s == session)
    }

    fn new_session(&self, session: &str, dir: &Path) -> Result<(), TmuxError> {
        let dir = dir.to_string_lossy();
        self.record(&["New", session, &*dir]);
        if self.fail_new {
            return Err(TmuxError::Spawn {
                command: "new-session",
                source: io::Error::other("spy refused"),
            });
        }
        Ok(())
    }

    fn attach(&self, session: &str) -> Result<(), TmuxError> {
        self.record(&["Attach", session]);
        Ok(())
    }

    fn switch(&self, session: &str) -> Result<(), TmuxError> {
        self.record(&["Switch", session]);
        Ok(())
    }
}

/// PATH where everything is present except `missing`
#[derive(Debug, Default)]
pub(crate) struct MockPath {
    missing: Vec<String>,
}

impl MockPath {
    pub(crate) fn missing(programs: &[&str]) -> Self {
        Self {
            missing: programs.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl ShellPath for MockPath {
    fn contains(&self, program: &str) -> bool {
        !self.missing.iter().any(|p| p == program)
    }
}
