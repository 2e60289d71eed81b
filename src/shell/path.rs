use crate::ide::ShellPath;

/// Looks programs up on the real `PATH`
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct SystemPath;

impl ShellPath for SystemPath {
    fn contains(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}
