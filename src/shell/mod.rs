//! Process-backed implementations of the capabilities used by [`crate::ide`]

mod path;
mod tmux;

#[cfg(test)]
pub(crate) mod testing;

pub(crate) use path::SystemPath;
pub(crate) use tmux::Tmux;
