/// Name used for the config directory and config file
pub(crate) const APP_NAME: &str = "tmuxide";

/// Default tmux binary looked up on PATH
pub(crate) const TMUX_PROGRAM: &str = "tmux";

/// Set by tmux in every shell it spawns; only its presence matters
pub(crate) const TMUX_ENV: &str = "TMUX";

/// Number of hex characters of the path digest kept in a session name
pub(crate) const HASH_PREFIX_LEN: usize = 4;
