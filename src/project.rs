//! Project resolution and session naming
//!
//! A project is a directory plus the tmux session name derived from it.

use std::path::{MAIN_SEPARATOR_STR, Path, PathBuf, is_separator};

use serde::Serialize;
use sha1::{Digest, Sha1};

use crate::consts::HASH_PREFIX_LEN;
use crate::error::ProjectError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Project {
    pub(crate) name: String,
    pub(crate) working_dir: PathBuf,
}

impl Project {
    /// Resolve `target` into a project. The path must exist and be a directory.
    pub(crate) fn new(target: impl Into<PathBuf>) -> Result<Self, ProjectError> {
        let target = target.into();

        let metadata = fs_err::metadata(&target)?;
        if !metadata.is_dir() {
            return Err(ProjectError::NotADirectory { path: target });
        }

        Ok(Self {
            name: name(&target),
            working_dir: target,
        })
    }
}

/// Session name for `path`: the basename with `.` and `:` replaced by
/// underscores, followed by a short SHA-1 prefix of the full path.
///
/// Two directories sharing a basename (`~/work/api`, `~/personal/api`) get
/// different names. tmux reads `:` and `.` in a target as session/window/pane
/// separators and rewrites both to `_` in new session names.
pub(crate) fn name(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    let prefix = basename(path).replace(['.', ':'], "_");
    format!("{prefix}-{}", hash(path))
}

/// Last element of the raw path text. Trailing separators are dropped;
/// `.` components are kept as written.
fn basename(path: &Path) -> String {
    let raw = path.to_string_lossy();
    if raw.is_empty() {
        return ".".to_string();
    }

    let trimmed = raw.trim_end_matches(is_separator);
    if trimmed.is_empty() {
        return MAIN_SEPARATOR_STR.to_string();
    }

    match trimmed.rfind(is_separator) {
        Some(idx) => trimmed[idx + 1..].to_string(),
        None => trimmed.to_string(),
    }
}

fn hash(path: &Path) -> String {
    let digest = Sha1::digest(path.as_os_str().as_encoded_bytes());
    let mut hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
    hex.truncate(HASH_PREFIX_LEN);
    hex
}
