use std::env;

use tracing::debug;

use crate::cli::Cli;
use crate::error::AppError;
use crate::ide::{self, ShellEnv};
use crate::project::Project;

/// Resolve the target directory and open (or print) its session
pub(crate) fn execute(cli: &Cli, shell: &ShellEnv<'_>) -> Result<(), AppError> {
    let target = match &cli.path {
        Some(path) => path.clone(),
        None => env::current_dir().map_err(AppError::CurrentDir)?,
    };

    let project = Project::new(target)?;
    debug!(
        session = %project.name,
        dir = %project.working_dir.display(),
        "resolved project"
    );

    if cli.json {
        println!("{}", serde_json::to_string(&project)?);
        return Ok(());
    }
    if cli.print_name {
        println!("{}", project.name);
        return Ok(());
    }

    ide::start(&project, shell)
}
