mod app;
mod cli;
mod config;
mod consts;
mod error;
mod ide;
mod logging;
mod project;
mod shell;

use std::process::ExitCode;

use cli::Cli;
use config::Config;
use error::AppError;
use ide::ShellEnv;
use shell::{SystemPath, Tmux};

fn main() -> ExitCode {
    let cli = match Cli::from_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => return report(&e),
    };

    logging::init(cli.debug);

    let config = Config::load();
    let tmux = Tmux::new(config.tmux_program());
    let shell = ShellEnv {
        tmux: &tmux,
        path: &SystemPath,
        attached: ShellEnv::attached_from_env(),
    };

    match app::execute(&cli, &shell) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

fn report(err: &AppError) -> ExitCode {
    match err {
        AppError::Help(text) => print!("{text}"),
        AppError::Usage(text) => eprint!("{text}"),
        _ => eprintln!("{err}"),
    }
    ExitCode::from(err.exit_code())
}
