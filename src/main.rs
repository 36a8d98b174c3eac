mod cli;
mod config;
mod domain;
mod error;
mod logging;
mod manager;
mod storage;

use crate::cli::args::{Cli, Command};
use crate::cli::output::OutputFormat;
use crate::config::Config;
use crate::error::TaskError;
use crate::manager::TaskManager;
use crate::storage::file::FileRepository;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::{Path, PathBuf};
use std::process;

/// Name of the tasks file, resolved against the current working directory.
const TASKS_FILE: &str = "tasks.json";

/// Exit code for malformed invocations.
const USAGE_EXIT_CODE: i32 = 1;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            eprintln!();
            let _ = Cli::command().write_long_help(&mut std::io::stderr());
            process::exit(USAGE_EXIT_CODE);
        }
    };

    if cli.no_color {
        colored::control::set_override(false);
    }

    match run(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(hint) = e.hint() {
                eprintln!("Hint: {hint}");
            }
            process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<String, TaskError> {
    // Completions need neither config nor the tasks file
    if let Command::Completions { shell } = &cli.command {
        return cli::commands::completions::run(*shell);
    }

    let config = Config::load(cli.config.as_deref().map(Path::new))?;
    logging::init(&config.log);

    let format = OutputFormat::from_flags(cli.json, cli.no_color || !config.display.color);
    let repo = FileRepository::new(tasks_path()?);
    tracing::debug!(path = %repo.path().display(), "using tasks file");
    let mut manager = TaskManager::new(repo)?;

    match cli.command {
        Command::Completions { .. } => unreachable!(),

        Command::Add { words } => cli::commands::add::run(&mut manager, words),
        Command::List => cli::commands::list::run(&manager, format),
        Command::Complete { id } => cli::commands::complete::run(&mut manager, id),
        Command::Clear => cli::commands::clear::run(&mut manager),
    }
}

fn tasks_path() -> Result<PathBuf, TaskError> {
    let cwd = std::env::current_dir().map_err(|source| TaskError::Io {
        path: ".".to_string(),
        source,
    })?;
    Ok(cwd.join(TASKS_FILE))
}
