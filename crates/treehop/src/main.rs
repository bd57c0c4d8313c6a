//! treehop CLI - interactive git worktree switcher

mod cli;
mod commands;
mod output;
mod prompt;
mod resolve;

use std::process::ExitCode;

use owo_colors::OwoColorize;

use cli::Commands;
use treehop_core::{GitCli, TreehopError};

fn main() -> ExitCode {
    let cli = cli::parse();
    prompt::setup_ctrl_c_handler();

    let git = GitCli::current_dir();
    if let Err(e) = preflight(&git) {
        report_error(&e);
        return ExitCode::from(e.exit_code() as u8);
    }

    let prompter = prompt::TerminalPrompter;
    let result = match cli.command {
        Some(Commands::Add { branch }) => {
            commands::run_add(&git, &prompter, branch.as_deref(), cli.json, cli.quiet)
        }
        Some(Commands::Remove { force }) => {
            commands::run_remove(&git, &prompter, force, cli.json, cli.quiet)
        }
        Some(Commands::Jump(args)) => {
            let token = args.first().cloned().unwrap_or_default();
            match token.as_str() {
                "main" | "master" => {
                    commands::run_jump_default(&git, Some(&token), cli.json, cli.quiet)
                }
                _ => commands::run_jump_branch(&git, &token, cli.json, cli.quiet),
            }
        }
        None => commands::run_pick(&git, &prompter, cli.json, cli.quiet),
    };

    match result {
        Ok(outcome) => {
            if let Some(dir) = &outcome.target_dir {
                if let Err(e) = std::env::set_current_dir(dir) {
                    report_error(&TreehopError::Io(e));
                    return ExitCode::from(1);
                }
            }
            ExitCode::from(outcome.exit_code as u8)
        }
        Err(e) => {
            report_error(&e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Environment preconditions, checked once before any command dispatch:
/// git must be invocable and the working directory inside a work tree.
fn preflight(git: &GitCli) -> Result<(), TreehopError> {
    git.ensure_available()?;
    if !git.is_inside_work_tree()? {
        return Err(TreehopError::NotInRepository);
    }
    Ok(())
}

fn report_error(e: &TreehopError) {
    eprintln!("{} {}", "error:".red().bold(), e);
}
