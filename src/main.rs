//! nrel - npm release scripts
//!
//! Entry point for the nrel CLI application.

use std::process::ExitCode;

use anyhow::{Context, Result};
use serde::Serialize;

use npm_release_scripts::cli::{Cli, Commands, ReleaseArgs};
use npm_release_scripts::config::{generate_example_config, load_config, Config};
use npm_release_scripts::error::{exit_code, ReleaseError};
use npm_release_scripts::git::{self, Remote, Remotes};
use npm_release_scripts::package::{is_package_installed, Scope};
use npm_release_scripts::release::{release, Environment};
use npm_release_scripts::runner::ShellRunner;
use npm_release_scripts::utils::resolve_project_root;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    match run(cli) {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            if let Some(release_err) = err.downcast_ref::<ReleaseError>() {
                eprintln!("Error: {release_err}");
                return ExitCode::from(release_err.exit_code() as u8);
            }
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code::GENERAL_ERROR as u8)
        }
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<i32> {
    if let Some(shell) = cli.completions {
        Cli::generate_completions(shell);
        return Ok(exit_code::SUCCESS);
    }

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let root = resolve_project_root(cli.cwd.as_deref(), std::env::var_os("INIT_CWD"), &cwd);
    log::debug!("Project root = {}", root.display());

    let Some(command) = cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(exit_code::SUCCESS);
    };

    match command {
        Commands::Release(args) => {
            let config = if cli.no_config {
                Config::default()
            } else {
                load_config(cli.config.as_deref(), &root)?
            };
            run_release(args, &config, Environment::new(root))
        }
        Commands::Remotes => {
            let runner = ShellRunner::new(&root);
            print_json(&RemotesReport {
                default: git::get_default_remote(&runner)?,
                remotes: git::get_remotes(&runner)?,
            })?;
            Ok(exit_code::SUCCESS)
        }
        Commands::Stashes => {
            let runner = ShellRunner::new(&root);
            print_json(&git::get_stash_list(&runner)?)?;
            Ok(exit_code::SUCCESS)
        }
        Commands::Installed { name, global } => {
            let runner = ShellRunner::new(&root);
            let scope = if global { Scope::Global } else { Scope::Local };
            let installed = is_package_installed(&runner, &name, scope)?;
            println!("{name} is {}installed ({scope})", if installed { "" } else { "not " });
            Ok(if installed {
                exit_code::SUCCESS
            } else {
                exit_code::GENERAL_ERROR
            })
        }
        Commands::InitConfig => {
            print!("{}", generate_example_config());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn run_release(args: ReleaseArgs, config: &Config, env: Environment) -> Result<i32> {
    let runner = ShellRunner::new(&env.root).dry_run(args.dry_run);
    let options = args.into_options(&config.release);
    log::debug!("Release options = {options:?}");

    let summary = release(&runner, &env, &options)?;

    if options.verbose {
        print_json(&summary)?;
    }

    Ok(exit_code::SUCCESS)
}

#[derive(Serialize)]
struct RemotesReport {
    default: Option<Remote>,
    remotes: Remotes,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
