use clap::Parser;

mod areas;
mod cli;
mod commands;
mod domain;
mod errors;
mod services;

use cli::{Cli, Commands};
use services::auth::require_auth;
use services::output::print_err;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        print_err(cli.json, errors::error_code(&err), &err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = services::config::load_config()?;
    let catalog = areas::load_catalog(&cli.areas)?;

    match &cli.command {
        Commands::Login { .. } | Commands::Logout | Commands::Whoami => {
            commands::handle_account_commands(cli, &config)?;
        }
        Commands::Assess => {
            commands::handle_assess(cli, &config)?;
        }
        Commands::Areas { command } => {
            commands::handle_area_commands(cli, &catalog, command)?;
        }
        Commands::Map { command } => {
            require_auth(&services::storage::load_session()?)?;
            commands::handle_map_commands(cli, &config, &catalog, command)?;
        }
        Commands::Contacts { command } => {
            require_auth(&services::storage::load_session()?)?;
            commands::handle_contact_commands(cli, command)?;
        }
        Commands::Profile { command } => {
            require_auth(&services::storage::load_session()?)?;
            commands::handle_profile_commands(cli, command)?;
        }
    }

    Ok(())
}
