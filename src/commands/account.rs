use crate::cli::{Cli, Commands};
use crate::services::auth;
use crate::services::config::Config;
use crate::services::output::print_one;
use crate::services::storage::audit;

pub fn handle_account_commands(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Login {
            email,
            password,
            register,
            name,
        } => {
            let session = auth::login(config, email, password, *register, name.as_deref())?;
            audit(
                "login",
                serde_json::json!({"register": register, "named": session.user_name.is_some()}),
            );
            let headline = if *register {
                "account created"
            } else {
                "login successful"
            };
            print_one(cli.json, session, |s| match &s.user_name {
                Some(n) => format!("{}: welcome, {}", headline, n),
                None => format!("{}: welcome back", headline),
            })?;
        }
        Commands::Logout => {
            auth::logout()?;
            audit("logout", serde_json::json!({}));
            print_one(cli.json, "signed_out", |_| "signed out".to_string())?;
        }
        Commands::Whoami => {
            let session = crate::services::storage::load_session()?;
            print_one(cli.json, session, |s| {
                if s.authenticated {
                    match &s.user_name {
                        Some(n) => format!("signed in as {}", n),
                        None => "signed in".to_string(),
                    }
                } else {
                    "signed out".to_string()
                }
            })?;
        }
        _ => unreachable!("handled in main dispatch"),
    }
    Ok(())
}
