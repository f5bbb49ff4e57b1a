use crate::cli::{Cli, ProfileCommands};
use crate::errors;
use crate::services::output::{print_one, print_out};
use crate::services::storage::{self, audit};

pub fn handle_profile_commands(cli: &Cli, command: &ProfileCommands) -> anyhow::Result<()> {
    match command {
        ProfileCommands::Show => {
            let profile = storage::load_profile()?;
            print_out(cli.json, &profile.sections, |s| {
                format!("{}\t{}\t{}", s.id, s.title, s.content)
            })?;
        }
        ProfileCommands::Edit { id, content } => {
            let mut profile = storage::load_profile()?;
            let section = profile
                .sections
                .iter_mut()
                .find(|s| s.id == *id)
                .ok_or_else(|| errors::not_found("profile section", id))?;
            section.content = content.clone();
            let updated = section.clone();
            storage::save_profile(&profile)?;
            audit("profile_edit", serde_json::json!({"id": id}));
            print_one(cli.json, updated, |s| format!("{}\t{}", s.id, s.content))?;
        }
    }
    Ok(())
}
