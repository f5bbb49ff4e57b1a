use crate::cli::{Cli, ContactCommands};
use crate::errors;
use crate::services::contacts;
use crate::services::output::{print_one, print_out};
use crate::services::storage::{self, audit};

pub fn handle_contact_commands(cli: &Cli, command: &ContactCommands) -> anyhow::Result<()> {
    match command {
        ContactCommands::List => {
            let book = storage::load_contacts()?;
            print_out(cli.json, &book.contacts, |c| {
                format!(
                    "{}\t{}\t{}\t{}\t{}",
                    c.id,
                    c.name,
                    c.relation,
                    c.phone,
                    if c.is_emergency { "emergency" } else { "-" }
                )
            })?;
        }
        ContactCommands::Add {
            name,
            relation,
            phone,
            emergency,
        } => {
            let mut book = storage::load_contacts()?;
            let entry = contacts::add_contact(&mut book, name, relation, phone, *emergency)?;
            storage::save_contacts(&book)?;
            audit(
                "contact_add",
                serde_json::json!({"id": entry.id, "emergency": entry.is_emergency}),
            );
            print_one(cli.json, entry, |c| format!("added {} ({})", c.name, c.id))?;
        }
        ContactCommands::Remove { id } => {
            let mut book = storage::load_contacts()?;
            let removed = contacts::remove_contact(&mut book, id);
            storage::save_contacts(&book)?;
            audit("contact_remove", serde_json::json!({"id": id, "removed": removed}));
            print_one(cli.json, removed, |n| format!("removed {} entries", n))?;
        }
        ContactCommands::ToggleEmergency { id } => {
            let mut book = storage::load_contacts()?;
            let entry = contacts::toggle_emergency(&mut book, id)
                .cloned()
                .ok_or_else(|| errors::not_found("contact", id))?;
            storage::save_contacts(&book)?;
            audit(
                "contact_toggle_emergency",
                serde_json::json!({"id": id, "emergency": entry.is_emergency}),
            );
            print_one(cli.json, entry, |c| {
                format!(
                    "{} is {} an emergency contact",
                    c.name,
                    if c.is_emergency { "now" } else { "no longer" }
                )
            })?;
        }
        ContactCommands::Call { id } => {
            let book = storage::load_contacts()?;
            let contact = contacts::find(&book, id).ok_or_else(|| errors::not_found("contact", id))?;
            let intent = contacts::call_intent(contact);
            print_one(cli.json, intent, |i| format!("{}\t{}", i.name, i.uri))?;
        }
        ContactCommands::Message { id } => {
            let book = storage::load_contacts()?;
            let contact = contacts::find(&book, id).ok_or_else(|| errors::not_found("contact", id))?;
            let intent = contacts::message_intent(contact);
            print_one(cli.json, intent, |i| format!("{}\t{}", i.name, i.uri))?;
        }
    }
    Ok(())
}
