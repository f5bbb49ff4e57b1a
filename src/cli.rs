use clap::{Parser, Subcommand};

pub const BUILTIN_AREAS_SOURCE: &str = "builtin";

#[derive(Parser, Debug)]
#[command(name = "safepath", version, about = "SafePath Guardian CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = BUILTIN_AREAS_SOURCE,
        help = "Safety-area catalog (path to a catalog JSON file, or `builtin`)"
    )]
    pub areas: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in (or register) against the simulated authentication service
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value_t = false)]
        register: bool,
        #[arg(long, help = "Full name, stored when registering")]
        name: Option<String>,
    },
    /// Clear the local session
    Logout,
    /// Show the current session status
    Whoami,
    /// Run a simulated threat assessment for the current surroundings
    Assess,
    Map {
        #[command(subcommand)]
        command: MapCommands,
    },
    Areas {
        #[command(subcommand)]
        command: AreaCommands,
    },
    Contacts {
        #[command(subcommand)]
        command: ContactCommands,
    },
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum MapCommands {
    /// Show the safety assessment card for the current map session
    Status,
    /// Set the current location; without coordinates the default center is kept
    Locate {
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        lon: Option<f64>,
    },
    /// Search the catalog for locations matching a query
    Search { query: String },
    /// Select a safety area by id
    SelectArea { id: String },
    /// Select a result from the most recent search
    SelectResult { id: String },
}

#[derive(Subcommand, Debug)]
pub enum AreaCommands {
    List,
    Validate,
}

#[derive(Subcommand, Debug)]
pub enum ContactCommands {
    List,
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        relation: String,
        #[arg(long)]
        phone: String,
        #[arg(long, default_value_t = false)]
        emergency: bool,
    },
    Remove {
        id: String,
    },
    ToggleEmergency {
        id: String,
    },
    /// Print the outbound `tel:` intent for a contact
    Call {
        id: String,
    },
    /// Print the outbound `sms:` intent for a contact
    Message {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    Show,
    Edit {
        id: String,
        #[arg(long)]
        content: String,
    },
}
