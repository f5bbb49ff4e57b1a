use crate::domain::models::{Contact, ContactBook, MapSession, Profile, ProfileSection, Session};
use crate::services::config::Config;
use crate::services::rating;
use std::path::PathBuf;

pub fn audit(action: &str, data: serde_json::Value) {
    let home = match std::env::var("HOME") {
        Ok(h) => h,
        Err(_) => return,
    };
    let path = PathBuf::from(home).join(".config/safepath/audit.jsonl");
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": now_secs(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}

pub fn now_secs() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    ts.to_string()
}

pub fn now_millis() -> u128 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

fn state_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/safepath"))
}

fn session_path() -> anyhow::Result<PathBuf> {
    Ok(state_dir()?.join("session.json"))
}

fn map_path() -> anyhow::Result<PathBuf> {
    Ok(state_dir()?.join("map.json"))
}

fn contacts_path() -> anyhow::Result<PathBuf> {
    Ok(state_dir()?.join("contacts.json"))
}

fn profile_path() -> anyhow::Result<PathBuf> {
    Ok(state_dir()?.join("profile.json"))
}

fn write_json<T: serde::Serialize>(path: PathBuf, value: &T) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

pub fn load_session() -> anyhow::Result<Session> {
    let p = session_path()?;
    if !p.exists() {
        return Ok(Session::default());
    }
    let raw = std::fs::read_to_string(p)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn save_session(session: &Session) -> anyhow::Result<()> {
    write_json(session_path()?, session)
}

pub fn clear_session() -> anyhow::Result<()> {
    let p = session_path()?;
    if p.exists() {
        std::fs::remove_file(p)?;
    }
    Ok(())
}

/// Load the map session, creating one at the configured default center with a
/// simulated baseline rating on first use.
pub fn load_map(config: &Config) -> anyhow::Result<MapSession> {
    let p = map_path()?;
    if p.exists() {
        let raw = std::fs::read_to_string(p)?;
        return Ok(serde_json::from_str(&raw)?);
    }
    let session = MapSession {
        center: (config.map.default_lat, config.map.default_lon),
        zoom: config.map.default_zoom,
        selected_area: None,
        safety_rating: rating::random_rating(),
        search_query: String::new(),
        search_results: Vec::new(),
        search_generation: 0,
    };
    save_map(&session)?;
    Ok(session)
}

pub fn save_map(session: &MapSession) -> anyhow::Result<()> {
    write_json(map_path()?, session)
}

pub fn load_contacts() -> anyhow::Result<ContactBook> {
    let p = contacts_path()?;
    if p.exists() {
        let raw = std::fs::read_to_string(p)?;
        return Ok(serde_json::from_str(&raw)?);
    }
    let book = ContactBook {
        contacts: seed_contacts(),
    };
    save_contacts(&book)?;
    Ok(book)
}

pub fn save_contacts(book: &ContactBook) -> anyhow::Result<()> {
    write_json(contacts_path()?, book)
}

pub fn load_profile() -> anyhow::Result<Profile> {
    let p = profile_path()?;
    if p.exists() {
        let raw = std::fs::read_to_string(p)?;
        return Ok(serde_json::from_str(&raw)?);
    }
    let profile = Profile {
        sections: seed_profile_sections(),
    };
    save_profile(&profile)?;
    Ok(profile)
}

pub fn save_profile(profile: &Profile) -> anyhow::Result<()> {
    write_json(profile_path()?, profile)
}

fn seed_contacts() -> Vec<Contact> {
    vec![
        contact("1", "Emma Johnson", "Sister", "(555) 123-4567", true),
        contact("2", "Michael Chen", "Friend", "(555) 987-6543", true),
        contact("3", "Dr. Sarah Williams", "Doctor", "(555) 456-7890", false),
    ]
}

fn contact(id: &str, name: &str, relation: &str, phone: &str, is_emergency: bool) -> Contact {
    Contact {
        id: id.to_string(),
        name: name.to_string(),
        relation: relation.to_string(),
        phone: phone.to_string(),
        is_emergency,
    }
}

fn seed_profile_sections() -> Vec<ProfileSection> {
    [
        ("personal", "Personal Information", "Sarah Johnson, 28 years old"),
        (
            "contact",
            "Emergency Contact",
            "Emma Johnson (Sister): (555) 123-4567",
        ),
        (
            "address",
            "Home Address",
            "1234 Maple Street, Apt 5B, San Francisco, CA 94101",
        ),
        ("allergies", "Allergies", "Penicillin, Peanuts"),
        (
            "medical",
            "Medical Conditions",
            "Asthma, requires inhaler during attacks",
        ),
        (
            "medications",
            "Current Medications",
            "Albuterol inhaler as needed",
        ),
    ]
    .into_iter()
    .map(|(id, title, content)| ProfileSection {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
    })
    .collect()
}
