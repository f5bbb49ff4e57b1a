use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Session flags, the browser-storage analog: absent file means signed out.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Session {
    pub authenticated: bool,
    #[serde(default)]
    pub user_name: Option<String>,
}

/// Canonical map session shared by the map subcommands: center, zoom,
/// selection, rating, and the last search.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MapSession {
    pub center: (f64, f64),
    pub zoom: u8,
    pub selected_area: Option<String>,
    pub safety_rating: u8,
    #[serde(default)]
    pub search_query: String,
    #[serde(default)]
    pub search_results: Vec<SearchResult>,
    /// Bumped on every search; a completed search only commits its results
    /// while its generation is still current.
    #[serde(default)]
    pub search_generation: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SearchResult {
    pub id: String,
    pub name: String,
    pub position: (f64, f64),
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Contact {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub relation: String,
    pub phone: String,
    #[serde(default)]
    pub is_emergency: bool,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ContactBook {
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProfileSection {
    pub id: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Profile {
    pub sections: Vec<ProfileSection>,
}

/// The safety assessment card shown by `map status`.
#[derive(Serialize)]
pub struct RatingCard {
    pub rating: u8,
    pub label: String,
    pub summary: String,
    pub color: String,
    pub area_label: Option<String>,
}

#[derive(Serialize)]
pub struct AreaRow {
    pub id: String,
    pub name: String,
    pub rating: u8,
    pub color: String,
    pub position: (f64, f64),
    pub radius_meters: u32,
}

#[derive(Serialize)]
pub struct AssessReport {
    pub threat_level: u8,
    pub status: String,
    pub last_updated: String,
    pub factors: Vec<RiskFactor>,
}

#[derive(Serialize, Clone)]
pub struct RiskFactor {
    pub id: String,
    pub label: String,
    pub value: String,
    pub score: u8,
}

/// Outbound `tel:`/`sms:` intent for a contact.
#[derive(Serialize)]
pub struct OutboundIntent {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub uri: String,
}
