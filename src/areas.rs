use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::cli::BUILTIN_AREAS_SOURCE;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Catalog {
    pub name: String,
    pub areas: Vec<SafetyArea>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SafetyArea {
    pub id: String,
    pub name: String,
    pub rating: u8,
    pub position: (f64, f64),
    pub radius_meters: u32,
}

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("duplicate area id: {0}")]
    DuplicateId(String),
    #[error("area rating out of range for {0}: {1}")]
    RatingOutOfRange(String, u8),
}

/// Hand-authored demo catalog, the stand-in for a real safety-data backend.
pub fn builtin() -> Catalog {
    let areas = vec![
        area("1", "Downtown", 85, (37.7749, -122.4194), 1000),
        area("2", "Riverside Park", 72, (37.7699, -122.4330), 800),
        area("3", "University Area", 92, (37.7857, -122.4071), 750),
        area("4", "Shopping District", 78, (37.7840, -122.4272), 600),
    ];
    Catalog {
        name: "builtin".to_string(),
        areas,
    }
}

fn area(id: &str, name: &str, rating: u8, position: (f64, f64), radius_meters: u32) -> SafetyArea {
    SafetyArea {
        id: id.to_string(),
        name: name.to_string(),
        rating,
        position,
        radius_meters,
    }
}

/// Load a catalog from a source (`builtin` or a JSON file path) and validate
/// it before use.
pub fn load_catalog(source: &str) -> anyhow::Result<Catalog> {
    let catalog = if source == BUILTIN_AREAS_SOURCE {
        builtin()
    } else {
        let raw = std::fs::read_to_string(Path::new(source))?;
        serde_json::from_str(&raw)?
    };
    validate(&catalog)?;
    Ok(catalog)
}

/// Unique ids, ratings within 0..=100.
pub fn validate(catalog: &Catalog) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for a in &catalog.areas {
        if !seen.insert(a.id.as_str()) {
            return Err(CatalogError::DuplicateId(a.id.clone()));
        }
        if a.rating > 100 {
            return Err(CatalogError::RatingOutOfRange(a.id.clone(), a.rating));
        }
    }
    Ok(())
}

pub fn find<'a>(catalog: &'a Catalog, id: &str) -> Option<&'a SafetyArea> {
    catalog.areas.iter().find(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        assert!(validate(&builtin()).is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let mut catalog = builtin();
        catalog.areas.push(area("1", "Copy", 50, (0.0, 0.0), 100));
        assert!(matches!(
            validate(&catalog),
            Err(CatalogError::DuplicateId(id)) if id == "1"
        ));
    }

    #[test]
    fn validate_rejects_out_of_range_rating() {
        let mut catalog = builtin();
        catalog.areas.push(area("9", "Hot", 101, (0.0, 0.0), 100));
        assert!(matches!(
            validate(&catalog),
            Err(CatalogError::RatingOutOfRange(id, 101)) if id == "9"
        ));
    }

    #[test]
    fn find_returns_none_for_unknown_id() {
        let catalog = builtin();
        assert!(find(&catalog, "nope").is_none());
        assert_eq!(find(&catalog, "3").map(|a| a.rating), Some(92));
    }
}
