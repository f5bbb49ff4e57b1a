use crate::areas::{self, Catalog};
use crate::domain::models::{MapSession, RatingCard, SearchResult};
use crate::services::rating;

/// Select a safety area. The selection is recorded even for an unknown id;
/// rating, center, and zoom change only when the area exists.
pub fn select_area(map: &mut MapSession, catalog: &Catalog, id: &str) {
    map.selected_area = Some(id.to_string());
    if let Some(area) = areas::find(catalog, id) {
        map.safety_rating = area.rating;
        map.center = area.position;
        map.zoom = 15;
    }
}

/// Select a search result: the map moves there either way; the rating comes
/// from the matching area when there is one, otherwise the simulated engine.
pub fn select_result(map: &mut MapSession, catalog: &Catalog, result: &SearchResult) {
    map.center = result.position;
    map.zoom = 16;
    if let Some(area) = areas::find(catalog, &result.id) {
        map.selected_area = Some(area.id.clone());
        map.safety_rating = area.rating;
    } else {
        map.selected_area = None;
        map.safety_rating = rating::random_rating();
    }
}

/// Label shown on the rating card: the selected area's name, else a
/// placeholder derived from the pending query, else nothing (current
/// location).
pub fn area_label(map: &MapSession, catalog: &Catalog) -> Option<String> {
    if let Some(id) = &map.selected_area {
        return areas::find(catalog, id).map(|a| a.name.clone());
    }
    if !map.search_query.is_empty() {
        return Some(format!("{} Area", map.search_query));
    }
    None
}

pub fn build_card(map: &MapSession, catalog: &Catalog) -> RatingCard {
    RatingCard {
        rating: map.safety_rating,
        label: rating::band_label(map.safety_rating).to_string(),
        summary: rating::band_summary(map.safety_rating).to_string(),
        color: rating::circle_color(map.safety_rating).to_string(),
        area_label: area_label(map, catalog),
    }
}
