use crate::areas::{self, Catalog};
use crate::cli::{AreaCommands, Cli, MapCommands};
use crate::domain::models::{AreaRow, RatingCard};
use crate::errors;
use crate::services::config::{simulate_delay, Config};
use crate::services::output::{print_one, print_out};
use crate::services::rating;
use crate::services::storage::{self, audit};
use crate::services::{map_session, search};

pub fn handle_map_commands(
    cli: &Cli,
    config: &Config,
    catalog: &Catalog,
    command: &MapCommands,
) -> anyhow::Result<()> {
    match command {
        MapCommands::Status => {
            let map = storage::load_map(config)?;
            let card = map_session::build_card(&map, catalog);
            print_card(cli.json, card)?;
        }
        MapCommands::Locate { lat, lon } => {
            let mut map = storage::load_map(config)?;
            if let (Some(lat), Some(lon)) = (lat, lon) {
                map.center = (*lat, *lon);
                storage::save_map(&map)?;
            }
            // Without coordinates the center stays at the default, silently.
            print_one(cli.json, map, |m| {
                format!("center {:.4},{:.4}\tzoom {}", m.center.0, m.center.1, m.zoom)
            })?;
        }
        MapCommands::Search { query } => {
            let mut map = storage::load_map(config)?;
            let pending = search::begin_search(&mut map, query);
            // Persist the bumped generation before the delay so overlapping
            // invocations can see this search is in flight.
            storage::save_map(&map)?;
            simulate_delay(config.simulation.search_delay_ms);
            let results = search::run_search(catalog, &pending.query);
            // A newer search may have started during the delay; commit only
            // against the session as it stands now.
            let mut map = storage::load_map(config)?;
            if search::commit_results(&mut map, &pending, results) {
                storage::save_map(&map)?;
            }
            audit(
                "map_search",
                serde_json::json!({"query": query, "results": map.search_results.len()}),
            );
            print_out(cli.json, &map.search_results, |r| {
                format!(
                    "{}\t{}\t{:.4},{:.4}",
                    r.id, r.name, r.position.0, r.position.1
                )
            })?;
        }
        MapCommands::SelectArea { id } => {
            let mut map = storage::load_map(config)?;
            map_session::select_area(&mut map, catalog, id);
            storage::save_map(&map)?;
            audit("map_select_area", serde_json::json!({"id": id}));
            let card = map_session::build_card(&map, catalog);
            print_card(cli.json, card)?;
        }
        MapCommands::SelectResult { id } => {
            let mut map = storage::load_map(config)?;
            let result = map
                .search_results
                .iter()
                .find(|r| r.id == *id)
                .cloned()
                .ok_or_else(|| errors::not_found("search result", id))?;
            map_session::select_result(&mut map, catalog, &result);
            storage::save_map(&map)?;
            audit("map_select_result", serde_json::json!({"id": id}));
            let card = map_session::build_card(&map, catalog);
            print_card(cli.json, card)?;
        }
    }
    Ok(())
}

fn print_card(json: bool, card: RatingCard) -> anyhow::Result<()> {
    print_one(json, card, |c| {
        format!(
            "{}\t{}%\t{}",
            c.area_label.as_deref().unwrap_or("Current Location"),
            c.rating,
            c.label
        )
    })
}

pub fn handle_area_commands(
    cli: &Cli,
    catalog: &Catalog,
    command: &AreaCommands,
) -> anyhow::Result<()> {
    match command {
        AreaCommands::List => {
            let rows: Vec<AreaRow> = catalog
                .areas
                .iter()
                .map(|a| AreaRow {
                    id: a.id.clone(),
                    name: a.name.clone(),
                    rating: a.rating,
                    color: rating::circle_color(a.rating).to_string(),
                    position: a.position,
                    radius_meters: a.radius_meters,
                })
                .collect();
            print_out(cli.json, &rows, |a| {
                format!("{}\t{}\t{}%\t{}", a.id, a.name, a.rating, a.color)
            })?;
        }
        AreaCommands::Validate => {
            areas::validate(catalog)?;
            print_one(cli.json, "valid", |_| "catalog valid".to_string())?;
        }
    }
    Ok(())
}
