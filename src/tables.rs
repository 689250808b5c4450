use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{
        distance::LegSource,
        location::Catalog,
        planner::{JourneyEstimate, JourneyRequest},
        recommender::BatterySystem,
    },
    quantity::percent::Percent,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

#[must_use]
pub fn build_catalog_table(catalog: Catalog) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Location", "Latitude", "Longitude"]);
    for location in catalog.iter() {
        table.add_row(vec![
            Cell::new(location.name),
            Cell::new(format!("{:.4}", location.latitude)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", location.longitude)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[must_use]
pub fn build_estimate_table(request: &JourneyRequest<'_>, estimate: &JourneyEstimate) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new(format!("{} → {}", request.origin.name, request.destination.name)),
        Cell::new(match estimate.source {
            LegSource::Approximate => "approximate",
            LegSource::Routed => "routed",
        })
        .add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![
        Cell::new("Distance"),
        Cell::new(estimate.distance).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Travel time"),
        Cell::new(estimate.travel_time).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Fuel cost"),
        Cell::new(estimate.fuel_cost).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Alternator charge"),
        Cell::new(estimate.alternator_charge).set_alignment(CellAlignment::Right),
    ]);
    for (system, before, after) in [
        (
            BatterySystem::Primary,
            request.primary_state_of_charge,
            estimate.primary_state_of_charge_after,
        ),
        (
            BatterySystem::Secondary,
            request.secondary_state_of_charge,
            estimate.secondary_state_of_charge_after,
        ),
    ] {
        let is_recommended = system == estimate.recommended_system;
        table.add_row(vec![
            Cell::new(format!("{system}{}", if is_recommended { " ⚡" } else { "" }))
                .fg(if is_recommended { Color::Green } else { Color::Reset }),
            Cell::new(format!("{before} → {after}"))
                .set_alignment(CellAlignment::Right)
                .fg(state_of_charge_color(after)),
        ]);
    }
    table
}

fn state_of_charge_color(state_of_charge: Percent) -> Color {
    if state_of_charge >= Percent(80.0) {
        Color::Green
    } else if state_of_charge >= Percent(30.0) {
        Color::DarkYellow
    } else {
        Color::Red
    }
}
