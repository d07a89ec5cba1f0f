//! Free-text search and category filtering over the building list.
//!
//! Both keep dataset order; results are never ranked.

use crate::model::{Building, Category};

/// Case-insensitive substring search over name, short name, description,
/// departments and amenities.
///
/// The query is trimmed first. An empty or whitespace-only query matches
/// nothing rather than everything.
pub fn search_buildings<'a>(buildings: &'a [Building], query: &str) -> Vec<&'a Building> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    buildings
        .iter()
        .filter(|building| matches_query(building, &needle))
        .collect()
}

/// Buildings in `category`; `None` keeps every building
pub fn filter_by_category(buildings: &[Building], category: Option<Category>) -> Vec<&Building> {
    match category {
        Some(category) => buildings
            .iter()
            .filter(|building| building.category == category)
            .collect(),
        None => buildings.iter().collect(),
    }
}

/// Secondary line under a search hit: category label and first department
pub fn search_subtitle(building: &Building) -> String {
    let label = building.category.label();
    match building.departments().first() {
        Some(department) => format!("{label} • {department}"),
        None => label.to_string(),
    }
}

fn matches_query(building: &Building, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(&building.name)
        || contains(&building.short_name)
        || contains(&building.description)
        || building.departments().iter().any(|d| contains(d))
        || building.amenities.iter().any(|a| contains(a))
}
