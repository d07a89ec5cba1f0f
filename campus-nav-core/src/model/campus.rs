//! The campus dataset: buildings in display order plus lookup indices

use hashbrown::HashMap;
use itertools::Itertools;
use rstar::{RTree, primitives::GeomWithData};

use super::{Building, Category, Coordinates, PathNode, WalkwayNetwork};
use crate::{Error, WalkingEstimate, search};

/// Building position projected around the campus center, tagged with its index
pub type IndexedPoint = GeomWithData<[f64; 2], usize>;

/// Read-only catalog of campus buildings.
///
/// Built once at startup; every accessor borrows from it and nothing mutates
/// a building afterwards.
#[derive(Debug, Clone)]
pub struct Campus {
    name: String,
    center: Coordinates,
    default_zoom: u8,
    buildings: Vec<Building>,
    walkways: WalkwayNetwork,
    id_index: HashMap<String, usize>,
    rtree: RTree<IndexedPoint>,
    lon_scale: f64,
}

impl Campus {
    /// # Errors
    ///
    /// Returns an error on duplicate building ids or invalid coordinates
    pub fn new(
        name: impl Into<String>,
        center: Coordinates,
        default_zoom: u8,
        buildings: Vec<Building>,
        path_nodes: Vec<PathNode>,
    ) -> Result<Self, Error> {
        let center = center.validate()?;

        let mut id_index = HashMap::with_capacity(buildings.len());
        for (idx, building) in buildings.iter().enumerate() {
            building.coordinates.validate()?;
            if id_index.insert(building.id.clone(), idx).is_some() {
                return Err(Error::DuplicateBuilding(building.id.clone()));
            }
        }

        for node in &path_nodes {
            node.coordinates.validate()?;
        }

        // Equirectangular projection: a degree of longitude shrinks with latitude
        let lon_scale = center.lat.to_radians().cos();
        let rtree = RTree::bulk_load(
            buildings
                .iter()
                .enumerate()
                .map(|(idx, b)| IndexedPoint::new(project(b.coordinates, lon_scale), idx))
                .collect(),
        );

        Ok(Self {
            name: name.into(),
            center,
            default_zoom,
            buildings,
            walkways: WalkwayNetwork::new(path_nodes),
            id_index,
            rtree,
            lon_scale,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Campus center, also the fallback origin for directions
    pub fn center(&self) -> Coordinates {
        self.center
    }

    pub fn default_zoom(&self) -> u8 {
        self.default_zoom
    }

    /// All buildings in dataset order
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn walkways(&self) -> &WalkwayNetwork {
        &self.walkways
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    pub fn get_building_by_id(&self, id: &str) -> Option<&Building> {
        self.id_index.get(id).map(|&idx| &self.buildings[idx])
    }

    pub fn get_buildings_by_category(&self, category: Category) -> Vec<&Building> {
        search::filter_by_category(&self.buildings, Some(category))
    }

    /// `None` means no filter
    pub fn filter(&self, category: Option<Category>) -> Vec<&Building> {
        search::filter_by_category(&self.buildings, category)
    }

    pub fn search(&self, query: &str) -> Vec<&Building> {
        search::search_buildings(&self.buildings, query)
    }

    /// Distinct categories in order of first appearance
    pub fn categories_present(&self) -> Vec<Category> {
        self.buildings.iter().map(|b| b.category).unique().collect()
    }

    /// Building count for every category, including empty ones
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        let counts = self.buildings.iter().counts_by(|b| b.category);
        Category::ALL
            .into_iter()
            .map(|category| (category, counts.get(&category).copied().unwrap_or(0)))
            .collect()
    }

    /// Closest building to `from`, with the walk to reach it
    pub fn nearest_building(&self, from: Coordinates) -> Option<(&Building, WalkingEstimate)> {
        let nearest = self.rtree.nearest_neighbor(&project(from, self.lon_scale))?;
        let building = &self.buildings[nearest.data];
        Some((building, WalkingEstimate::between(from, building.coordinates)))
    }
}

fn project(c: Coordinates, lon_scale: f64) -> [f64; 2] {
    [c.lon * lon_scale, c.lat]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::builtin_campus;

    #[test]
    fn lookup_by_id_roundtrips() {
        let campus = builtin_campus().unwrap();
        for building in campus.buildings() {
            assert_eq!(campus.get_building_by_id(&building.id), Some(building));
        }
        assert!(campus.get_building_by_id("does-not-exist").is_none());
        assert!(campus.get_building_by_id("").is_none());
    }

    #[test]
    fn category_filter_is_exact_and_complete() {
        let campus = builtin_campus().unwrap();
        for category in Category::ALL {
            let matched = campus.get_buildings_by_category(category);
            assert!(matched.iter().all(|b| b.category == category));
            let expected = campus
                .buildings()
                .iter()
                .filter(|b| b.category == category)
                .count();
            assert_eq!(matched.len(), expected);
        }
        assert!(campus.get_buildings_by_category(Category::Residence).is_empty());
        assert_eq!(campus.filter(None).len(), campus.len());
    }

    #[test]
    fn categories_in_first_appearance_order() {
        let campus = builtin_campus().unwrap();
        let present = campus.categories_present();
        assert_eq!(present.first(), Some(&Category::Administrative));
        assert_eq!(present[1], Category::Academic);
        assert!(!present.contains(&Category::Residence));
        assert_eq!(present.iter().unique().count(), present.len());

        let counts = campus.category_counts();
        assert_eq!(counts.len(), Category::ALL.len());
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), campus.len());
    }

    #[test]
    fn nearest_building_to_a_doorstep() {
        let campus = builtin_campus().unwrap();
        let (building, estimate) = campus
            .nearest_building(Coordinates::new(32.45221, -93.72751))
            .unwrap();
        assert_eq!(building.id, "noel-memorial-library");
        assert_eq!(estimate.minutes, 1);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let campus = builtin_campus().unwrap();
        let mut buildings = campus.buildings().to_vec();
        buildings.push(buildings[0].clone());

        let result = Campus::new("dup", campus.center(), 17, buildings, Vec::new());
        assert!(matches!(result, Err(Error::DuplicateBuilding(id)) if id == "administration"));
    }

    #[test]
    fn rejects_invalid_building_coordinates() {
        let campus = builtin_campus().unwrap();
        let mut buildings = campus.buildings().to_vec();
        buildings[0].coordinates = Coordinates::new(f64::NAN, -93.0);

        let result = Campus::new("bad", campus.center(), 17, buildings, Vec::new());
        assert!(matches!(result, Err(Error::InvalidCoordinates { .. })));
    }
}
