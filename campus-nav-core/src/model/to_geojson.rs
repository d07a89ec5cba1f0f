use geo::{Coord, LineString, MultiLineString, Point};
use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use super::{Building, Campus, Category, WalkwayNetwork};
use crate::Error;

impl Campus {
    /// Building markers, optionally limited to one category
    pub fn buildings_geojson(&self, category: Option<Category>) -> Result<FeatureCollection, Error> {
        let features = self
            .filter(category)
            .into_iter()
            .map(building_feature)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }
}

impl WalkwayNetwork {
    /// All walkway segments as a single `MultiLineString` feature
    pub fn to_geojson(&self) -> Result<FeatureCollection, Error> {
        let segments: MultiLineString<f64> = self
            .graph
            .edge_indices()
            .filter_map(|edge| self.graph.edge_endpoints(edge))
            .map(|(a, b)| {
                let from: Coord<f64> = self.graph[a].coordinates.into();
                let to: Coord<f64> = self.graph[b].coordinates.into();
                LineString::new(vec![from, to])
            })
            .collect();

        let value = json!({
            "type": "Feature",
            "geometry": Geometry::new(GeoJsonValue::from(&segments)),
            "properties": {
                "kind": "walkways",
                "nodes": self.node_count(),
                "segments": self.edge_count(),
                "miles": self.total_length(),
            }
        });

        let feature = Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))?;

        Ok(FeatureCollection {
            features: vec![feature],
            bbox: None,
            foreign_members: None,
        })
    }
}

fn building_feature(building: &Building) -> Result<Feature, Error> {
    let info = building.category.info();
    let point: Point<f64> = building.location();

    let value = json!({
        "type": "Feature",
        "id": building.id,
        "geometry": Geometry::new(GeoJsonValue::from(&point)),
        "properties": {
            "id": building.id,
            "name": building.name,
            "short_name": building.short_name,
            "category": building.category,
            "label": info.label,
            "icon": info.icon,
            "color": info.color,
            "hours": building.quick_hours(),
        }
    });

    Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}
