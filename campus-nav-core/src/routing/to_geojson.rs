use geo::Point;
use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use super::Route;
use crate::Error;

impl Route {
    /// The route line plus one point feature per endpoint
    pub fn to_geojson(&self) -> Result<FeatureCollection, Error> {
        let line = Geometry::new(GeoJsonValue::from(&self.line()));

        let route = json!({
            "type": "Feature",
            "geometry": line,
            "properties": {
                "kind": "route",
                "origin": self.origin.label(),
                "destination_id": self.destination.id,
                "destination_name": self.destination.name,
                "miles": self.estimate.miles,
                "distance": self.estimate.distance_label(),
                "duration": self.estimate.duration_label(),
                "minutes": self.estimate.minutes,
            }
        });

        let origin = endpoint_feature(
            Point::from(self.origin.coordinates),
            "origin",
            self.origin.label(),
        );
        let destination = endpoint_feature(
            Point::from(self.destination.coordinates),
            "destination",
            &self.destination.name,
        );

        let features = [route, origin, destination]
            .into_iter()
            .map(|value| Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string())))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }
}

fn endpoint_feature(point: Point<f64>, kind: &str, name: &str) -> serde_json::Value {
    json!({
        "type": "Feature",
        "geometry": Geometry::new(GeoJsonValue::from(&point)),
        "properties": {
            "kind": kind,
            "name": name,
        }
    })
}
