//! Two-point routes from an origin to a destination building

use geo::{LineString, line_string};
use serde::{Deserialize, Serialize};

use super::WalkingEstimate;
use crate::model::{Building, Category, Coordinates};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OriginKind {
    /// Last known geolocated position
    UserLocation,
    /// Fallback when no position is known
    CampusCenter,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteOrigin {
    pub kind: OriginKind,
    pub coordinates: Coordinates,
}

impl RouteOrigin {
    pub fn resolve(user_location: Option<Coordinates>, fallback: Coordinates) -> Self {
        match user_location {
            Some(coordinates) => Self {
                kind: OriginKind::UserLocation,
                coordinates,
            },
            None => Self {
                kind: OriginKind::CampusCenter,
                coordinates: fallback,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self.kind {
            OriginKind::UserLocation => "Your Location",
            OriginKind::CampusCenter => "Campus Center",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteDestination {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub coordinates: Coordinates,
}

/// Straight line from origin to destination with its walking estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub origin: RouteOrigin,
    pub destination: RouteDestination,
    pub estimate: WalkingEstimate,
}

impl Route {
    /// `[origin, destination]`
    pub fn points(&self) -> [Coordinates; 2] {
        [self.origin.coordinates, self.destination.coordinates]
    }

    pub fn line(&self) -> LineString<f64> {
        let [from, to] = self.points();
        line_string![
            (x: from.lon, y: from.lat),
            (x: to.lon, y: to.lat)
        ]
    }
}

/// Route to `destination` from the user's position, or from `fallback`
/// when the position is unknown
pub fn plan_route(
    user_location: Option<Coordinates>,
    fallback: Coordinates,
    destination: &Building,
) -> Route {
    let origin = RouteOrigin::resolve(user_location, fallback);
    let estimate = WalkingEstimate::between(origin.coordinates, destination.coordinates);

    log::debug!(
        "Route from {} to {}: {}",
        origin.label(),
        destination.id,
        estimate.distance_label()
    );

    Route {
        origin,
        destination: RouteDestination {
            id: destination.id.clone(),
            name: destination.name.clone(),
            category: destination.category,
            coordinates: destination.coordinates,
        },
        estimate,
    }
}
