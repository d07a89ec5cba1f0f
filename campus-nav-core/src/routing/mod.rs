//! Straight-line directions and the walking estimates shown with them

pub mod distance;
pub mod route;
mod to_geojson;

pub use distance::{DistanceUnit, FormattedDistance, WalkingEstimate, haversine_miles};
pub use route::{OriginKind, Route, RouteDestination, RouteOrigin, plan_route};
