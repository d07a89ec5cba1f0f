//! Campus navigation core: building catalog, search, walking estimates
//! and the state model behind a campus map client.

pub mod error;
pub mod loading;
pub mod location;
pub mod model;
pub mod prelude;
pub mod routing;
pub mod search;
pub mod session;

pub use error::Error;
pub use loading::{CampusModelConfig, create_campus_model};
pub use model::{Building, Campus, Category, CategoryInfo, Coordinates, OpeningHours, PathNode};
pub use routing::{Route, RouteOrigin, WalkingEstimate, haversine_miles};
pub use search::search_buildings;

/// Distance in statute miles
pub type Miles = f64;
/// Walking time in whole minutes
pub type Minutes = u32;

/// Mean Earth radius used by the haversine formula, in miles
pub const EARTH_RADIUS_MILES: f64 = 3959.0;
/// Feet in one statute mile
pub const FEET_PER_MILE: f64 = 5280.0;
/// Walking pace, minutes per mile (3 mph)
pub const WALKING_MINUTES_PER_MILE: f64 = 20.0;
/// Distances below this threshold are displayed in feet
pub const FEET_DISPLAY_THRESHOLD: Miles = 0.1;
