pub use crate::{FEET_DISPLAY_THRESHOLD, Miles, Minutes};

// Re-export key components
pub use crate::error::Error;
pub use crate::loading::{CAMPUS_CENTER, CampusModelConfig, builtin_campus, create_campus_model};
pub use crate::location::{
    LocationError, LocationFix, LocationOptions, LocationRequest, LocationTracker, RequestOutcome,
    Resolution,
};
pub use crate::model::{
    Building, Campus, Category, CategoryInfo, Coordinates, OpeningHours, PathNode, WalkwayNetwork,
};
pub use crate::routing::{
    DistanceUnit, FormattedDistance, OriginKind, Route, RouteOrigin, WalkingEstimate,
    haversine_miles, plan_route,
};
pub use crate::search::{filter_by_category, search_buildings, search_subtitle};
pub use crate::session::{
    Action, BuildingPanel, NavigatorState, NavigatorView, Notice, NoticeLevel, ViewMode,
};
