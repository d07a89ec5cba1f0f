//! Navigator UI state as an explicit, serializable value.
//!
//! The presentation layer owns a `NavigatorState`, feeds it `Action`s through
//! [`NavigatorState::apply`] and renders the [`NavigatorView`] derived from it.
//! Nothing here touches a widget toolkit.

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    location::{LocationError, LocationTracker, RequestOutcome, Resolution},
    model::{Building, Campus, Category, CategoryInfo, Coordinates},
    routing::{Route, WalkingEstimate, plan_route},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Map,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// One-shot message for a toast; cleared by the next action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    SelectBuilding {
        id: String,
    },
    CloseDetail,
    SelectCategory {
        #[serde(default)]
        category: Option<Category>,
    },
    ToggleList,
    SetViewMode {
        mode: ViewMode,
    },
    GetDirections {
        id: String,
    },
    CloseDirections,
    RequestLocation,
    LocationFound {
        request_id: u64,
        coordinates: Coordinates,
    },
    LocationFailed {
        request_id: u64,
        error: LocationError,
    },
    /// Periodic clock update; expires a location request that took too long
    Tick,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorState {
    pub selected_building: Option<String>,
    pub selected_category: Option<Category>,
    pub view_mode: ViewMode,
    pub show_list: bool,
    /// Destination id while directions are shown
    pub directions_to: Option<String>,
    pub location: LocationTracker,
    pub notice: Option<Notice>,
}

impl NavigatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn directions_mode(&self) -> bool {
        self.directions_to.is_some()
    }

    pub fn user_location(&self) -> Option<Coordinates> {
        self.location.last_fix().map(|fix| fix.coordinates)
    }

    /// Checks state restored from a client before any action is applied
    ///
    /// # Errors
    ///
    /// Returns an error if the location tracker holds unusable coordinates,
    /// timestamps later than `now` or request ids it could not have issued
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), Error> {
        self.location.validate(now)
    }

    /// Apply one action and return the next state
    #[must_use]
    pub fn apply(mut self, action: Action, campus: &Campus, now: DateTime<Utc>) -> Self {
        self.notice = None;

        match action {
            Action::SelectBuilding { id } => {
                if campus.get_building_by_id(&id).is_some() {
                    self.selected_building = Some(id);
                    self.show_list = false;
                } else {
                    self.notice = Some(Notice::error(format!("Building '{id}' not found")));
                }
            }
            Action::CloseDetail => self.selected_building = None,
            Action::SelectCategory { category } => self.selected_category = category,
            Action::ToggleList => {
                self.show_list = !self.show_list;
                self.view_mode = if self.show_list {
                    ViewMode::List
                } else {
                    ViewMode::Map
                };
            }
            Action::SetViewMode { mode } => {
                self.view_mode = mode;
                self.show_list = mode == ViewMode::List;
            }
            Action::GetDirections { id } => {
                if campus.get_building_by_id(&id).is_some() {
                    self.directions_to = Some(id);
                    self.selected_building = None;
                } else {
                    self.notice = Some(Notice::error(format!("Building '{id}' not found")));
                }
            }
            Action::CloseDirections => self.directions_to = None,
            Action::RequestLocation => match self.location.request(now) {
                Ok(RequestOutcome::Cached(_)) => {
                    self.notice = Some(Notice::info("Using your recent location"));
                }
                Ok(RequestOutcome::Issued(request)) => {
                    debug!("Issued location request {}", request.id);
                }
                Err(err) => {
                    debug!("Location request rejected: {err}");
                    self.notice = Some(Notice::error(LocationError::PositionUnavailable.to_string()));
                }
            },
            Action::LocationFound {
                request_id,
                coordinates,
            } => {
                let resolution = self.location.resolve(request_id, Ok(coordinates), now);
                self.on_resolution(resolution);
            }
            Action::LocationFailed { request_id, error } => {
                let resolution = self.location.resolve(request_id, Err(error), now);
                self.on_resolution(resolution);
            }
            Action::Tick => {
                if let Some(error) = self.location.expire(now) {
                    self.notice = Some(Notice::error(error.to_string()));
                }
            }
        }

        self
    }

    fn on_resolution(&mut self, resolution: Resolution) {
        match resolution {
            Resolution::Accepted(_) => self.notice = Some(Notice::success("Location found!")),
            Resolution::Failed(error) => self.notice = Some(Notice::error(error.to_string())),
            Resolution::Stale => {}
        }
    }
}

/// Detail sheet for the selected building
#[derive(Debug, Clone, Serialize)]
pub struct BuildingPanel<'a> {
    pub building: &'a Building,
    pub category: CategoryInfo,
    pub quick_hours: Option<&'a str>,
    /// Present once the user's position is known
    pub estimate: Option<WalkingEstimate>,
}

impl<'a> BuildingPanel<'a> {
    pub fn new(building: &'a Building, user_location: Option<Coordinates>) -> Self {
        Self {
            building,
            category: building.category.info(),
            quick_hours: building.quick_hours(),
            estimate: user_location.map(|from| WalkingEstimate::between(from, building.coordinates)),
        }
    }
}

/// Everything the presentation layer renders for a given state
#[derive(Debug, Clone, Serialize)]
pub struct NavigatorView<'a> {
    /// Buildings on the map and in the list, after the category filter
    pub visible: Vec<&'a Building>,
    /// Heading of the list panel
    pub list_title: &'static str,
    pub show_list: bool,
    /// Hidden while directions are shown
    pub detail: Option<BuildingPanel<'a>>,
    pub directions: Option<Route>,
    /// Request id the client should pass to the geolocation service
    pub pending_location_request: Option<u64>,
    pub notice: Option<&'a Notice>,
}

impl<'a> NavigatorView<'a> {
    pub fn new(state: &'a NavigatorState, campus: &'a Campus, default_origin: Coordinates) -> Self {
        let user_location = state.user_location();

        let directions = state
            .directions_to
            .as_deref()
            .and_then(|id| campus.get_building_by_id(id))
            .map(|destination| plan_route(user_location, default_origin, destination));

        let detail = if directions.is_some() {
            None
        } else {
            state
                .selected_building
                .as_deref()
                .and_then(|id| campus.get_building_by_id(id))
                .map(|building| BuildingPanel::new(building, user_location))
        };

        Self {
            visible: campus.filter(state.selected_category),
            list_title: state
                .selected_category
                .map_or("All Buildings", Category::label),
            show_list: state.show_list,
            detail,
            directions,
            pending_location_request: state.location.pending().map(|request| request.id),
            notice: state.notice.as_ref(),
        }
    }
}
