//! Great-circle distance and walking-time estimation

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    EARTH_RADIUS_MILES, FEET_DISPLAY_THRESHOLD, FEET_PER_MILE, Miles, Minutes,
    WALKING_MINUTES_PER_MILE, model::Coordinates,
};

/// Haversine distance between two coordinates, in miles
pub fn haversine_miles(a: Coordinates, b: Coordinates) -> Miles {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let delta_phi = (b.lat - a.lat).to_radians();
    let delta_lambda = (b.lon - a.lon).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_MILES * c
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[serde(rename = "ft")]
    Feet,
    #[serde(rename = "mi")]
    Miles,
}

impl DistanceUnit {
    pub const fn suffix(self) -> &'static str {
        match self {
            DistanceUnit::Feet => "ft",
            DistanceUnit::Miles => "mi",
        }
    }
}

/// Distance as displayed: whole feet below 0.1 mi, otherwise miles
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormattedDistance {
    pub value: f64,
    pub unit: DistanceUnit,
}

impl FormattedDistance {
    pub fn from_miles(miles: Miles) -> Self {
        if miles < FEET_DISPLAY_THRESHOLD {
            Self {
                value: (miles * FEET_PER_MILE).round(),
                unit: DistanceUnit::Feet,
            }
        } else {
            Self {
                value: miles,
                unit: DistanceUnit::Miles,
            }
        }
    }
}

impl fmt::Display for FormattedDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            DistanceUnit::Feet => write!(f, "{:.0} ft", self.value),
            DistanceUnit::Miles => write!(f, "{:.2} mi", self.value),
        }
    }
}

/// Walking distance and time derived from one raw mile value.
///
/// Every view that shows a distance goes through this type so that the
/// displayed distance and the minute count never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "EstimateRepr")]
pub struct WalkingEstimate {
    pub miles: Miles,
    pub distance: FormattedDistance,
    /// Never less than one
    pub minutes: Minutes,
}

impl WalkingEstimate {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_miles(miles: Miles) -> Self {
        let minutes = (miles * WALKING_MINUTES_PER_MILE).round().max(0.0) as Minutes;
        Self {
            miles,
            distance: FormattedDistance::from_miles(miles),
            minutes: minutes.max(1),
        }
    }

    pub fn between(from: Coordinates, to: Coordinates) -> Self {
        Self::from_miles(haversine_miles(from, to))
    }

    /// e.g. `146 ft` or `0.42 mi`
    pub fn distance_label(&self) -> String {
        self.distance.to_string()
    }

    /// e.g. `3 min`
    pub fn duration_label(&self) -> String {
        format!("{} min", self.minutes)
    }
}

#[derive(Serialize)]
struct EstimateRepr {
    miles: Miles,
    value: f64,
    unit: DistanceUnit,
    distance: String,
    minutes: Minutes,
    duration: String,
}

impl From<WalkingEstimate> for EstimateRepr {
    fn from(estimate: WalkingEstimate) -> Self {
        Self {
            miles: estimate.miles,
            value: estimate.distance.value,
            unit: estimate.distance.unit,
            distance: estimate.distance_label(),
            minutes: estimate.minutes,
            duration: estimate.duration_label(),
        }
    }
}
