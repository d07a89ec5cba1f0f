//! Building records and the coordinate type shared by the whole crate

use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

use super::{Category, OpeningHours};
use crate::Error;

/// A latitude/longitude pair in decimal degrees (WGS-84).
///
/// Serialized as a `[lat, lon]` array. Note the order is the reverse of
/// `geo::Point`, which stores longitude as `x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Finite values within the valid latitude/longitude ranges
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Returns the coordinates unchanged if they are usable for distance math
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCoordinates` for NaN, infinite or out-of-range values
    pub fn validate(self) -> Result<Self, Error> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(Error::InvalidCoordinates {
                lat: self.lat,
                lon: self.lon,
            })
        }
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl From<Coordinates> for (f64, f64) {
    fn from(c: Coordinates) -> Self {
        (c.lat, c.lon)
    }
}

impl From<Coordinates> for Point<f64> {
    fn from(c: Coordinates) -> Self {
        Point::new(c.lon, c.lat)
    }
}

impl From<Coordinates> for Coord<f64> {
    fn from(c: Coordinates) -> Self {
        Coord { x: c.lon, y: c.lat }
    }
}

impl From<Point<f64>> for Coordinates {
    fn from(p: Point<f64>) -> Self {
        Self {
            lat: p.y(),
            lon: p.x(),
        }
    }
}

/// Campus building
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    /// Unique, stable identifier
    pub id: String,
    pub name: String,
    /// Abbreviated name, may equal `name`
    pub short_name: String,
    pub category: Category,
    pub description: String,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Comma-separated day ranges, e.g. `Mon-Fri: 8:00 AM - 5:00 PM, Sat: 9:00 AM - 1:00 PM`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departments: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Building {
    /// First segment of `hours`, shown as the building's hours at a glance
    pub fn quick_hours(&self) -> Option<&str> {
        self.hours
            .as_deref()
            .and_then(|hours| hours.split(',').next())
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
    }

    /// Parsed opening hours, `None` when the building has no hours listed
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidHours` if the hours string does not parse
    pub fn opening_hours(&self) -> Result<Option<OpeningHours>, Error> {
        self.hours.as_deref().map(OpeningHours::parse).transpose()
    }

    pub fn departments(&self) -> &[String] {
        self.departments.as_deref().unwrap_or(&[])
    }

    pub fn has_distinct_short_name(&self) -> bool {
        self.short_name != self.name
    }

    pub fn location(&self) -> Point<f64> {
        self.coordinates.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Building {
        Building {
            id: "technology-center".to_string(),
            name: "Technology Center".to_string(),
            short_name: "Tech".to_string(),
            category: Category::Academic,
            description: "Computer Science and Engineering".to_string(),
            coordinates: Coordinates::new(32.4510, -93.7265),
            amenities: vec!["Maker Space".to_string()],
            hours: Some("Mon-Fri: 7:00 AM - 11:00 PM, Sat: 9:00 AM - 5:00 PM".to_string()),
            address: None,
            departments: None,
            image: None,
        }
    }

    #[test]
    fn quick_hours_is_first_segment() {
        let building = sample();
        assert_eq!(building.quick_hours(), Some("Mon-Fri: 7:00 AM - 11:00 PM"));
    }

    #[test]
    fn missing_departments_are_empty() {
        assert!(sample().departments().is_empty());
    }

    #[test]
    fn coordinates_roundtrip_as_lat_lon_array() {
        let json = serde_json::to_string(&Coordinates::new(32.4522, -93.7275)).unwrap();
        assert_eq!(json, "[32.4522,-93.7275]");

        let building = sample();
        let value = serde_json::to_value(&building).unwrap();
        assert_eq!(value["shortName"], "Tech");
        assert!(value.get("departments").is_none());
        let back: Building = serde_json::from_value(value).unwrap();
        assert_eq!(back, building);
    }

    #[test]
    fn point_conversion_swaps_axes() {
        let point: Point<f64> = Coordinates::new(32.0, -93.0).into();
        assert_eq!(point.x(), -93.0);
        assert_eq!(point.y(), 32.0);
        assert_eq!(Coordinates::from(point), Coordinates::new(32.0, -93.0));
    }

    #[test]
    fn rejects_non_finite_and_out_of_range() {
        assert!(Coordinates::new(f64::NAN, 0.0).validate().is_err());
        assert!(Coordinates::new(0.0, f64::INFINITY).validate().is_err());
        assert!(Coordinates::new(91.0, 0.0).validate().is_err());
        assert!(Coordinates::new(0.0, -180.5).validate().is_err());
        assert!(Coordinates::new(32.4518, -93.7275).validate().is_ok());
    }
}
