//! Data model for the campus catalog
//!
//! Buildings, their categories and opening hours, the walkway graph and the
//! `Campus` container that indexes all of them.

pub mod building;
pub mod campus;
pub mod category;
pub mod hours;
mod to_geojson;
pub mod walkway;

pub use building::{Building, Coordinates};
pub use campus::{Campus, IndexedPoint};
pub use category::{Category, CategoryInfo};
pub use hours::{HoursSegment, OpeningHours};
pub use walkway::{PathNode, WalkwayNetwork};
