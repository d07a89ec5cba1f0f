//! Compiled-in dataset for the LSUS campus

use crate::{
    Error,
    model::{Building, Campus, Category, Coordinates, PathNode},
};

pub const CAMPUS_NAME: &str = "Louisiana State University Shreveport";
pub const CAMPUS_CENTER: Coordinates = Coordinates::new(32.4518, -93.7275);
pub const DEFAULT_ZOOM: u8 = 17;

/// Static building record, converted into an owned `Building` at startup
struct RawBuilding {
    id: &'static str,
    name: &'static str,
    short_name: &'static str,
    category: Category,
    description: &'static str,
    coordinates: (f64, f64),
    amenities: &'static [&'static str],
    hours: Option<&'static str>,
    departments: &'static [&'static str],
}

impl From<&RawBuilding> for Building {
    fn from(raw: &RawBuilding) -> Self {
        let owned = |items: &[&str]| items.iter().map(ToString::to_string).collect::<Vec<_>>();
        Building {
            id: raw.id.to_string(),
            name: raw.name.to_string(),
            short_name: raw.short_name.to_string(),
            category: raw.category,
            description: raw.description.to_string(),
            coordinates: raw.coordinates.into(),
            amenities: owned(raw.amenities),
            hours: raw.hours.map(ToString::to_string),
            address: None,
            departments: (!raw.departments.is_empty()).then(|| owned(raw.departments)),
            image: None,
        }
    }
}

struct RawPathNode {
    id: &'static str,
    coordinates: (f64, f64),
    connected_to: &'static [&'static str],
}

/// Build the compiled-in campus
///
/// # Errors
///
/// Only fails if the static table itself is inconsistent
pub fn builtin_campus() -> Result<Campus, Error> {
    let buildings = BUILDINGS.iter().map(Building::from).collect();
    let path_nodes = PATH_NODES
        .iter()
        .map(|raw| PathNode {
            id: raw.id.to_string(),
            coordinates: raw.coordinates.into(),
            connected_to: raw.connected_to.iter().map(ToString::to_string).collect(),
        })
        .collect();

    Campus::new(CAMPUS_NAME, CAMPUS_CENTER, DEFAULT_ZOOM, buildings, path_nodes)
}

static BUILDINGS: [RawBuilding; 15] = [
    RawBuilding {
        id: "administration",
        name: "Administration Building",
        short_name: "Admin",
        category: Category::Administrative,
        description: "Main administrative offices including the Chancellor's office, Admissions, Financial Aid, and Registrar.",
        coordinates: (32.4525, -93.7268),
        amenities: &["Restrooms", "Accessible Entrance", "ATM"],
        hours: Some("Mon-Fri: 8:00 AM - 5:00 PM"),
        departments: &["Admissions", "Financial Aid", "Registrar", "Chancellor's Office"],
    },
    RawBuilding {
        id: "bronson-hall",
        name: "Bronson Hall",
        short_name: "Bronson",
        category: Category::Academic,
        description: "Home to the College of Sciences with laboratories and lecture halls for Biology, Chemistry, and Physics.",
        coordinates: (32.4520, -93.7260),
        amenities: &["Labs", "Study Rooms", "Restrooms", "Vending"],
        hours: Some("Mon-Fri: 7:00 AM - 10:00 PM"),
        departments: &["Biology", "Chemistry", "Physics"],
    },
    RawBuilding {
        id: "business-education",
        name: "Business Education Building",
        short_name: "BE",
        category: Category::Academic,
        description: "College of Business featuring classrooms, computer labs, and faculty offices.",
        coordinates: (32.4515, -93.7280),
        amenities: &["Computer Labs", "Study Areas", "Restrooms"],
        hours: Some("Mon-Fri: 7:00 AM - 10:00 PM"),
        departments: &["Accounting", "Management", "Marketing", "Finance"],
    },
    RawBuilding {
        id: "technology-center",
        name: "Technology Center",
        short_name: "Tech",
        category: Category::Academic,
        description: "State-of-the-art facility housing Computer Science, Engineering, and IT programs.",
        coordinates: (32.4510, -93.7265),
        amenities: &["Computer Labs", "Maker Space", "Study Rooms", "Restrooms"],
        hours: Some("Mon-Fri: 7:00 AM - 11:00 PM, Sat: 9:00 AM - 5:00 PM"),
        departments: &["Computer Science", "Engineering", "Information Technology"],
    },
    RawBuilding {
        id: "noel-memorial-library",
        name: "Noel Memorial Library",
        short_name: "Library",
        category: Category::Library,
        description: "The main campus library with extensive collections, study spaces, and research assistance.",
        coordinates: (32.4522, -93.7275),
        amenities: &["Study Rooms", "Computers", "Printing", "Coffee Shop", "Quiet Zones"],
        hours: Some("Mon-Thu: 7:30 AM - 11:00 PM, Fri: 7:30 AM - 5:00 PM, Sat-Sun: 1:00 PM - 9:00 PM"),
        departments: &[],
    },
    RawBuilding {
        id: "university-center",
        name: "University Center",
        short_name: "UC",
        category: Category::StudentServices,
        description: "The hub of student life with dining, bookstore, student organizations, and event spaces.",
        coordinates: (32.4518, -93.7282),
        amenities: &["Food Court", "Bookstore", "Meeting Rooms", "ATM", "Restrooms"],
        hours: Some("Mon-Fri: 7:00 AM - 9:00 PM, Sat: 10:00 AM - 4:00 PM"),
        departments: &[],
    },
    RawBuilding {
        id: "pilots-cafe",
        name: "Pilot's Café",
        short_name: "Café",
        category: Category::Dining,
        description: "Main campus dining facility offering a variety of meal options and grab-and-go items.",
        coordinates: (32.4517, -93.7285),
        amenities: &["Seating", "Meal Plans Accepted", "Vegetarian Options"],
        hours: Some("Mon-Fri: 7:00 AM - 7:00 PM, Sat: 11:00 AM - 2:00 PM"),
        departments: &[],
    },
    RawBuilding {
        id: "health-pe-complex",
        name: "Health & Physical Education Complex",
        short_name: "HPE",
        category: Category::Athletics,
        description: "Athletic facilities including gymnasium, fitness center, and athletic offices.",
        coordinates: (32.4508, -93.7290),
        amenities: &["Gym", "Fitness Center", "Locker Rooms", "Basketball Courts"],
        hours: Some("Mon-Fri: 6:00 AM - 10:00 PM, Sat: 8:00 AM - 6:00 PM"),
        departments: &[],
    },
    RawBuilding {
        id: "science-building",
        name: "Science Building",
        short_name: "Science",
        category: Category::Academic,
        description: "Additional science classrooms and laboratories supporting STEM programs.",
        coordinates: (32.4528, -93.7258),
        amenities: &["Labs", "Lecture Halls", "Restrooms"],
        hours: Some("Mon-Fri: 7:00 AM - 10:00 PM"),
        departments: &["Mathematics", "Environmental Science"],
    },
    RawBuilding {
        id: "performing-arts",
        name: "Performing Arts Center",
        short_name: "PAC",
        category: Category::Academic,
        description: "Home to Music, Theatre, and Fine Arts with performance venues and practice rooms.",
        coordinates: (32.4530, -93.7278),
        amenities: &["Theatre", "Practice Rooms", "Gallery", "Box Office"],
        hours: Some("Mon-Fri: 8:00 AM - 10:00 PM"),
        departments: &["Music", "Theatre", "Fine Arts"],
    },
    RawBuilding {
        id: "student-success-center",
        name: "Student Success Center",
        short_name: "SSC",
        category: Category::StudentServices,
        description: "Academic support services including tutoring, advising, and career counseling.",
        coordinates: (32.4512, -93.7272),
        amenities: &["Tutoring", "Computer Access", "Advising Offices", "Testing Center"],
        hours: Some("Mon-Fri: 8:00 AM - 6:00 PM"),
        departments: &[],
    },
    RawBuilding {
        id: "health-clinic",
        name: "Student Health Clinic",
        short_name: "Health",
        category: Category::Health,
        description: "On-campus health services for students including basic medical care and wellness resources.",
        coordinates: (32.4505, -93.7278),
        amenities: &["Medical Services", "Counseling", "Wellness Programs"],
        hours: Some("Mon-Fri: 8:00 AM - 4:30 PM"),
        departments: &[],
    },
    RawBuilding {
        id: "lot-a",
        name: "Parking Lot A",
        short_name: "Lot A",
        category: Category::Parking,
        description: "Main student parking lot near the University Center.",
        coordinates: (32.4502, -93.7285),
        amenities: &["Accessible Spaces", "Motorcycle Parking"],
        hours: None,
        departments: &[],
    },
    RawBuilding {
        id: "lot-b",
        name: "Parking Lot B",
        short_name: "Lot B",
        category: Category::Parking,
        description: "Parking lot near academic buildings.",
        coordinates: (32.4535, -93.7265),
        amenities: &["Accessible Spaces"],
        hours: None,
        departments: &[],
    },
    RawBuilding {
        id: "pilot-field",
        name: "Pilot Field",
        short_name: "Field",
        category: Category::Athletics,
        description: "Outdoor athletic field for intramural sports and recreation.",
        coordinates: (32.4498, -93.7295),
        amenities: &["Bleachers", "Restrooms", "Water Fountains"],
        hours: None,
        departments: &[],
    },
];

// Simplified walkway network; not used for routing
static PATH_NODES: [RawPathNode; 10] = [
    RawPathNode { id: "node-1", coordinates: (32.4525, -93.7268), connected_to: &["node-2", "node-5"] },
    RawPathNode { id: "node-2", coordinates: (32.4520, -93.7268), connected_to: &["node-1", "node-3", "node-6"] },
    RawPathNode { id: "node-3", coordinates: (32.4518, -93.7275), connected_to: &["node-2", "node-4", "node-7"] },
    RawPathNode { id: "node-4", coordinates: (32.4518, -93.7282), connected_to: &["node-3", "node-8"] },
    RawPathNode { id: "node-5", coordinates: (32.4528, -93.7260), connected_to: &["node-1", "node-6"] },
    RawPathNode { id: "node-6", coordinates: (32.4520, -93.7260), connected_to: &["node-2", "node-5"] },
    RawPathNode { id: "node-7", coordinates: (32.4512, -93.7275), connected_to: &["node-3", "node-8", "node-9"] },
    RawPathNode { id: "node-8", coordinates: (32.4510, -93.7282), connected_to: &["node-4", "node-7"] },
    RawPathNode { id: "node-9", coordinates: (32.4505, -93.7278), connected_to: &["node-7", "node-10"] },
    RawPathNode { id: "node-10", coordinates: (32.4502, -93.7285), connected_to: &["node-9"] },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_campus_is_consistent() {
        let campus = builtin_campus().unwrap();
        assert_eq!(campus.len(), 15);
        assert_eq!(campus.center(), CAMPUS_CENTER);
        assert_eq!(campus.default_zoom(), 17);

        for building in campus.buildings() {
            assert!(building.opening_hours().is_ok(), "{}", building.id);
        }
    }

    #[test]
    fn builtin_walkways_are_symmetric_and_connected() {
        let campus = builtin_campus().unwrap();
        let walkways = campus.walkways();
        assert_eq!(walkways.node_count(), 10);
        assert_eq!(walkways.edge_count(), 11);
        assert!(walkways.asymmetric_links().is_empty());
        assert!(walkways.dangling_links().is_empty());
        assert_eq!(walkways.component_count(), 1);
    }

    #[test]
    fn optional_fields_stay_absent() {
        let campus = builtin_campus().unwrap();
        let lot = campus.get_building_by_id("lot-a").unwrap();
        assert!(lot.hours.is_none());
        assert!(lot.departments.is_none());
        assert!(lot.quick_hours().is_none());
    }
}
