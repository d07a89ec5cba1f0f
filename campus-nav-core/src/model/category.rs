//! Building categories and their display metadata

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Fixed classification tag for a building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Academic,
    Administrative,
    Athletics,
    Dining,
    Library,
    Parking,
    Residence,
    StudentServices,
    Health,
}

/// Label, icon glyph and color token shown for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Academic,
        Category::Administrative,
        Category::Athletics,
        Category::Dining,
        Category::Library,
        Category::Parking,
        Category::Residence,
        Category::StudentServices,
        Category::Health,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Academic => "academic",
            Category::Administrative => "administrative",
            Category::Athletics => "athletics",
            Category::Dining => "dining",
            Category::Library => "library",
            Category::Parking => "parking",
            Category::Residence => "residence",
            Category::StudentServices => "student-services",
            Category::Health => "health",
        }
    }

    pub const fn info(self) -> CategoryInfo {
        let (label, icon, color) = match self {
            Category::Academic => ("Academic", "🎓", "primary"),
            Category::Administrative => ("Administrative", "🏛️", "muted"),
            Category::Athletics => ("Athletics", "🏃", "success"),
            Category::Dining => ("Dining", "🍽️", "warning"),
            Category::Library => ("Library", "📚", "accent"),
            Category::Parking => ("Parking", "🅿️", "muted"),
            Category::Residence => ("Residence", "🏠", "secondary"),
            Category::StudentServices => ("Student Services", "👥", "primary"),
            Category::Health => ("Health", "🏥", "destructive"),
        };
        CategoryInfo { label, icon, color }
    }

    pub const fn label(self) -> &'static str {
        self.info().label
    }

    pub const fn icon(self) -> &'static str {
        self.info().icon
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| Error::InvalidData(format!("Unknown building category: {s}")))
    }
}
