//! Activity archetype classification.
//!
//! Classifies a candidate item into one of a fixed set of activity
//! archetypes by scanning its category tags, then its free-text
//! description, against a keyword table. First match wins; there is no
//! scoring. Anything unclassifiable defaults to sightseeing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A fixed duration-estimation archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Sightseeing,
    Museum,
    Outdoor,
    Adventure,
    Food,
    Shopping,
    Entertainment,
    Cultural,
    Relaxation,
    Transportation,
    Tour,
}

impl ActivityType {
    /// Returns the snake_case wire name for this archetype.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Sightseeing => "sightseeing",
            ActivityType::Museum => "museum",
            ActivityType::Outdoor => "outdoor",
            ActivityType::Adventure => "adventure",
            ActivityType::Food => "food",
            ActivityType::Shopping => "shopping",
            ActivityType::Entertainment => "entertainment",
            ActivityType::Cultural => "cultural",
            ActivityType::Relaxation => "relaxation",
            ActivityType::Transportation => "transportation",
            ActivityType::Tour => "tour",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword table, scanned in order; the first keyword contained in a
/// category (or, failing that, in the description) decides the type.
///
/// More specific archetypes sit above sightseeing so that e.g. a
/// "museum, sightseeing" tag set classifies as museum.
const KEYWORDS: &[(&str, ActivityType)] = &[
    ("museum", ActivityType::Museum),
    ("gallery", ActivityType::Museum),
    ("exhibition", ActivityType::Museum),
    ("hiking", ActivityType::Outdoor),
    ("beach", ActivityType::Outdoor),
    ("park", ActivityType::Outdoor),
    ("garden", ActivityType::Outdoor),
    ("nature", ActivityType::Outdoor),
    ("outdoor", ActivityType::Outdoor),
    ("adventure", ActivityType::Adventure),
    ("climbing", ActivityType::Adventure),
    ("rafting", ActivityType::Adventure),
    ("diving", ActivityType::Adventure),
    ("safari", ActivityType::Adventure),
    ("food", ActivityType::Food),
    ("restaurant", ActivityType::Food),
    ("dining", ActivityType::Food),
    ("culinary", ActivityType::Food),
    ("tasting", ActivityType::Food),
    ("cafe", ActivityType::Food),
    ("shopping", ActivityType::Shopping),
    ("market", ActivityType::Shopping),
    ("mall", ActivityType::Shopping),
    ("boutique", ActivityType::Shopping),
    ("entertainment", ActivityType::Entertainment),
    ("show", ActivityType::Entertainment),
    ("concert", ActivityType::Entertainment),
    ("theater", ActivityType::Entertainment),
    ("theatre", ActivityType::Entertainment),
    ("nightlife", ActivityType::Entertainment),
    ("cultural", ActivityType::Cultural),
    ("culture", ActivityType::Cultural),
    ("temple", ActivityType::Cultural),
    ("church", ActivityType::Cultural),
    ("heritage", ActivityType::Cultural),
    ("historic", ActivityType::Cultural),
    ("spa", ActivityType::Relaxation),
    ("wellness", ActivityType::Relaxation),
    ("relaxation", ActivityType::Relaxation),
    ("massage", ActivityType::Relaxation),
    ("transfer", ActivityType::Transportation),
    ("transport", ActivityType::Transportation),
    ("transit", ActivityType::Transportation),
    ("shuttle", ActivityType::Transportation),
    ("tour", ActivityType::Tour),
    ("excursion", ActivityType::Tour),
    ("cruise", ActivityType::Tour),
    ("sightseeing", ActivityType::Sightseeing),
    ("landmark", ActivityType::Sightseeing),
    ("viewpoint", ActivityType::Sightseeing),
    ("monument", ActivityType::Sightseeing),
];

/// Classify an item from its category tags and description.
///
/// Categories are scanned first (case-insensitive substring match against
/// the keyword table), then the description; if neither matches anything,
/// the item defaults to sightseeing.
///
/// # Examples
///
/// ```
/// use trip_scheduler::estimate::{ActivityType, classify_activity};
///
/// let t = classify_activity(&["Hiking".to_string()], "");
/// assert_eq!(t, ActivityType::Outdoor);
///
/// assert_eq!(classify_activity(&[], ""), ActivityType::Sightseeing);
/// ```
pub fn classify_activity(categories: &[String], description: &str) -> ActivityType {
    let lowered: Vec<String> = categories.iter().map(|c| c.to_lowercase()).collect();

    for (keyword, activity_type) in KEYWORDS {
        if lowered.iter().any(|c| c.contains(keyword)) {
            return *activity_type;
        }
    }

    let description = description.to_lowercase();
    for (keyword, activity_type) in KEYWORDS {
        if description.contains(keyword) {
            return *activity_type;
        }
    }

    ActivityType::Sightseeing
}
