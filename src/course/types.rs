//! Course record types
//!
//! Input types mirror the scraped course JSON. Fields the normalizer does not
//! touch are kept in a flattened map and written back unchanged.

use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};

// ============================================================================
// Input
// ============================================================================

/// A raw course listing as scraped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    /// Unique key in the index and in the lookup tables
    #[serde(rename = "objectID")]
    pub object_id: String,
    /// Course code, e.g. "106A"
    pub code: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_sections: Option<u64>,
    #[serde(default)]
    pub gers: Vec<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// A single offering of a course (lecture, discussion, lab, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Category tag such as "LEC", "DIS" or "CLK"
    pub component: String,
    /// Stringified integer
    pub current_class_size: JsonValue,
    /// Stringified integer
    pub max_class_size: JsonValue,
    #[serde(default)]
    pub schedules: Vec<Schedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<JsonValue>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Meeting pattern of a section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<JsonValue>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

// ============================================================================
// Output
// ============================================================================

/// A course record ready for the search index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedCourse {
    #[serde(rename = "objectID")]
    pub object_id: String,
    pub code: String,
    pub number_int: u64,
    pub number_suffix: String,
    pub num_reviews: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_score_normalized: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_score_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_history: Option<Vec<JsonValue>>,
    pub sections: Vec<IndexedSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_sections: Option<u64>,
    /// Present (and true) only when sections were dropped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub too_many_sections: Option<bool>,
    /// Present (and true) only when non-lecture sections were filtered out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_lecture_only: Option<bool>,
    pub gers: Vec<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// A section with sizes coerced to integers and notes removed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedSection {
    pub component: String,
    pub current_class_size: i64,
    pub max_class_size: i64,
    pub schedules: Vec<IndexedSchedule>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// A schedule without start and end times
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedSchedule {
    #[serde(flatten)]
    pub extra: JsonObject,
}
