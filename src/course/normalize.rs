//! Course normalization rules

use super::types::{
    CourseRecord, IndexedCourse, IndexedSchedule, IndexedSection, Schedule, Section,
};
use crate::error::{Error, Result};
use crate::lookup::LookupTables;
use crate::types::JsonValue;

/// Section component for clock (time-tracking) sections, never indexed
const CLOCK: &str = "CLK";
const LECTURE: &str = "LEC";
const DISCUSSION: &str = "DIS";

/// Output keys derived by the normalizer. Input values under these keys are
/// discarded so they cannot shadow the derived ones.
const DERIVED_FIELDS: &[&str] = &[
    "numberInt",
    "numberSuffix",
    "numReviews",
    "currentScore",
    "currentScoreNormalized",
    "currentScoreCount",
    "scoreHistory",
    "tooManySections",
    "filterLectureOnly",
];

/// Numeric part of a course code and what remains around it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseNumber {
    pub number: u64,
    pub suffix: String,
}

/// Split a course code into its leading number and the rest.
///
/// The leading run of ASCII digits is parsed as the number. The suffix is the
/// code with the first occurrence of that number's decimal form removed, so
/// `"106A"` gives `(106, "A")` and `"007A"` gives `(7, "00A")`.
pub fn split_course_code(code: &str) -> Result<CourseNumber> {
    let digits_end = code
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(code.len(), |(i, _)| i);

    let digits = &code[..digits_end];
    if digits.is_empty() {
        return Err(Error::malformed_code(code));
    }

    let number: u64 = digits.parse().map_err(|_| Error::malformed_code(code))?;
    let suffix = code.replacen(&number.to_string(), "", 1);

    Ok(CourseNumber { number, suffix })
}

/// Normalize a general education requirement tag
pub fn normalize_ger(ger: &str) -> String {
    match ger {
        "way_ce" => "WAY-CE".to_string(),
        other => other.to_string(),
    }
}

/// Build the indexed form of a course record.
///
/// The input is left untouched. Fails if the course code has no leading
/// number or a kept section has a non-numeric size.
pub fn normalize_course(record: &CourseRecord, tables: &LookupTables) -> Result<IndexedCourse> {
    let CourseNumber { number, suffix } = split_course_code(&record.code)?;

    let rating = tables.rating(&record.object_id);

    let mut kept: Vec<&Section> = record
        .sections
        .iter()
        .filter(|s| s.component != CLOCK)
        .collect();

    let too_many_sections = record.total_sections.unwrap_or(0) > kept.len() as u64;

    let filter_lecture_only = kept.iter().any(|s| s.component == LECTURE)
        && kept.iter().any(|s| s.component == DISCUSSION);
    if filter_lecture_only {
        kept.retain(|s| s.component == LECTURE);
    }

    let sections = kept
        .into_iter()
        .map(|s| reduce_section(&record.object_id, s))
        .collect::<Result<Vec<_>>>()?;

    let mut extra = record.extra.clone();
    for key in DERIVED_FIELDS {
        extra.remove(*key);
    }

    Ok(IndexedCourse {
        object_id: record.object_id.clone(),
        code: record.code.clone(),
        number_int: number,
        number_suffix: suffix,
        num_reviews: tables.review_count(&record.object_id),
        current_score: rating.map(|r| r.current_score),
        current_score_normalized: rating.map(|r| r.current_score_normalized),
        current_score_count: rating.map(|r| r.current_score_count),
        score_history: rating.map(|r| r.scores.clone()),
        sections,
        total_sections: record.total_sections,
        too_many_sections: too_many_sections.then_some(true),
        filter_lecture_only: filter_lecture_only.then_some(true),
        gers: record.gers.iter().map(|g| normalize_ger(g)).collect(),
        extra,
    })
}

fn reduce_section(object_id: &str, section: &Section) -> Result<IndexedSection> {
    Ok(IndexedSection {
        component: section.component.clone(),
        current_class_size: parse_size(object_id, "currentClassSize", &section.current_class_size)?,
        max_class_size: parse_size(object_id, "maxClassSize", &section.max_class_size)?,
        schedules: section.schedules.iter().map(reduce_schedule).collect(),
        extra: section.extra.clone(),
    })
}

// Start and end times are dropped from the index.
fn reduce_schedule(schedule: &Schedule) -> IndexedSchedule {
    IndexedSchedule {
        extra: schedule.extra.clone(),
    }
}

fn parse_size(object_id: &str, field: &str, value: &JsonValue) -> Result<i64> {
    let parsed = match value {
        JsonValue::Number(n) => n.as_i64(),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| {
        let shown = match value {
            JsonValue::String(s) => s.clone(),
            other => other.to_string(),
        };
        Error::invalid_section_size(object_id, field, shown)
    })
}
