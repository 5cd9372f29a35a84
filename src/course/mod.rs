//! Course record normalization
//!
//! Turns raw course listings into the records stored in the search index.
//!
//! # Rules
//!
//! - **Course number**: `"106A"` becomes `numberInt = 106`, `numberSuffix = "A"`
//! - **Reviews and ratings**: joined from the lookup tables by `objectID`
//! - **Sections**: `CLK` sections dropped, lecture-only filtering when both
//!   lectures and discussions are listed
//! - **Size reduction**: section notes and schedule times removed
//! - **GER tags**: `way_ce` normalized to `WAY-CE`

mod normalize;
mod types;

pub use normalize::{normalize_course, normalize_ger, split_course_code, CourseNumber};
pub use types::{
    CourseRecord, IndexedCourse, IndexedSchedule, IndexedSection, Schedule, Section,
};
