//! Derived statistics over the student and course collections

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::course::Course;
use super::student::Student;

/// Aggregate counts derived from the current collection contents.
///
/// Ordered maps keep the serialized output deterministic; year keys become
/// JSON object keys (strings) on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversityStats {
    pub total_students: usize,
    pub total_courses: usize,
    pub students_by_major: BTreeMap<String, usize>,
    pub students_by_year: BTreeMap<i32, usize>,
}

impl UniversityStats {
    /// Computes statistics from the live collections. Pure, always succeeds;
    /// empty collections yield zero totals and empty maps.
    pub fn compute(students: &[Student], courses: &[Course]) -> Self {
        let mut students_by_major: BTreeMap<String, usize> = BTreeMap::new();
        let mut students_by_year: BTreeMap<i32, usize> = BTreeMap::new();

        for student in students {
            *students_by_major.entry(student.major.clone()).or_default() += 1;
            *students_by_year.entry(student.year).or_default() += 1;
        }

        Self {
            total_students: students.len(),
            total_courses: courses.len(),
            students_by_major,
            students_by_year,
        }
    }
}
