//! Course domain entities

use serde::{Deserialize, Serialize};

/// Unique identifier for a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(u32);

impl CourseId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CourseId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A course in the catalog. Courses are seeded at startup and read-only
/// through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    /// Catalog code, e.g. "CS101"
    pub code: String,
    pub credits: u32,
    pub instructor: String,
}

impl Course {
    pub fn new(
        id: impl Into<CourseId>,
        name: impl Into<String>,
        code: impl Into<String>,
        credits: u32,
        instructor: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: code.into(),
            credits,
            instructor: instructor.into(),
        }
    }
}
