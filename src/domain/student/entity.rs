//! Student domain entities

use serde::{Deserialize, Serialize};

/// Unique identifier for a student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(u32);

impl StudentId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StudentId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// An enrolled student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier, assigned by the repository
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub major: String,
    /// Enrollment year (1 = freshman)
    pub year: i32,
}

impl Student {
    pub fn new(
        id: impl Into<StudentId>,
        name: impl Into<String>,
        email: impl Into<String>,
        major: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            major: major.into(),
            year,
        }
    }

    /// Builds a student from a draft and a repository-assigned id
    pub fn from_draft(id: impl Into<StudentId>, draft: StudentDraft) -> Self {
        Self {
            id: id.into(),
            name: draft.name,
            email: draft.email,
            major: draft.major,
            year: draft.year,
        }
    }
}

/// Student fields without an identifier, as submitted by create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
    pub major: String,
    pub year: i32,
}

impl StudentDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        major: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            major: major.into(),
            year,
        }
    }
}
