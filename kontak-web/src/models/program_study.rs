//! Study program records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::parse_id;

/// Stored study program
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramStudy {
    pub id: Uuid,
    /// Unique across the collection
    pub name: String,
    pub faculty: String,
    pub accreditation: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Submitted study program form
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProgramStudyForm {
    /// Filled from the update path, never from the body
    #[serde(skip)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub faculty: String,
    #[serde(default)]
    pub accreditation: String,
}

impl ProgramStudyForm {
    pub fn normalized(self) -> Self {
        Self {
            id: self.id,
            name: self.name.trim().to_string(),
            faculty: self.faculty.trim().to_string(),
            accreditation: self.accreditation.trim().to_string(),
        }
    }

    /// Attach the surrogate id taken from the request path
    pub fn with_id(self, raw: &str) -> Self {
        Self {
            id: parse_id(raw),
            ..self
        }
    }

    pub fn own_id(&self) -> Option<Uuid> {
        self.id
    }
}

impl From<&ProgramStudy> for ProgramStudyForm {
    fn from(program: &ProgramStudy) -> Self {
        Self {
            id: Some(program.id),
            name: program.name.clone(),
            faculty: program.faculty.clone(),
            accreditation: program.accreditation.clone(),
        }
    }
}
