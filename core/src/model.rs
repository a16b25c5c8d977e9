use crate::types::EmployeeId;
use serde::{Deserialize, Serialize};

/// A single employee as delivered by the backend.
///
/// Only `id` and `name` participate in matching; `profile` is carried
/// opaquely for the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub name: String,
    #[serde(default)]
    pub profile: Profile,
}

impl EmployeeRecord {
    pub fn new(id: EmployeeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            profile: Profile::default(),
        }
    }
}

/// Profile fields irrelevant to matching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
