//! Agent and user models.

use serde::{Deserialize, Serialize};

use crate::board::Identified;

use super::Role;

/// A sales agent managed through the agents endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// Unique identifier, assigned by the backend at creation
    pub id: String,

    /// Display name; leads and tasks reference agents by this name
    pub name: String,

    /// Contact email, also the login identifier
    pub email: String,

    /// Avatar URL; the backend fills in a generated one when empty
    #[serde(default)]
    pub avatar: String,

    /// Free-text job title, e.g. "Sales Executive"
    pub role: String,
}

impl Identified for Agent {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A signed-in user resolved from a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: String,
    /// Access role: admins see everything, agents only their own records
    pub role: Role,
}
