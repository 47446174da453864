//! User identity and role types.

use serde::{Deserialize, Serialize};

use crate::nav::Route;

/// Portal role. The backend and the persisted record use lowercase strings;
/// any other value is a deserialization error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Candidate,
    Recruiter,
}

impl Role {
    /// Landing route for this role after login.
    pub fn home_route(self) -> Route {
        match self {
            Role::Candidate => Route::CandidateHome,
            Role::Recruiter => Route::RecruiterHome,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Candidate => "candidate",
            Role::Recruiter => "recruiter",
        }
    }
}

/// The authenticated identity, as held in memory and persisted to the vault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Wire shape of a user in auth responses. Candidates carry `full_name`,
/// recruiters `company_name`; conversion picks the field matching the role.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
}

impl UserRecord {
    /// Convert to the domain type.
    pub fn into_user(self) -> User {
        let display_name = match self.role {
            Role::Candidate => self.full_name,
            Role::Recruiter => self.company_name,
        };
        User {
            id: self.id,
            email: self.email,
            role: self.role,
            display_name,
        }
    }
}
