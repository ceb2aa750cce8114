use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::user;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// The resolved caller of an authenticated request.
///
/// Inserted into request extensions by [`authenticate`](super::authenticate)
/// and read back by handlers with `Extension<Identity>`. The role is whatever
/// the credential claimed at issue time; privileged checks re-read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub subject_id: i64,
    pub role: Role,
}

impl Identity {
    pub fn of(user: &user::Model) -> Self {
        Self {
            subject_id: user.id,
            role: user.role(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
