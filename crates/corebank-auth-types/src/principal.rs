//! The authenticated actor and its role.

use std::fmt;
use std::str::FromStr;

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;
use serde::{Deserialize, Serialize};

/// Account role. Stored as a flat string in the database but treated as a
/// closed enumeration everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,
    Employee,
    Manager,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "CUSTOMER",
            Role::Employee => "EMPLOYEE",
            Role::Manager => "MANAGER",
        }
    }

    /// Managers hold every employee privilege, so both count as staff.
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Employee | Role::Manager)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CUSTOMER" => Ok(Role::Customer),
            "EMPLOYEE" => Ok(Role::Employee),
            "MANAGER" => Ok(Role::Manager),
            other => Err(ParseRoleError(other.to_owned())),
        }
    }
}

/// The resolved actor for a request. Inserted into request extensions by the
/// service's authentication middleware; handlers receive it as an extractor
/// argument, never through any ambient lookup.
#[derive(Debug, Clone)]
pub struct Principal {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 declares this as `fn -> impl Future + Send`; writing it as
    // `async fn` captures the parts lifetime and fails with E0195. Extract
    // synchronously and return a 'static future.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let principal = parts.extensions.get::<Principal>().cloned();
        async move { principal.ok_or(StatusCode::UNAUTHORIZED) }
    }
}
