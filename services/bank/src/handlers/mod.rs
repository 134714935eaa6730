pub mod customer;
pub mod employee;
pub mod loan;
pub mod locker;
pub mod offering;

use serde::{Deserialize, Serialize};

/// Body of the unauthenticated register endpoints.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisteredResponse {
    pub id: i64,
}
