use sea_orm::DatabaseConnection;

use crate::infra::{
    DbCustomerRepository, DbEmployeeRepository, DbLoanRepository, DbLockerRepository,
    DbOfferingRepository,
};

/// Shared application state. The connection is a pool handle, so cloning the
/// state per request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn customer_repo(&self) -> DbCustomerRepository {
        DbCustomerRepository {
            db: self.db.clone(),
        }
    }

    pub fn employee_repo(&self) -> DbEmployeeRepository {
        DbEmployeeRepository {
            db: self.db.clone(),
        }
    }

    pub fn offering_repo(&self) -> DbOfferingRepository {
        DbOfferingRepository {
            db: self.db.clone(),
        }
    }

    pub fn loan_repo(&self) -> DbLoanRepository {
        DbLoanRepository {
            db: self.db.clone(),
        }
    }

    pub fn locker_repo(&self) -> DbLockerRepository {
        DbLockerRepository {
            db: self.db.clone(),
        }
    }
}
