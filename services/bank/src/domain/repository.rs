#![allow(async_fn_in_trait)]

use corebank_auth_types::principal::Role;

use crate::domain::types::{
    Customer, CustomerProfile, Employee, EmployeeProfile, Loan, Locker, NewLoan, NewLocker,
    Offering,
};
use crate::error::BankServiceError;

/// Repository for customer accounts.
pub trait CustomerRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, BankServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, BankServiceError>;
    async fn find_all(&self) -> Result<Vec<Customer>, BankServiceError>;

    /// Insert a bare account row. `Ok(None)` if the email is already taken.
    async fn register(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Option<i64>, BankServiceError>;

    /// Overwrite the profile columns of an existing row. Email, password and
    /// role are never touched by this call.
    async fn save_profile(
        &self,
        id: i64,
        profile: &CustomerProfile,
    ) -> Result<(), BankServiceError>;

    /// Delete a customer. Returns `true` if a row was deleted. The offering
    /// and its children go with it via foreign-key cascade.
    async fn delete_by_id(&self, id: i64) -> Result<bool, BankServiceError>;
}

/// Repository for employee accounts.
pub trait EmployeeRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, BankServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, BankServiceError>;
    async fn find_all(&self) -> Result<Vec<Employee>, BankServiceError>;

    /// Insert a bare account row. `Ok(None)` if the email is already taken.
    async fn register(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Option<i64>, BankServiceError>;

    async fn save_profile(
        &self,
        id: i64,
        profile: &EmployeeProfile,
    ) -> Result<(), BankServiceError>;

    async fn delete_by_id(&self, id: i64) -> Result<bool, BankServiceError>;
}

/// Repository for offering aggregate roots.
pub trait OfferingRepository: Send + Sync {
    async fn find_by_customer_id(
        &self,
        customer_id: i64,
    ) -> Result<Option<Offering>, BankServiceError>;

    /// Create the offering and its initial children in one transaction.
    /// `Ok(None)` if the customer already has an offering.
    async fn create_with_children(
        &self,
        customer_id: i64,
        loans: &[NewLoan],
        lockers: &[NewLocker],
    ) -> Result<Option<i64>, BankServiceError>;
}

/// Repository for loans.
pub trait LoanRepository: Send + Sync {
    async fn find_by_number(&self, number: i64) -> Result<Option<Loan>, BankServiceError>;
    async fn exists_by_number(&self, number: i64) -> Result<bool, BankServiceError>;
    async fn list_by_offering(&self, offering_id: i64) -> Result<Vec<Loan>, BankServiceError>;

    /// Conflict-guarded insert. Returns `false` when the number is already
    /// taken, so a concurrent duplicate submission cannot slip past the
    /// uniqueness pre-check.
    async fn insert(&self, offering_id: i64, loan: &NewLoan) -> Result<bool, BankServiceError>;

    /// Overwrite the one mutable field. Identity and parent linkage are
    /// immutable after creation.
    async fn update_amount(&self, number: i64, amount: i64) -> Result<(), BankServiceError>;

    /// Delete by unique number. Returns `true` if a row was deleted.
    async fn delete_by_number(&self, number: i64) -> Result<bool, BankServiceError>;
}

/// Repository for lockers.
pub trait LockerRepository: Send + Sync {
    async fn find_by_number(&self, number: i64) -> Result<Option<Locker>, BankServiceError>;
    async fn exists_by_number(&self, number: i64) -> Result<bool, BankServiceError>;
    async fn list_by_offering(&self, offering_id: i64) -> Result<Vec<Locker>, BankServiceError>;

    /// Conflict-guarded insert; `false` when the number is already taken.
    async fn insert(&self, offering_id: i64, locker: &NewLocker)
    -> Result<bool, BankServiceError>;

    async fn update_details(
        &self,
        number: i64,
        account_number: i64,
        branch_code: i64,
    ) -> Result<(), BankServiceError>;

    async fn delete_by_number(&self, number: i64) -> Result<bool, BankServiceError>;
}
