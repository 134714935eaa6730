use corebank_auth_types::principal::{Principal, Role};

use crate::domain::repository::{CustomerRepository, EmployeeRepository};
use crate::domain::types::{Customer, CustomerProfile, validate_email};
use crate::error::BankServiceError;
use crate::usecase::access::authorize_customer;

// ── RegisterCustomer ─────────────────────────────────────────────────────────

pub struct RegisterCustomerInput {
    pub email: String,
    pub password: String,
}

/// Unauthenticated registration: creates a bare customer account from email
/// and password. The email space is shared with employees, so both tables
/// are consulted before inserting.
pub struct RegisterCustomerUseCase<C: CustomerRepository, E: EmployeeRepository> {
    pub customers: C,
    pub employees: E,
}

impl<C: CustomerRepository, E: EmployeeRepository> RegisterCustomerUseCase<C, E> {
    pub async fn execute(&self, input: RegisterCustomerInput) -> Result<i64, BankServiceError> {
        if !validate_email(&input.email) {
            return Err(BankServiceError::InvalidEmail);
        }
        if self.customers.find_by_email(&input.email).await?.is_some()
            || self.employees.find_by_email(&input.email).await?.is_some()
        {
            return Err(BankServiceError::EmailAlreadyRegistered);
        }
        self.customers
            .register(&input.email, &input.password, Role::Customer)
            .await?
            .ok_or(BankServiceError::EmailAlreadyRegistered)
    }
}

// ── CompleteCustomerProfile ──────────────────────────────────────────────────

pub struct CompleteCustomerProfileInput {
    pub id: i64,
    pub profile: CustomerProfile,
}

/// Second phase of the account lifecycle: fills in the domain data of a bare
/// registered account. Fails once the profile is already complete. The stored
/// email, password and role are never replaced by this path.
pub struct CompleteCustomerProfileUseCase<C: CustomerRepository> {
    pub customers: C,
}

impl<C: CustomerRepository> CompleteCustomerProfileUseCase<C> {
    pub async fn execute(
        &self,
        principal: &Principal,
        input: CompleteCustomerProfileInput,
    ) -> Result<(), BankServiceError> {
        if !input.profile.is_valid() {
            return Err(BankServiceError::ValidationFailed);
        }
        authorize_customer(&self.customers, principal, input.id).await?;

        let customer = self
            .customers
            .find_by_id(input.id)
            .await?
            .ok_or(BankServiceError::CustomerNotFound)?;
        if customer.profile_complete() {
            return Err(BankServiceError::CustomerAlreadyAdded);
        }

        self.customers.save_profile(input.id, &input.profile).await
    }
}

// ── GetCustomer ──────────────────────────────────────────────────────────────

pub struct GetCustomerUseCase<C: CustomerRepository> {
    pub customers: C,
}

impl<C: CustomerRepository> GetCustomerUseCase<C> {
    pub async fn execute(
        &self,
        principal: &Principal,
        id: i64,
    ) -> Result<Customer, BankServiceError> {
        authorize_customer(&self.customers, principal, id).await?;
        self.customers
            .find_by_id(id)
            .await?
            .ok_or(BankServiceError::CustomerNotFound)
    }
}

// ── ListCustomers ────────────────────────────────────────────────────────────

/// Staff-only listing; the role gate lives at the handler.
pub struct ListCustomersUseCase<C: CustomerRepository> {
    pub customers: C,
}

impl<C: CustomerRepository> ListCustomersUseCase<C> {
    pub async fn execute(&self) -> Result<Vec<Customer>, BankServiceError> {
        self.customers.find_all().await
    }
}

// ── UpdateCustomer ───────────────────────────────────────────────────────────

pub struct UpdateCustomerInput {
    pub id: i64,
    pub profile: CustomerProfile,
}

pub struct UpdateCustomerUseCase<C: CustomerRepository> {
    pub customers: C,
}

impl<C: CustomerRepository> UpdateCustomerUseCase<C> {
    pub async fn execute(
        &self,
        principal: &Principal,
        path_id: i64,
        input: UpdateCustomerInput,
    ) -> Result<(), BankServiceError> {
        // Anti-tamper guard: the body must name the same record as the path,
        // checked before any ownership decision.
        if path_id != input.id {
            return Err(BankServiceError::InconsistentDetails);
        }
        if !input.profile.is_valid() {
            return Err(BankServiceError::ValidationFailed);
        }
        authorize_customer(&self.customers, principal, path_id).await?;

        if self.customers.find_by_id(path_id).await?.is_none() {
            return Err(BankServiceError::CustomerNotFound);
        }
        self.customers.save_profile(path_id, &input.profile).await
    }
}

// ── DeleteCustomer ───────────────────────────────────────────────────────────

pub struct DeleteCustomerUseCase<C: CustomerRepository> {
    pub customers: C,
}

impl<C: CustomerRepository> DeleteCustomerUseCase<C> {
    pub async fn execute(&self, principal: &Principal, id: i64) -> Result<(), BankServiceError> {
        authorize_customer(&self.customers, principal, id).await?;
        if self.customers.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(BankServiceError::CustomerNotFound)
        }
    }
}
