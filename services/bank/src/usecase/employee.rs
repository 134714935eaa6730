use corebank_auth_types::principal::{Principal, Role};

use crate::domain::repository::{CustomerRepository, EmployeeRepository};
use crate::domain::types::{Employee, EmployeeProfile, validate_email};
use crate::error::BankServiceError;
use crate::usecase::access::authorize_employee;

// ── RegisterEmployee ─────────────────────────────────────────────────────────

pub struct RegisterEmployeeInput {
    pub email: String,
    pub password: String,
}

pub struct RegisterEmployeeUseCase<E: EmployeeRepository, C: CustomerRepository> {
    pub employees: E,
    pub customers: C,
}

impl<E: EmployeeRepository, C: CustomerRepository> RegisterEmployeeUseCase<E, C> {
    pub async fn execute(&self, input: RegisterEmployeeInput) -> Result<i64, BankServiceError> {
        if !validate_email(&input.email) {
            return Err(BankServiceError::InvalidEmail);
        }
        if self.employees.find_by_email(&input.email).await?.is_some()
            || self.customers.find_by_email(&input.email).await?.is_some()
        {
            return Err(BankServiceError::EmailAlreadyRegistered);
        }
        self.employees
            .register(&input.email, &input.password, Role::Employee)
            .await?
            .ok_or(BankServiceError::EmailAlreadyRegistered)
    }
}

// ── CompleteEmployeeProfile ──────────────────────────────────────────────────

pub struct CompleteEmployeeProfileInput {
    pub id: i64,
    pub profile: EmployeeProfile,
}

pub struct CompleteEmployeeProfileUseCase<E: EmployeeRepository> {
    pub employees: E,
}

impl<E: EmployeeRepository> CompleteEmployeeProfileUseCase<E> {
    pub async fn execute(
        &self,
        principal: &Principal,
        input: CompleteEmployeeProfileInput,
    ) -> Result<(), BankServiceError> {
        if !input.profile.is_valid() {
            return Err(BankServiceError::ValidationFailed);
        }
        authorize_employee(&self.employees, principal, input.id).await?;

        let employee = self
            .employees
            .find_by_id(input.id)
            .await?
            .ok_or(BankServiceError::EmployeeNotFound)?;
        if employee.profile_complete() {
            return Err(BankServiceError::EmployeeAlreadyAdded);
        }

        self.employees.save_profile(input.id, &input.profile).await
    }
}

// ── GetEmployee ──────────────────────────────────────────────────────────────

pub struct GetEmployeeUseCase<E: EmployeeRepository> {
    pub employees: E,
}

impl<E: EmployeeRepository> GetEmployeeUseCase<E> {
    pub async fn execute(
        &self,
        principal: &Principal,
        id: i64,
    ) -> Result<Employee, BankServiceError> {
        authorize_employee(&self.employees, principal, id).await?;
        self.employees
            .find_by_id(id)
            .await?
            .ok_or(BankServiceError::EmployeeNotFound)
    }
}

// ── ListEmployees ────────────────────────────────────────────────────────────

/// Manager-only listing; the role gate lives at the handler.
pub struct ListEmployeesUseCase<E: EmployeeRepository> {
    pub employees: E,
}

impl<E: EmployeeRepository> ListEmployeesUseCase<E> {
    pub async fn execute(&self) -> Result<Vec<Employee>, BankServiceError> {
        self.employees.find_all().await
    }
}

// ── UpdateEmployee ───────────────────────────────────────────────────────────

pub struct UpdateEmployeeInput {
    pub id: i64,
    pub profile: EmployeeProfile,
}

pub struct UpdateEmployeeUseCase<E: EmployeeRepository> {
    pub employees: E,
}

impl<E: EmployeeRepository> UpdateEmployeeUseCase<E> {
    pub async fn execute(
        &self,
        principal: &Principal,
        path_id: i64,
        input: UpdateEmployeeInput,
    ) -> Result<(), BankServiceError> {
        if path_id != input.id {
            return Err(BankServiceError::InconsistentDetails);
        }
        if !input.profile.is_valid() {
            return Err(BankServiceError::ValidationFailed);
        }
        authorize_employee(&self.employees, principal, path_id).await?;
        self.employees.save_profile(path_id, &input.profile).await
    }
}

// ── DeleteEmployee ───────────────────────────────────────────────────────────

pub struct DeleteEmployeeUseCase<E: EmployeeRepository> {
    pub employees: E,
}

impl<E: EmployeeRepository> DeleteEmployeeUseCase<E> {
    pub async fn execute(&self, principal: &Principal, id: i64) -> Result<(), BankServiceError> {
        authorize_employee(&self.employees, principal, id).await?;
        if self.employees.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(BankServiceError::EmployeeNotFound)
        }
    }
}
