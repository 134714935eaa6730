//! Principal resolution and ownership validation.
//!
//! The authorize functions are pure decisions over current store state: they
//! hold no cache, and callers re-validate existence at the point of use, so a
//! resource deleted between check and use degrades to a not-found, never to a
//! stale success.

use corebank_auth_types::principal::{Principal, Role};

use crate::domain::repository::{
    CustomerRepository, EmployeeRepository, LoanRepository, LockerRepository, OfferingRepository,
};
use crate::domain::types::{Loan, Locker, Offering};
use crate::error::BankServiceError;

// ── ResolvePrincipal ─────────────────────────────────────────────────────────

/// Locates the account for a login identifier and checks the credential.
/// The identifier space is shared between employees and customers; employees
/// are consulted first, and resolution order is part of the contract.
pub struct ResolvePrincipalUseCase<C: CustomerRepository, E: EmployeeRepository> {
    pub customers: C,
    pub employees: E,
}

impl<C: CustomerRepository, E: EmployeeRepository> ResolvePrincipalUseCase<C, E> {
    pub async fn execute(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Principal, BankServiceError> {
        if let Some(employee) = self.employees.find_by_email(email).await? {
            if employee.password == password {
                return Ok(Principal {
                    id: employee.id,
                    email: employee.email,
                    role: employee.role,
                });
            }
            return Err(BankServiceError::Unauthenticated);
        }

        if let Some(customer) = self.customers.find_by_email(email).await? {
            if customer.password == password {
                return Ok(Principal {
                    id: customer.id,
                    email: customer.email,
                    role: customer.role,
                });
            }
        }

        Err(BankServiceError::Unauthenticated)
    }
}

// ── Ownership checks ─────────────────────────────────────────────────────────

/// May `principal` act on the customer resource `customer_id`?
///
/// Staff are always authorized, for any id. A customer is authorized only if
/// the id resolves to an existing record carrying their own email; both a
/// missing record and a foreign one yield `Unauthorized`, so existence is
/// never leaked across tenants.
pub async fn authorize_customer<C: CustomerRepository>(
    customers: &C,
    principal: &Principal,
    customer_id: i64,
) -> Result<(), BankServiceError> {
    if principal.role.is_staff() {
        return Ok(());
    }

    match customers.find_by_id(customer_id).await? {
        Some(customer) if customer.email == principal.email => Ok(()),
        _ => Err(BankServiceError::Unauthorized),
    }
}

/// May `principal` act on the employee resource `employee_id`?
///
/// Employees may only act on their own record. Unlike the customer check, a
/// missing record reports `EmployeeNotFound`: staff-facing lookups may leak
/// existence, customer-facing ones must not. Asymmetric on purpose; both
/// sides of it are load-bearing for clients.
pub async fn authorize_employee<E: EmployeeRepository>(
    employees: &E,
    principal: &Principal,
    employee_id: i64,
) -> Result<(), BankServiceError> {
    let Some(employee) = employees.find_by_id(employee_id).await? else {
        return Err(BankServiceError::EmployeeNotFound);
    };
    if employee.email == principal.email {
        Ok(())
    } else {
        Err(BankServiceError::Unauthorized)
    }
}

/// Resolve the offering for `customer_id`, failing with `Unauthorized` when
/// there is none. Offering-scoped access is meaningless without the
/// aggregate, and absence must look the same as foreign ownership.
pub async fn require_offering<O: OfferingRepository>(
    offerings: &O,
    customer_id: i64,
) -> Result<Offering, BankServiceError> {
    offerings
        .find_by_customer_id(customer_id)
        .await?
        .ok_or(BankServiceError::Unauthorized)
}

/// Two-step offering-scoped check for a loan: the customer must have an
/// offering, and the loan named by `number` must belong to that offering.
/// Every failure mode here, including an unknown number, is `Unauthorized`
/// rather than `LoanNotFound`, so existence never leaks across tenants.
pub async fn authorize_loan<O: OfferingRepository, L: LoanRepository>(
    offerings: &O,
    loans: &L,
    customer_id: i64,
    number: i64,
) -> Result<Loan, BankServiceError> {
    let offering = require_offering(offerings, customer_id).await?;

    match loans.find_by_number(number).await? {
        Some(loan) if loan.offering_id == offering.id => Ok(loan),
        _ => Err(BankServiceError::Unauthorized),
    }
}

/// Locker twin of [`authorize_loan`].
pub async fn authorize_locker<O: OfferingRepository, K: LockerRepository>(
    offerings: &O,
    lockers: &K,
    customer_id: i64,
    number: i64,
) -> Result<Locker, BankServiceError> {
    let offering = require_offering(offerings, customer_id).await?;

    match lockers.find_by_number(number).await? {
        Some(locker) if locker.offering_id == offering.id => Ok(locker),
        _ => Err(BankServiceError::Unauthorized),
    }
}
