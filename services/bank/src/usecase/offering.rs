//! Offering aggregate lifecycle.
//!
//! The aggregate invariants live here: a customer owns at most one offering,
//! children are attached at creation and never migrate, and child numbers are
//! unique system-wide. Composition writes go through one transactional
//! repository call so the existence check and the insert cannot interleave
//! with a concurrent writer.

use corebank_auth_types::principal::Principal;

use crate::domain::repository::{
    CustomerRepository, LoanRepository, LockerRepository, OfferingRepository,
};
use crate::domain::types::{Loan, Locker, NewLoan, NewLocker};
use crate::error::BankServiceError;
use crate::usecase::access::{authorize_customer, require_offering};

// ── CreateOffering ───────────────────────────────────────────────────────────

pub struct CreateOfferingInput {
    pub loans: Vec<NewLoan>,
    pub lockers: Vec<NewLocker>,
}

pub struct CreateOfferingUseCase<
    C: CustomerRepository,
    O: OfferingRepository,
    L: LoanRepository,
    K: LockerRepository,
> {
    pub customers: C,
    pub offerings: O,
    pub loans: L,
    pub lockers: K,
}

impl<C: CustomerRepository, O: OfferingRepository, L: LoanRepository, K: LockerRepository>
    CreateOfferingUseCase<C, O, L, K>
{
    pub async fn execute(
        &self,
        principal: &Principal,
        customer_id: i64,
        input: CreateOfferingInput,
    ) -> Result<i64, BankServiceError> {
        authorize_customer(&self.customers, principal, customer_id).await?;

        if !input.loans.iter().all(NewLoan::is_valid)
            || !input.lockers.iter().all(NewLocker::is_valid)
        {
            return Err(BankServiceError::ValidationFailed);
        }

        // Child numbers must be unused anywhere in the system before insert.
        for loan in &input.loans {
            if self.loans.exists_by_number(loan.number).await? {
                return Err(BankServiceError::InconsistentDetails);
            }
        }
        for locker in &input.lockers {
            if self.lockers.exists_by_number(locker.number).await? {
                return Err(BankServiceError::InconsistentDetails);
            }
        }

        self.offerings
            .create_with_children(customer_id, &input.loans, &input.lockers)
            .await?
            .ok_or(BankServiceError::OfferingAlreadyAdded)
    }
}

// ── GetOffering ──────────────────────────────────────────────────────────────

/// The aggregate with its children, as read back for the owner.
#[derive(Debug, Clone)]
pub struct OfferingDetails {
    pub id: i64,
    pub loans: Vec<Loan>,
    pub lockers: Vec<Locker>,
}

pub struct GetOfferingUseCase<
    C: CustomerRepository,
    O: OfferingRepository,
    L: LoanRepository,
    K: LockerRepository,
> {
    pub customers: C,
    pub offerings: O,
    pub loans: L,
    pub lockers: K,
}

impl<C: CustomerRepository, O: OfferingRepository, L: LoanRepository, K: LockerRepository>
    GetOfferingUseCase<C, O, L, K>
{
    pub async fn execute(
        &self,
        principal: &Principal,
        customer_id: i64,
    ) -> Result<OfferingDetails, BankServiceError> {
        authorize_customer(&self.customers, principal, customer_id).await?;

        let offering = self
            .offerings
            .find_by_customer_id(customer_id)
            .await?
            .ok_or(BankServiceError::OfferingNotFound)?;

        let loans = self.loans.list_by_offering(offering.id).await?;
        let lockers = self.lockers.list_by_offering(offering.id).await?;
        Ok(OfferingDetails {
            id: offering.id,
            loans,
            lockers,
        })
    }
}

// ── AddLoan / AddLocker ──────────────────────────────────────────────────────

pub struct AddLoanUseCase<C: CustomerRepository, O: OfferingRepository, L: LoanRepository> {
    pub customers: C,
    pub offerings: O,
    pub loans: L,
}

impl<C: CustomerRepository, O: OfferingRepository, L: LoanRepository> AddLoanUseCase<C, O, L> {
    /// Attach a new loan to the customer's existing offering. The number must
    /// be unused system-wide; the duplicate-submission guard.
    pub async fn execute(
        &self,
        principal: &Principal,
        customer_id: i64,
        loan: NewLoan,
    ) -> Result<i64, BankServiceError> {
        authorize_customer(&self.customers, principal, customer_id).await?;
        if !loan.is_valid() {
            return Err(BankServiceError::ValidationFailed);
        }

        let offering = require_offering(&self.offerings, customer_id).await?;

        if self.loans.exists_by_number(loan.number).await? {
            return Err(BankServiceError::InconsistentDetails);
        }
        // The insert re-checks under a conflict guard; a concurrent duplicate
        // lands here as `false` rather than as a constraint error.
        if !self.loans.insert(offering.id, &loan).await? {
            return Err(BankServiceError::InconsistentDetails);
        }
        Ok(loan.number)
    }
}

pub struct AddLockerUseCase<C: CustomerRepository, O: OfferingRepository, K: LockerRepository> {
    pub customers: C,
    pub offerings: O,
    pub lockers: K,
}

impl<C: CustomerRepository, O: OfferingRepository, K: LockerRepository>
    AddLockerUseCase<C, O, K>
{
    pub async fn execute(
        &self,
        principal: &Principal,
        customer_id: i64,
        locker: NewLocker,
    ) -> Result<i64, BankServiceError> {
        authorize_customer(&self.customers, principal, customer_id).await?;
        if !locker.is_valid() {
            return Err(BankServiceError::ValidationFailed);
        }

        let offering = require_offering(&self.offerings, customer_id).await?;

        if self.lockers.exists_by_number(locker.number).await? {
            return Err(BankServiceError::InconsistentDetails);
        }
        if !self.lockers.insert(offering.id, &locker).await? {
            return Err(BankServiceError::InconsistentDetails);
        }
        Ok(locker.number)
    }
}
