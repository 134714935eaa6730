use corebank_auth_types::principal::Principal;

use crate::domain::repository::{CustomerRepository, LoanRepository, OfferingRepository};
use crate::domain::types::{Loan, NewLoan};
use crate::error::BankServiceError;
use crate::usecase::access::{authorize_customer, authorize_loan, require_offering};

// ── ListLoans ────────────────────────────────────────────────────────────────

pub struct ListLoansUseCase<C: CustomerRepository, O: OfferingRepository, L: LoanRepository> {
    pub customers: C,
    pub offerings: O,
    pub loans: L,
}

impl<C: CustomerRepository, O: OfferingRepository, L: LoanRepository> ListLoansUseCase<C, O, L> {
    pub async fn execute(
        &self,
        principal: &Principal,
        customer_id: i64,
    ) -> Result<Vec<Loan>, BankServiceError> {
        authorize_customer(&self.customers, principal, customer_id).await?;
        let offering = require_offering(&self.offerings, customer_id).await?;
        self.loans.list_by_offering(offering.id).await
    }
}

// ── GetLoan ──────────────────────────────────────────────────────────────────

pub struct GetLoanUseCase<C: CustomerRepository, O: OfferingRepository, L: LoanRepository> {
    pub customers: C,
    pub offerings: O,
    pub loans: L,
}

impl<C: CustomerRepository, O: OfferingRepository, L: LoanRepository> GetLoanUseCase<C, O, L> {
    pub async fn execute(
        &self,
        principal: &Principal,
        customer_id: i64,
        number: i64,
    ) -> Result<Loan, BankServiceError> {
        authorize_customer(&self.customers, principal, customer_id).await?;
        authorize_loan(&self.offerings, &self.loans, customer_id, number).await
    }
}

// ── UpdateLoan ───────────────────────────────────────────────────────────────

pub struct UpdateLoanUseCase<C: CustomerRepository, O: OfferingRepository, L: LoanRepository> {
    pub customers: C,
    pub offerings: O,
    pub loans: L,
}

impl<C: CustomerRepository, O: OfferingRepository, L: LoanRepository> UpdateLoanUseCase<C, O, L> {
    pub async fn execute(
        &self,
        principal: &Principal,
        customer_id: i64,
        number: i64,
        body: NewLoan,
    ) -> Result<(), BankServiceError> {
        // Path/body mismatch fails before any ownership decision.
        if number != body.number {
            return Err(BankServiceError::InconsistentDetails);
        }
        if !body.is_valid() {
            return Err(BankServiceError::ValidationFailed);
        }
        authorize_customer(&self.customers, principal, customer_id).await?;
        authorize_loan(&self.offerings, &self.loans, customer_id, number).await?;

        // Only the amount is mutable; number, customer and parent offering
        // are fixed at creation.
        self.loans.update_amount(number, body.amount).await
    }
}

// ── DeleteLoan ───────────────────────────────────────────────────────────────

pub struct DeleteLoanUseCase<C: CustomerRepository, O: OfferingRepository, L: LoanRepository> {
    pub customers: C,
    pub offerings: O,
    pub loans: L,
}

impl<C: CustomerRepository, O: OfferingRepository, L: LoanRepository> DeleteLoanUseCase<C, O, L> {
    pub async fn execute(
        &self,
        principal: &Principal,
        customer_id: i64,
        number: i64,
    ) -> Result<(), BankServiceError> {
        authorize_customer(&self.customers, principal, customer_id).await?;
        authorize_loan(&self.offerings, &self.loans, customer_id, number).await?;

        // Existence is re-validated at the point of use: a concurrent delete
        // between check and here surfaces as LoanNotFound.
        if self.loans.delete_by_number(number).await? {
            Ok(())
        } else {
            Err(BankServiceError::LoanNotFound)
        }
    }
}
