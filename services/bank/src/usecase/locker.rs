use corebank_auth_types::principal::Principal;

use crate::domain::repository::{CustomerRepository, LockerRepository, OfferingRepository};
use crate::domain::types::{Locker, NewLocker};
use crate::error::BankServiceError;
use crate::usecase::access::{authorize_customer, authorize_locker, require_offering};

// ── ListLockers ──────────────────────────────────────────────────────────────

pub struct ListLockersUseCase<C: CustomerRepository, O: OfferingRepository, K: LockerRepository> {
    pub customers: C,
    pub offerings: O,
    pub lockers: K,
}

impl<C: CustomerRepository, O: OfferingRepository, K: LockerRepository>
    ListLockersUseCase<C, O, K>
{
    pub async fn execute(
        &self,
        principal: &Principal,
        customer_id: i64,
    ) -> Result<Vec<Locker>, BankServiceError> {
        authorize_customer(&self.customers, principal, customer_id).await?;
        let offering = require_offering(&self.offerings, customer_id).await?;
        self.lockers.list_by_offering(offering.id).await
    }
}

// ── GetLocker ────────────────────────────────────────────────────────────────

pub struct GetLockerUseCase<C: CustomerRepository, O: OfferingRepository, K: LockerRepository> {
    pub customers: C,
    pub offerings: O,
    pub lockers: K,
}

impl<C: CustomerRepository, O: OfferingRepository, K: LockerRepository>
    GetLockerUseCase<C, O, K>
{
    pub async fn execute(
        &self,
        principal: &Principal,
        customer_id: i64,
        number: i64,
    ) -> Result<Locker, BankServiceError> {
        authorize_customer(&self.customers, principal, customer_id).await?;
        authorize_locker(&self.offerings, &self.lockers, customer_id, number).await
    }
}

// ── UpdateLocker ─────────────────────────────────────────────────────────────

pub struct UpdateLockerUseCase<C: CustomerRepository, O: OfferingRepository, K: LockerRepository>
{
    pub customers: C,
    pub offerings: O,
    pub lockers: K,
}

impl<C: CustomerRepository, O: OfferingRepository, K: LockerRepository>
    UpdateLockerUseCase<C, O, K>
{
    pub async fn execute(
        &self,
        principal: &Principal,
        customer_id: i64,
        number: i64,
        body: NewLocker,
    ) -> Result<(), BankServiceError> {
        if number != body.number {
            return Err(BankServiceError::InconsistentDetails);
        }
        if !body.is_valid() {
            return Err(BankServiceError::ValidationFailed);
        }
        authorize_customer(&self.customers, principal, customer_id).await?;
        authorize_locker(&self.offerings, &self.lockers, customer_id, number).await?;

        self.lockers
            .update_details(number, body.account_number, body.branch_code)
            .await
    }
}

// ── DeleteLocker ─────────────────────────────────────────────────────────────

pub struct DeleteLockerUseCase<C: CustomerRepository, O: OfferingRepository, K: LockerRepository>
{
    pub customers: C,
    pub offerings: O,
    pub lockers: K,
}

impl<C: CustomerRepository, O: OfferingRepository, K: LockerRepository>
    DeleteLockerUseCase<C, O, K>
{
    pub async fn execute(
        &self,
        principal: &Principal,
        customer_id: i64,
        number: i64,
    ) -> Result<(), BankServiceError> {
        authorize_customer(&self.customers, principal, customer_id).await?;
        authorize_locker(&self.offerings, &self.lockers, customer_id, number).await?;

        if self.lockers.delete_by_number(number).await? {
            Ok(())
        } else {
            Err(BankServiceError::LockerNotFound)
        }
    }
}
