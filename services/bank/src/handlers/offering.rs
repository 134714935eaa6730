use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use corebank_auth_types::principal::{Principal, Role};

use crate::error::BankServiceError;
use crate::handlers::loan::{LoanPayload, LoanResponse};
use crate::handlers::locker::{LockerPayload, LockerResponse};
use crate::response::Envelope;
use crate::state::AppState;
use crate::usecase::offering::{CreateOfferingInput, CreateOfferingUseCase, GetOfferingUseCase};

/// Offering routes serve the customer-facing surface. Staff manage accounts
/// through the customer and employee endpoints, not through offerings.
pub fn require_customer_role(principal: &Principal) -> Result<(), BankServiceError> {
    if principal.role == Role::Customer {
        Ok(())
    } else {
        Err(BankServiceError::Forbidden)
    }
}

#[derive(Debug, Deserialize)]
pub struct OfferingPayload {
    #[serde(default)]
    pub loans: Vec<LoanPayload>,
    #[serde(default)]
    pub lockers: Vec<LockerPayload>,
}

#[derive(Debug, Serialize)]
pub struct OfferingResponse {
    pub id: i64,
    pub loans: Vec<LoanResponse>,
    pub lockers: Vec<LockerResponse>,
}

pub async fn create(
    State(state): State<AppState>,
    principal: Principal,
    Path(customer_id): Path<i64>,
    Json(body): Json<OfferingPayload>,
) -> Result<Envelope<i64>, BankServiceError> {
    require_customer_role(&principal)?;
    let usecase = CreateOfferingUseCase {
        customers: state.customer_repo(),
        offerings: state.offering_repo(),
        loans: state.loan_repo(),
        lockers: state.locker_repo(),
    };
    let id = usecase
        .execute(
            &principal,
            customer_id,
            CreateOfferingInput {
                loans: body.loans.into_iter().map(Into::into).collect(),
                lockers: body.lockers.into_iter().map(Into::into).collect(),
            },
        )
        .await?;
    Ok(Envelope::created("offering details successfully added", id))
}

pub async fn get(
    State(state): State<AppState>,
    principal: Principal,
    Path(customer_id): Path<i64>,
) -> Result<Envelope<OfferingResponse>, BankServiceError> {
    require_customer_role(&principal)?;
    let usecase = GetOfferingUseCase {
        customers: state.customer_repo(),
        offerings: state.offering_repo(),
        loans: state.loan_repo(),
        lockers: state.locker_repo(),
    };
    let details = usecase.execute(&principal, customer_id).await?;
    Ok(Envelope::ok(
        "offering details successfully retrieved",
        OfferingResponse {
            id: details.id,
            loans: details.loans.into_iter().map(Into::into).collect(),
            lockers: details.lockers.into_iter().map(Into::into).collect(),
        },
    ))
}

/// Replacing an offering wholesale is not supported; children are managed
/// through their own routes.
pub async fn update(principal: Principal) -> Result<Envelope<()>, BankServiceError> {
    require_customer_role(&principal)?;
    Err(BankServiceError::NotImplemented)
}
