use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use corebank_auth_types::principal::Principal;

use crate::domain::types::{Locker, NewLocker};
use crate::error::BankServiceError;
use crate::handlers::offering::require_customer_role;
use crate::response::Envelope;
use crate::state::AppState;
use crate::usecase::locker::{
    DeleteLockerUseCase, GetLockerUseCase, ListLockersUseCase, UpdateLockerUseCase,
};
use crate::usecase::offering::AddLockerUseCase;

#[derive(Debug, Deserialize)]
pub struct LockerPayload {
    pub number: i64,
    pub account_number: i64,
    pub branch_code: i64,
}

impl From<LockerPayload> for NewLocker {
    fn from(body: LockerPayload) -> Self {
        NewLocker {
            number: body.number,
            account_number: body.account_number,
            branch_code: body.branch_code,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LockerResponse {
    pub id: i64,
    pub number: i64,
    pub account_number: i64,
    pub branch_code: i64,
}

impl From<Locker> for LockerResponse {
    fn from(locker: Locker) -> Self {
        Self {
            id: locker.id,
            number: locker.number,
            account_number: locker.account_number,
            branch_code: locker.branch_code,
        }
    }
}

pub async fn list(
    State(state): State<AppState>,
    principal: Principal,
    Path(customer_id): Path<i64>,
) -> Result<Envelope<Vec<LockerResponse>>, BankServiceError> {
    require_customer_role(&principal)?;
    let usecase = ListLockersUseCase {
        customers: state.customer_repo(),
        offerings: state.offering_repo(),
        lockers: state.locker_repo(),
    };
    let lockers = usecase.execute(&principal, customer_id).await?;
    Ok(Envelope::ok(
        "locker details successfully retrieved",
        lockers.into_iter().map(Into::into).collect(),
    ))
}

pub async fn add(
    State(state): State<AppState>,
    principal: Principal,
    Path(customer_id): Path<i64>,
    Json(body): Json<LockerPayload>,
) -> Result<Envelope<i64>, BankServiceError> {
    require_customer_role(&principal)?;
    let usecase = AddLockerUseCase {
        customers: state.customer_repo(),
        offerings: state.offering_repo(),
        lockers: state.locker_repo(),
    };
    let number = usecase.execute(&principal, customer_id, body.into()).await?;
    Ok(Envelope::created(
        "locker details successfully added",
        number,
    ))
}

pub async fn get(
    State(state): State<AppState>,
    principal: Principal,
    Path((customer_id, number)): Path<(i64, i64)>,
) -> Result<Envelope<LockerResponse>, BankServiceError> {
    require_customer_role(&principal)?;
    let usecase = GetLockerUseCase {
        customers: state.customer_repo(),
        offerings: state.offering_repo(),
        lockers: state.locker_repo(),
    };
    let locker = usecase.execute(&principal, customer_id, number).await?;
    Ok(Envelope::ok(
        "locker details successfully retrieved",
        locker.into(),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    principal: Principal,
    Path((customer_id, number)): Path<(i64, i64)>,
    Json(body): Json<LockerPayload>,
) -> Result<Envelope<()>, BankServiceError> {
    require_customer_role(&principal)?;
    let usecase = UpdateLockerUseCase {
        customers: state.customer_repo(),
        offerings: state.offering_repo(),
        lockers: state.locker_repo(),
    };
    usecase
        .execute(&principal, customer_id, number, body.into())
        .await?;
    Ok(Envelope::message_only(
        StatusCode::OK,
        "locker details successfully updated",
    ))
}

pub async fn delete(
    State(state): State<AppState>,
    principal: Principal,
    Path((customer_id, number)): Path<(i64, i64)>,
) -> Result<Envelope<()>, BankServiceError> {
    require_customer_role(&principal)?;
    let usecase = DeleteLockerUseCase {
        customers: state.customer_repo(),
        offerings: state.offering_repo(),
        lockers: state.locker_repo(),
    };
    usecase.execute(&principal, customer_id, number).await?;
    Ok(Envelope::message_only(
        StatusCode::OK,
        "locker details successfully removed",
    ))
}
