use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use corebank_auth_types::principal::Principal;

use crate::domain::types::{Loan, NewLoan};
use crate::error::BankServiceError;
use crate::handlers::offering::require_customer_role;
use crate::response::Envelope;
use crate::state::AppState;
use crate::usecase::loan::{
    DeleteLoanUseCase, GetLoanUseCase, ListLoansUseCase, UpdateLoanUseCase,
};
use crate::usecase::offering::AddLoanUseCase;

#[derive(Debug, Deserialize)]
pub struct LoanPayload {
    pub number: i64,
    pub customer_id: i64,
    pub amount: i64,
}

impl From<LoanPayload> for NewLoan {
    fn from(body: LoanPayload) -> Self {
        NewLoan {
            number: body.number,
            customer_id: body.customer_id,
            amount: body.amount,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoanResponse {
    pub id: i64,
    pub number: i64,
    pub customer_id: i64,
    pub amount: i64,
}

impl From<Loan> for LoanResponse {
    fn from(loan: Loan) -> Self {
        Self {
            id: loan.id,
            number: loan.number,
            customer_id: loan.customer_id,
            amount: loan.amount,
        }
    }
}

pub async fn list(
    State(state): State<AppState>,
    principal: Principal,
    Path(customer_id): Path<i64>,
) -> Result<Envelope<Vec<LoanResponse>>, BankServiceError> {
    require_customer_role(&principal)?;
    let usecase = ListLoansUseCase {
        customers: state.customer_repo(),
        offerings: state.offering_repo(),
        loans: state.loan_repo(),
    };
    let loans = usecase.execute(&principal, customer_id).await?;
    Ok(Envelope::ok(
        "loan details successfully retrieved",
        loans.into_iter().map(Into::into).collect(),
    ))
}

pub async fn add(
    State(state): State<AppState>,
    principal: Principal,
    Path(customer_id): Path<i64>,
    Json(body): Json<LoanPayload>,
) -> Result<Envelope<i64>, BankServiceError> {
    require_customer_role(&principal)?;
    let usecase = AddLoanUseCase {
        customers: state.customer_repo(),
        offerings: state.offering_repo(),
        loans: state.loan_repo(),
    };
    let number = usecase.execute(&principal, customer_id, body.into()).await?;
    Ok(Envelope::created("loan details successfully added", number))
}

pub async fn get(
    State(state): State<AppState>,
    principal: Principal,
    Path((customer_id, number)): Path<(i64, i64)>,
) -> Result<Envelope<LoanResponse>, BankServiceError> {
    require_customer_role(&principal)?;
    let usecase = GetLoanUseCase {
        customers: state.customer_repo(),
        offerings: state.offering_repo(),
        loans: state.loan_repo(),
    };
    let loan = usecase.execute(&principal, customer_id, number).await?;
    Ok(Envelope::ok(
        "loan details successfully retrieved",
        loan.into(),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    principal: Principal,
    Path((customer_id, number)): Path<(i64, i64)>,
    Json(body): Json<LoanPayload>,
) -> Result<Envelope<()>, BankServiceError> {
    require_customer_role(&principal)?;
    let usecase = UpdateLoanUseCase {
        customers: state.customer_repo(),
        offerings: state.offering_repo(),
        loans: state.loan_repo(),
    };
    usecase
        .execute(&principal, customer_id, number, body.into())
        .await?;
    Ok(Envelope::message_only(
        StatusCode::OK,
        "loan details successfully updated",
    ))
}

pub async fn delete(
    State(state): State<AppState>,
    principal: Principal,
    Path((customer_id, number)): Path<(i64, i64)>,
) -> Result<Envelope<()>, BankServiceError> {
    require_customer_role(&principal)?;
    let usecase = DeleteLoanUseCase {
        customers: state.customer_repo(),
        offerings: state.offering_repo(),
        loans: state.loan_repo(),
    };
    usecase.execute(&principal, customer_id, number).await?;
    Ok(Envelope::message_only(
        StatusCode::OK,
        "loan details successfully removed",
    ))
}
