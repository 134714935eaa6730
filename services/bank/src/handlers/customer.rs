use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use corebank_auth_types::principal::{Principal, Role};

use crate::domain::types::{Address, Branch, Card, Customer, CustomerProfile};
use crate::error::BankServiceError;
use crate::handlers::{RegisterRequest, RegisteredResponse};
use crate::response::Envelope;
use crate::state::AppState;
use crate::usecase::customer::{
    CompleteCustomerProfileInput, CompleteCustomerProfileUseCase, DeleteCustomerUseCase,
    GetCustomerUseCase, ListCustomersUseCase, RegisterCustomerInput, RegisterCustomerUseCase,
    UpdateCustomerInput, UpdateCustomerUseCase,
};

/// Full customer details as sent by the client. The id names the account the
/// profile belongs to and must match the path on updates.
#[derive(Debug, Deserialize)]
pub struct CustomerPayload {
    pub id: i64,
    pub name: String,
    pub account_number: i64,
    pub branch: Branch,
    pub account_type: String,
    pub contact_number: i64,
    pub card: Card,
    pub pan_number: i64,
    pub address: Address,
}

impl CustomerPayload {
    fn into_profile(self) -> (i64, CustomerProfile) {
        (
            self.id,
            CustomerProfile {
                name: self.name,
                account_number: self.account_number,
                branch: self.branch,
                account_type: self.account_type,
                contact_number: self.contact_number,
                card: self.card,
                pan_number: self.pan_number,
                address: self.address,
            },
        )
    }
}

/// Customer details as returned to the client. The password never leaves the
/// service; profile fields are null until the profile is completed.
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: i64,
    pub email: String,
    pub role: Role,
    pub name: Option<String>,
    pub account_number: Option<i64>,
    pub branch: Option<Branch>,
    pub account_type: Option<String>,
    pub contact_number: Option<i64>,
    pub card: Option<Card>,
    pub pan_number: Option<i64>,
    pub address: Option<Address>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        let profile = customer.profile;
        Self {
            id: customer.id,
            email: customer.email,
            role: customer.role,
            name: profile.as_ref().map(|p| p.name.clone()),
            account_number: profile.as_ref().map(|p| p.account_number),
            branch: profile.as_ref().map(|p| p.branch.clone()),
            account_type: profile.as_ref().map(|p| p.account_type.clone()),
            contact_number: profile.as_ref().map(|p| p.contact_number),
            card: profile.as_ref().map(|p| p.card.clone()),
            pan_number: profile.as_ref().map(|p| p.pan_number),
            address: profile.map(|p| p.address),
        }
    }
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Envelope<RegisteredResponse>, BankServiceError> {
    let usecase = RegisterCustomerUseCase {
        customers: state.customer_repo(),
        employees: state.employee_repo(),
    };
    let id = usecase
        .execute(RegisterCustomerInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Envelope::created(
        "customer account successfully created",
        RegisteredResponse { id },
    ))
}

pub async fn save(
    State(state): State<AppState>,
    principal: Principal,
    Json(body): Json<CustomerPayload>,
) -> Result<Envelope<()>, BankServiceError> {
    let usecase = CompleteCustomerProfileUseCase {
        customers: state.customer_repo(),
    };
    let (id, profile) = body.into_profile();
    usecase
        .execute(&principal, CompleteCustomerProfileInput { id, profile })
        .await?;
    Ok(Envelope::message_only(
        StatusCode::CREATED,
        "customer details successfully added",
    ))
}

pub async fn get(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<i64>,
) -> Result<Envelope<CustomerResponse>, BankServiceError> {
    let usecase = GetCustomerUseCase {
        customers: state.customer_repo(),
    };
    let customer = usecase.execute(&principal, id).await?;
    Ok(Envelope::ok(
        "customer details successfully retrieved",
        customer.into(),
    ))
}

pub async fn list(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<Envelope<Vec<CustomerResponse>>, BankServiceError> {
    if !principal.role.is_staff() {
        return Err(BankServiceError::Forbidden);
    }
    let usecase = ListCustomersUseCase {
        customers: state.customer_repo(),
    };
    let customers = usecase.execute().await?;
    Ok(Envelope::ok(
        "customer details successfully retrieved",
        customers.into_iter().map(Into::into).collect(),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<i64>,
    Json(body): Json<CustomerPayload>,
) -> Result<Envelope<()>, BankServiceError> {
    let usecase = UpdateCustomerUseCase {
        customers: state.customer_repo(),
    };
    let (body_id, profile) = body.into_profile();
    usecase
        .execute(
            &principal,
            id,
            UpdateCustomerInput {
                id: body_id,
                profile,
            },
        )
        .await?;
    Ok(Envelope::message_only(
        StatusCode::OK,
        "customer details successfully updated",
    ))
}

pub async fn delete(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<i64>,
) -> Result<Envelope<()>, BankServiceError> {
    let usecase = DeleteCustomerUseCase {
        customers: state.customer_repo(),
    };
    usecase.execute(&principal, id).await?;
    Ok(Envelope::message_only(
        StatusCode::OK,
        "customer details successfully removed",
    ))
}
