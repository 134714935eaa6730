use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use corebank_auth_types::principal::{Principal, Role};

use crate::domain::types::{Address, Employee, EmployeeProfile};
use crate::error::BankServiceError;
use crate::handlers::{RegisterRequest, RegisteredResponse};
use crate::response::Envelope;
use crate::state::AppState;
use crate::usecase::employee::{
    CompleteEmployeeProfileInput, CompleteEmployeeProfileUseCase, DeleteEmployeeUseCase,
    GetEmployeeUseCase, ListEmployeesUseCase, RegisterEmployeeInput, RegisterEmployeeUseCase,
    UpdateEmployeeInput, UpdateEmployeeUseCase,
};

#[derive(Debug, Deserialize)]
pub struct EmployeePayload {
    pub id: i64,
    pub name: String,
    pub salary: i32,
    pub title: String,
    pub address: Address,
    pub joining_date: NaiveDate,
}

impl EmployeePayload {
    fn into_profile(self) -> (i64, EmployeeProfile) {
        (
            self.id,
            EmployeeProfile {
                name: self.name,
                salary: self.salary,
                title: self.title,
                address: self.address,
                joining_date: self.joining_date,
            },
        )
    }
}

#[derive(Debug, Serialize)]
pub struct EmployeeResponse {
    pub id: i64,
    pub email: String,
    pub role: Role,
    pub name: Option<String>,
    pub salary: Option<i32>,
    pub title: Option<String>,
    pub address: Option<Address>,
    pub joining_date: Option<NaiveDate>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        let profile = employee.profile;
        Self {
            id: employee.id,
            email: employee.email,
            role: employee.role,
            name: profile.as_ref().map(|p| p.name.clone()),
            salary: profile.as_ref().map(|p| p.salary),
            title: profile.as_ref().map(|p| p.title.clone()),
            joining_date: profile.as_ref().map(|p| p.joining_date),
            address: profile.map(|p| p.address),
        }
    }
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Envelope<RegisteredResponse>, BankServiceError> {
    let usecase = RegisterEmployeeUseCase {
        employees: state.employee_repo(),
        customers: state.customer_repo(),
    };
    let id = usecase
        .execute(RegisterEmployeeInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Envelope::created(
        "employee account successfully created",
        RegisteredResponse { id },
    ))
}

pub async fn save(
    State(state): State<AppState>,
    principal: Principal,
    Json(body): Json<EmployeePayload>,
) -> Result<Envelope<()>, BankServiceError> {
    let usecase = CompleteEmployeeProfileUseCase {
        employees: state.employee_repo(),
    };
    let (id, profile) = body.into_profile();
    usecase
        .execute(&principal, CompleteEmployeeProfileInput { id, profile })
        .await?;
    Ok(Envelope::message_only(
        StatusCode::CREATED,
        "employee details successfully added",
    ))
}

pub async fn get(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<i64>,
) -> Result<Envelope<EmployeeResponse>, BankServiceError> {
    let usecase = GetEmployeeUseCase {
        employees: state.employee_repo(),
    };
    let employee = usecase.execute(&principal, id).await?;
    Ok(Envelope::ok(
        "employee details successfully retrieved",
        employee.into(),
    ))
}

/// Listing all employees is a manager privilege.
pub async fn list(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<Envelope<Vec<EmployeeResponse>>, BankServiceError> {
    if principal.role != Role::Manager {
        return Err(BankServiceError::Forbidden);
    }
    let usecase = ListEmployeesUseCase {
        employees: state.employee_repo(),
    };
    let employees = usecase.execute().await?;
    Ok(Envelope::ok(
        "employee details successfully retrieved",
        employees.into_iter().map(Into::into).collect(),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<i64>,
    Json(body): Json<EmployeePayload>,
) -> Result<Envelope<()>, BankServiceError> {
    let usecase = UpdateEmployeeUseCase {
        employees: state.employee_repo(),
    };
    let (body_id, profile) = body.into_profile();
    usecase
        .execute(
            &principal,
            id,
            UpdateEmployeeInput {
                id: body_id,
                profile,
            },
        )
        .await?;
    Ok(Envelope::message_only(
        StatusCode::OK,
        "employee details successfully updated",
    ))
}

pub async fn delete(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<i64>,
) -> Result<Envelope<()>, BankServiceError> {
    let usecase = DeleteEmployeeUseCase {
        employees: state.employee_repo(),
    };
    usecase.execute(&principal, id).await?;
    Ok(Envelope::message_only(
        StatusCode::OK,
        "employee details successfully removed",
    ))
}
