use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::response::Envelope;

/// Banking service error variants. Each maps to a fixed status code and a
/// fixed client-facing message; internal error text never leaves the process.
#[derive(Debug, thiserror::Error)]
pub enum BankServiceError {
    #[error("email address is already registered")]
    EmailAlreadyRegistered,
    #[error("customer details for this id are already added")]
    CustomerAlreadyAdded,
    #[error("employee details for this id are already added")]
    EmployeeAlreadyAdded,
    #[error("offering details for this customer are already added")]
    OfferingAlreadyAdded,
    #[error("no customer exists with this id")]
    CustomerNotFound,
    #[error("no employee exists with this id")]
    EmployeeNotFound,
    #[error("no offering exists for this customer")]
    OfferingNotFound,
    #[error("no loan exists with this number")]
    LoanNotFound,
    #[error("no locker exists with this number")]
    LockerNotFound,
    #[error("authentication required")]
    Unauthenticated,
    #[error("not authorized to perform this action on this resource")]
    Unauthorized,
    #[error("not authorized to make this request")]
    Forbidden,
    #[error("inconsistent details in the request")]
    InconsistentDetails,
    #[error("email address is in an invalid format")]
    InvalidEmail,
    #[error("request arguments are not valid")]
    ValidationFailed,
    #[error("offering update is not supported")]
    NotImplemented,
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl BankServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmailAlreadyRegistered => "EMAIL_ALREADY_REGISTERED",
            Self::CustomerAlreadyAdded => "CUSTOMER_ALREADY_ADDED",
            Self::EmployeeAlreadyAdded => "EMPLOYEE_ALREADY_ADDED",
            Self::OfferingAlreadyAdded => "OFFERING_ALREADY_ADDED",
            Self::CustomerNotFound => "CUSTOMER_NOT_FOUND",
            Self::EmployeeNotFound => "EMPLOYEE_NOT_FOUND",
            Self::OfferingNotFound => "OFFERING_NOT_FOUND",
            Self::LoanNotFound => "LOAN_NOT_FOUND",
            Self::LockerNotFound => "LOCKER_NOT_FOUND",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::InconsistentDetails => "INCONSISTENT_DETAILS",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::ValidationFailed => "VALIDATION_FAILED",
            Self::NotImplemented => "NOT_IMPLEMENTED",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::EmailAlreadyRegistered
            | Self::CustomerAlreadyAdded
            | Self::EmployeeAlreadyAdded
            | Self::OfferingAlreadyAdded => StatusCode::CONFLICT,
            Self::CustomerNotFound
            | Self::EmployeeNotFound
            | Self::OfferingNotFound
            | Self::LoanNotFound
            | Self::LockerNotFound => StatusCode::NOT_FOUND,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Unauthorized | Self::Forbidden => StatusCode::FORBIDDEN,
            Self::InconsistentDetails | Self::InvalidEmail | Self::ValidationFailed => {
                StatusCode::BAD_REQUEST
            }
            Self::NotImplemented => StatusCode::NOT_IMPLEMENTED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for BankServiceError {
    fn into_response(self) -> Response {
        // Log 500s only; 4xx are expected client outcomes and TraceLayer
        // already records method/uri/status for every request.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let status = self.status_code();
        let body = Envelope::<()>::failure(status.as_u16(), self.to_string());
        (status, axum::Json(body)).into_response()
    }
}
