//! Request authentication.
//!
//! Every protected route goes through [`authenticate`], which turns the
//! `Authorization: Basic` header into a [`Principal`] in the request
//! extensions. Handlers then receive the principal explicitly through an
//! extractor; there is no ambient security context to consult.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use corebank_auth_types::basic::BasicCredentials;
use corebank_auth_types::principal::Principal;

use crate::error::BankServiceError;
use crate::state::AppState;
use crate::usecase::access::ResolvePrincipalUseCase;

pub async fn authenticate(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let credentials = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(BasicCredentials::from_header);
    let Some(credentials) = credentials else {
        return BankServiceError::Unauthenticated.into_response();
    };

    let resolve = ResolvePrincipalUseCase {
        customers: state.customer_repo(),
        employees: state.employee_repo(),
    };
    let principal = match resolve
        .execute(&credentials.email, &credentials.password)
        .await
    {
        Ok(principal) => principal,
        Err(e) => return e.into_response(),
    };

    let email = principal.email.clone();
    req.extensions_mut().insert(principal);
    let response = next.run(req).await;

    if response.status().is_server_error() {
        tracing::error!(principal = %email, status = %response.status(), "request failed");
    }
    response
}
