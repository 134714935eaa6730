use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use sea_orm::ConnectionTrait;
use tower_http::trace::TraceLayer;

use crate::handlers::{customer, employee, loan, locker, offering};
use crate::middleware::authenticate;
use crate::state::AppState;

/// Readiness includes a database round trip; liveness does not.
async fn readyz(State(state): State<AppState>) -> StatusCode {
    match state.db.execute_unprepared("SELECT 1").await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/healthz", get(corebank_core::health::healthz))
        .route("/readyz", get(readyz))
        .route("/api/v1/customers/register", post(customer::register))
        .route("/api/v1/employees/register", post(employee::register));

    let protected = Router::new()
        .route(
            "/api/v1/customers",
            post(customer::save).get(customer::list),
        )
        .route(
            "/api/v1/customers/{id}",
            get(customer::get)
                .put(customer::update)
                .delete(customer::delete),
        )
        .route(
            "/api/v1/employees",
            post(employee::save).get(employee::list),
        )
        .route(
            "/api/v1/employees/{id}",
            get(employee::get)
                .put(employee::update)
                .delete(employee::delete),
        )
        .route(
            "/api/v1/customers/{id}/offerings",
            post(offering::create)
                .get(offering::get)
                .put(offering::update),
        )
        .route(
            "/api/v1/customers/{id}/offerings/loans",
            get(loan::list).post(loan::add),
        )
        .route(
            "/api/v1/customers/{id}/offerings/loans/{number}",
            get(loan::get).put(loan::update).delete(loan::delete),
        )
        .route(
            "/api/v1/customers/{id}/offerings/lockers",
            get(locker::list).post(locker::add),
        )
        .route(
            "/api/v1/customers/{id}/offerings/lockers/{number}",
            get(locker::get).put(locker::update).delete(locker::delete),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            authenticate,
        ));

    public
        .merge(protected)
        .layer(
            tower::ServiceBuilder::new()
                .layer(corebank_core::middleware::request_id_layer())
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}
