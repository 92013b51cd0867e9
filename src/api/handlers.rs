//! HTTP request handlers

use super::types::{HealthResponse, UssdRequest, UssdResponse};
use crate::session::{self, SessionInput};
use axum::{
    body::Bytes,
    extract::rejection::BytesRejection,
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router() -> Router {
    Router::new()
        // Aggregator webhook
        .route("/", post(handle_ussd))
        .route("/health", get(health))
        .route("/version", get(get_version))
}

// ============================================================
// USSD Webhook
// ============================================================

/// Every body, including an empty, malformed or oversized one, gets a
/// well-formed 200 response; the aggregator has no use for HTTP errors.
async fn handle_ussd(body: Result<Bytes, BytesRejection>) -> Json<UssdResponse> {
    let request = match &body {
        Ok(bytes) => {
            let request = UssdRequest::from_body(bytes);
            if request.is_none() {
                tracing::debug!(bytes = bytes.len(), "Treating undecodable USSD body as absent");
            }
            request
        }
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Unreadable USSD body, treating as absent");
            None
        }
    };

    let input: Option<SessionInput> = request.as_ref().map(UssdRequest::to_session_input);
    let output = session::respond(input.as_ref());

    tracing::info!(
        session_id = request.as_ref().and_then(|r| r.session_id.as_deref()),
        mobile = request.as_ref().and_then(|r| r.mobile.as_deref()),
        operator = request.as_ref().and_then(|r| r.operator.as_deref()),
        service_code = request.as_ref().and_then(|r| r.service_code.as_deref()),
        request_type = input.as_ref().map(|i| i.request_type.as_str()),
        sequence = input.as_ref().and_then(|i| i.sequence),
        response_type = output.response_type().as_str(),
        "USSD turn handled"
    );
    tracing::debug!(
        screen = output.message(),
        client_state = output.client_state(),
        released = output.is_release(),
        "USSD screen sent"
    );

    Json(UssdResponse::from(output))
}

// ============================================================
// Health and Version
// ============================================================

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn get_version() -> &'static str {
    concat!("freebie-ussd ", env!("CARGO_PKG_VERSION"))
}
