use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use tracing::{error, warn};

#[derive(Serialize)]
struct ErrorResponse {
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: &'static str,
    details: Option<String>,
}

impl AppError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            message,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Sostituisce il messaggio mantenendo status e dettagli
    pub fn with_message(mut self, message: &'static str) -> Self {
        self.message = message;
        self
    }

    // Common error constructors
    pub fn bad_request(message: &'static str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal_server_error(message: &'static str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn service_unavailable(message: &'static str) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }

    /// Adattatore per `map_err`: logga l'errore del database e restituisce un 500 (503 se il pool non è disponibile)
    /// con il messaggio specifico dell'endpoint.
    ///
    /// ```ignore
    /// state.recipe.delete(&id).await.map_err(AppError::store("Error deleting recipe"))?;
    /// ```
    pub fn store(message: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |err| {
            error!("DB error: {}", err);
            Self::from(err).with_message(message)
        }
    }

    /// Come `store`, per gli errori di validazione dei DTO: 400 con il messaggio dell'endpoint.
    pub fn invalid(message: &'static str) -> impl FnOnce(validator::ValidationErrors) -> Self {
        move |err| {
            warn!("Validation failed: {}", err);
            Self::from(err).with_message(message)
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let base = match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                Self::service_unavailable("Database unavailable")
            }
            _ => Self::internal_server_error("Internal server error"),
        };
        base.with_details(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::bad_request("Validation error").with_details(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(ErrorResponse {
            message: self.message,
            error: self.details,
        });
        (self.status, body).into_response()
    }
}
