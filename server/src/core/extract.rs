//! Extractor JSON e path che convertono i rifiuti di axum in `AppError` 400

use crate::core::AppError;
use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Path, Request,
        rejection::{JsonRejection, PathRejection},
    },
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use tracing::warn;

/// Come `Json<T>`, ma un body mancante, malformato o con content-type errato
/// produce un `{message, error}` con status 400 invece di 415/422 in testo semplice.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidJson(value)),
            Err(rejection) => {
                warn!("Rejected request body: {}", rejection.body_text());
                Err(rejection_to_error(rejection))
            }
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    AppError::bad_request("Invalid request body").with_details(rejection.body_text())
}

/// Come `Path<T>`: un segmento non convertibile (es. `/api/recipes/abc`) produce
/// un 400 JSON invece del testo semplice di axum.
pub struct ValidPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(ValidPath(value)),
            Err(rejection) => {
                warn!("Rejected path parameter: {}", rejection.body_text());
                Err(path_rejection_to_error(rejection))
            }
        }
    }
}

fn path_rejection_to_error(rejection: PathRejection) -> AppError {
    AppError::bad_request("Invalid id in URL").with_details(rejection.body_text())
}
