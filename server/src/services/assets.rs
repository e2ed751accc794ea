//! Static assets - Client web servito dalla directory `static_dir`

use axum::{
    extract::Request,
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};
use tracing::debug;

/// Forza `application/javascript` per i file `.js`, indipendentemente dal mime
/// dedotto da `ServeDir`.
pub async fn script_content_type(req: Request, next: Next) -> Response {
    let is_script = req.uri().path().ends_with(".js");
    let mut response = next.run(req).await;

    if is_script && response.status().is_success() {
        debug!("Serving script with application/javascript");
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/javascript"),
        );
    }
    response
}
