use actix_web::HttpResponse;

/// GET /health_check
///
/// Liveness only; the user store is not probed.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
