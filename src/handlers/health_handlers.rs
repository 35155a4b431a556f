use actix_web::HttpResponse;

/// Liveness probe. There is no backing store, so being able to answer is
/// the whole check.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "success": true }))
}
