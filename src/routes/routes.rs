use actix_web::{HttpRequest, web};

use crate::handlers::health_handlers::health_check;
use crate::handlers::qr_handlers::{generate_qr, view, welcome};
use crate::models::qr_kind::ENDPOINTS;
use crate::state::app_state::AppState;

/// Configure the routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    let mut scope = web::scope("/qr")
        .route("", web::get().to(welcome))
        .route("/view", web::get().to(view))
        .route("/health", web::get().to(health_check));

    // One POST route per entry of the endpoint table
    for endpoint in ENDPOINTS {
        scope = scope.route(
            endpoint.path,
            web::post().to(
                move |state: web::Data<AppState>, req: HttpRequest, body: web::Bytes| {
                    generate_qr(endpoint, state, req, body)
                },
            ),
        );
    }

    cfg.service(scope);
}
