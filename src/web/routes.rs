use actix_web::{error::InternalError, web, HttpResponse};
use log::warn;
use serde_json::{json, Value};

use crate::web::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    let invalid_body = json!({ "error": "Invalid request body" });

    cfg.service(
        web::resource("/analyze")
            .app_data(json_config(invalid_body.clone()))
            .route(web::post().to(handlers::analyze)),
    )
    .service(
        web::resource("/suggest")
            .app_data(json_config(json!({ "suggestions": [] })))
            .route(web::post().to(handlers::suggest)),
    )
    .service(
        web::resource("/complete")
            .app_data(json_config(json!({ "completed": "" })))
            .route(web::post().to(handlers::complete)),
    )
    .service(
        web::resource("/insight")
            .app_data(json_config(invalid_body.clone()))
            .route(web::post().to(handlers::insight)),
    )
    .service(
        web::resource("/auto-reply")
            .app_data(json_config(json!({ "reply": "" })))
            .route(web::post().to(handlers::auto_reply)),
    )
    .service(
        web::resource("/smart-search")
            .app_data(json_config(json!({ "results": [] })))
            .route(web::post().to(handlers::smart_search)),
    )
    .service(
        web::resource("/translate")
            .app_data(json_config(invalid_body))
            .route(web::post().to(handlers::translate)),
    )
    .route("/health", web::get().to(handlers::health_check));
}

/// Bodies that do not parse are answered with HTTP 400 and the endpoint's
/// default envelope.
fn json_config(fallback: Value) -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(move |err, req| {
            warn!("Rejected body for {}: {}", req.path(), err);
            let response = HttpResponse::BadRequest().json(fallback.clone());
            InternalError::from_response(err, response).into()
        })
}
