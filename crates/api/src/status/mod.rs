use actix_web::{web, HttpResponse};
use chrono::{TimeZone, Utc};
use medireminder_api_structs::get_service_health::*;
use medireminder_infra::MediContext;

async fn status(ctx: web::Data<MediContext>) -> HttpResponse {
    let now = Utc
        .timestamp_millis_opt(ctx.sys.get_timestamp_millis())
        .single()
        .unwrap_or_else(Utc::now);
    HttpResponse::Ok().json(APIResponse::ok(now))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(status));
}
