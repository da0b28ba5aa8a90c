mod send_sms;
mod send_test_sms;

use actix_web::web;
use send_sms::send_sms_controller;
use send_test_sms::send_test_sms_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/send-sms", web::post().to(send_sms_controller));
    cfg.route("/test-sms", web::post().to(send_test_sms_controller));
}
