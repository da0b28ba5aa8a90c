mod create_reminder;
mod get_reminders;
pub mod send_due_reminders;

use actix_web::web;
use create_reminder::{
    create_appointment_reminder_controller, create_medication_reminder_controller,
    create_reminder_controller,
};
use get_reminders::get_reminders_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/reminders", web::get().to(get_reminders_controller));
    cfg.route("/api/reminders", web::post().to(create_reminder_controller));
    cfg.route(
        "/api/reminders/medication",
        web::post().to(create_medication_reminder_controller),
    );
    cfg.route(
        "/api/reminders/appointment",
        web::post().to(create_appointment_reminder_controller),
    );
}
