mod error;
mod job_schedulers;
mod reminder;
mod shared;
mod sms;
mod status;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use error::ApiError;
use job_schedulers::start_send_reminders_job;
use medireminder_infra::MediContext;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub use job_schedulers::send_due_reminders;
pub use reminder::send_due_reminders::DispatchReport;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    reminder::configure_routes(cfg);
    sms::configure_routes(cfg);
    status::configure_routes(cfg);
}

/// Malformed json bodies get the same json error response as every other
/// invalid request
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::BadClientData(err.to_string()).into())
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: MediContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;
        Application::start_job_schedulers(context);

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn start_job_schedulers(context: MediContext) {
        start_send_reminders_job(context);
    }

    async fn configure_server(context: MediContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        let context = web::Data::new(context);

        let server = HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(context.clone())
                .app_data(json_config())
                .configure(configure_server_api)
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
