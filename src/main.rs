mod telemetry;

use medireminder_api::Application;
use medireminder_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};
use tracing::error;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("medireminder_server".into(), "info".into());
    init_subscriber(subscriber);

    let context = match setup_context().await {
        Ok(context) => context,
        Err(e) => {
            error!("Unable to connect to the data store: {:?}", e);
            std::process::exit(1);
        }
    };

    let app = Application::new(context).await?;
    app.start().await
}
