mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, SmsConfig};
pub use repos::{IReminderRepo, Repos};
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};

/// Everything the use cases need to talk to the outside world.
/// Created once at startup and shared by the http handlers and the
/// dispatch job.
#[derive(Clone)]
pub struct MediContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub sms: Arc<dyn ISmsGateway>,
}

struct ContextParams {
    pub mongodb_connection_string: String,
    pub mongodb_db_name: String,
}

impl MediContext {
    async fn create(params: ContextParams) -> anyhow::Result<Self> {
        let repos = Repos::create_mongodb(
            &params.mongodb_connection_string,
            &params.mongodb_db_name,
        )
        .await?;
        let config = Config::new();
        let sms = AfricasTalkingSmsGateway::new(&config.sms)?;
        Ok(Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            sms: Arc::new(sms),
        })
    }

    /// Context backed by in memory repositories and an `InMemorySmsGateway`
    /// that never leaves the process
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            sms: Arc::new(InMemorySmsGateway::new()),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<MediContext> {
    MediContext::create(ContextParams {
        mongodb_connection_string: get_mongodb_connection_string()?,
        mongodb_db_name: std::env::var("MONGODB_NAME").unwrap_or_else(|_| "medireminder".into()),
    })
    .await
}

fn get_mongodb_connection_string() -> anyhow::Result<String> {
    const MONGODB_CONNECTION_STRING: &str = "MONGODB_CONNECTION_STRING";

    std::env::var(MONGODB_CONNECTION_STRING)
        .map_err(|_| anyhow::anyhow!("{} env var to be present.", MONGODB_CONNECTION_STRING))
}
