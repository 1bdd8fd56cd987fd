//! Backend entry-point: loads the sales dataset, wires the session gate, and
//! serves pages, form posts, the statistics API, and OpenAPI docs.

use std::sync::Arc;

use actix_web::web;
use camino::Utf8PathBuf;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use sales_data::{DatasetError, SalesDataset};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::config::{AppSettings, SettingsError};
use backend::domain::AccountService;
use backend::domain::ports::StoreError;
use backend::inbound::http::health::HealthState;
use backend::inbound::http::session_config::{
    BuildMode, SessionConfigError, session_settings_from_env,
};
use backend::inbound::http::state::HttpState;
use backend::outbound::argon2_hasher::Argon2Hasher;
use backend::outbound::credential_file::JsonCredentialFile;
use backend::server::{ServerConfig, create_server};

/// Failures that abort startup.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("failed to load settings: {0}")]
    Settings(String),
    #[error(transparent)]
    BindAddr(#[from] SettingsError),
    #[error(transparent)]
    Session(#[from] SessionConfigError),
    #[error("failed to load sales dataset: {0}")]
    Dataset(#[from] DatasetError),
    #[error("credential file path '{0}' is not valid UTF-8")]
    UsersPath(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<(), StartupError> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(|err| StartupError::Settings(err.to_string()))?;
    let bind_addr = settings.bind_addr()?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())?;

    let data_path = settings.data_path();
    let dataset = SalesDataset::from_path(&data_path)?;
    info!(path = %data_path.display(), rows = dataset.len(), "sales dataset loaded");

    let users_file = settings.users_file();
    let users_path = Utf8PathBuf::try_from(users_file)
        .map_err(|err| StartupError::UsersPath(err.into_path_buf().display().to_string()))?;
    let store = JsonCredentialFile::new(users_path)?;
    info!(path = %store.path(), "credential file configured");
    let gate = AccountService::new(Arc::new(store), Arc::new(Argon2Hasher::new()));

    let http_state = web::Data::new(HttpState::new(Arc::new(gate), Arc::new(dataset)));
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state,
        http_state,
        ServerConfig::new(session, bind_addr),
    )?;
    info!(%bind_addr, "listening");

    server.await?;
    Ok(())
}
