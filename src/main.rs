//! Nimathi API server
//!
//! Wires configuration, adapters, and handlers, then serves the HTTP API.

use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use nimathi::{
    adapters::{
        http::{build_router, RewardsHandlers, RouterSettings},
        InMemoryProfileStore, JwtConfig, JwtSessionValidator, MockSessionValidator,
        RestProfileStore, RestStoreConfig, SystemClock,
    },
    application::{
        CompleteActivityHandler, CreateProfileHandler, GetRewardStandingHandler,
        RecordStressLevelHandler,
    },
    config::{AppConfig, AuthConfig, StoreBackend, StoreConfig},
    ports::{ActivityLog, Clock, ProfileStore, SessionValidator},
};
use secrecy::ExposeSecret;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;

    init_tracing(&config);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    let addr = config.server.socket_addr()?;
    info!(
        environment = ?config.server.environment,
        store = ?config.store.backend,
        %addr,
        "starting nimathi"
    );

    let (store, activity_log) = build_store(&config.store)?;
    let validator = build_validator(&config.auth)?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let handlers = RewardsHandlers::new(
        Arc::new(CreateProfileHandler::new(store.clone(), clock.clone())),
        Arc::new(GetRewardStandingHandler::new(store.clone())),
        Arc::new(CompleteActivityHandler::new(
            store.clone(),
            activity_log,
            clock.clone(),
        )),
        Arc::new(RecordStressLevelHandler::new(store, clock)),
    )
    .with_verbose_errors(config.features.verbose_errors);

    let settings = RouterSettings {
        request_timeout: config.server.request_timeout(),
        cors_origins: config.server.cors_origins_list(),
    };
    let app = build_router(handlers, validator, &settings);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.features.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn build_store(
    config: &StoreConfig,
) -> Result<(Arc<dyn ProfileStore>, Arc<dyn ActivityLog>), BoxError> {
    match config.backend {
        StoreBackend::Memory => {
            warn!("using in-memory profile store; data is lost on restart");
            let store = Arc::new(InMemoryProfileStore::new());
            let profiles: Arc<dyn ProfileStore> = store.clone();
            let log: Arc<dyn ActivityLog> = store;
            Ok((profiles, log))
        }
        StoreBackend::Rest => {
            let base_url = config.base_url.clone().unwrap_or_default();
            let api_key = config
                .api_key
                .as_ref()
                .map(|k| k.expose_secret().clone())
                .unwrap_or_default();
            let rest_config = RestStoreConfig::new(base_url, api_key)
                .with_tables(&config.profiles_table, &config.activities_table)
                .with_timeout(config.timeout());
            let store = Arc::new(RestProfileStore::new(rest_config)?);
            let profiles: Arc<dyn ProfileStore> = store.clone();
            let log: Arc<dyn ActivityLog> = store;
            Ok((profiles, log))
        }
    }
}

fn build_validator(config: &AuthConfig) -> Result<Arc<dyn SessionValidator>, BoxError> {
    if let Some(secret) = &config.jwt_secret {
        let mut jwt = JwtConfig::new(secret.expose_secret().clone(), &config.audience);
        if let Some(issuer) = &config.issuer {
            jwt = jwt.with_issuer(issuer);
        }
        return Ok(Arc::new(JwtSessionValidator::new(jwt)));
    }

    warn!("no JWT secret configured; accepting static dev tokens only");
    let pairs = config.dev_tokens.as_deref().unwrap_or_default();
    Ok(Arc::new(MockSessionValidator::from_pairs(pairs)?))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {}", e);
    }
    info!("shutdown signal received");
}
