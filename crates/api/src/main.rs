use std::net::SocketAddr;
use std::sync::Arc;

use carcare_cloud::{CloudinaryClient, DisabledMediaHost, MediaCredentials, MediaHost};
use carcare_events::delivery::smtp::DEFAULT_SENDER_NAME;
use carcare_events::delivery::{EmailConfig, SmtpMailer};
use carcare_events::{DisabledMailer, Mailer, Notifier, SiteInfo};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carcare_api::config::ServerConfig;
use carcare_api::router::build_app_router;
use carcare_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "carcare_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = carcare_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    carcare_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    carcare_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Mail ---
    let email_config = EmailConfig::from_env();
    let mailer: Arc<dyn Mailer> = match &email_config {
        Some(cfg) => match SmtpMailer::new(cfg) {
            Ok(mailer) => {
                tracing::info!(host = %cfg.smtp_host, port = cfg.smtp_port, "SMTP mailer configured");
                Arc::new(mailer)
            }
            Err(e) => {
                tracing::warn!(error = %e, "SMTP mailer could not be built, email disabled");
                Arc::new(DisabledMailer)
            }
        },
        None => {
            tracing::warn!("MAIL_USER / MAIL_APP_PASSWORD not set, email disabled");
            Arc::new(DisabledMailer)
        }
    };

    let site = SiteInfo {
        business_name: email_config
            .as_ref()
            .map(|c| c.sender_name.clone())
            .unwrap_or_else(|| DEFAULT_SENDER_NAME.to_string()),
        site_url: config.site_url.clone(),
        support_phone: config.support_phone.clone(),
        admin_email: email_config
            .as_ref()
            .map(|c| c.admin_email.clone())
            .unwrap_or_default(),
        contact_email: email_config
            .as_ref()
            .map(|c| c.user.clone())
            .unwrap_or_default(),
    };
    let notifier = Arc::new(Notifier::new(mailer, site));

    // --- Media host ---
    let media_credentials = MediaCredentials::from_env();
    let media: Arc<dyn MediaHost> = match &media_credentials {
        Some(creds) => {
            tracing::info!(cloud_name = %creds.cloud_name, "Media host configured");
            Arc::new(CloudinaryClient::new(creds.clone()))
        }
        None => {
            tracing::warn!("Media host credentials not set, image listing and deletion disabled");
            Arc::new(DisabledMediaHost)
        }
    };

    if config.admin.is_none() {
        tracing::warn!("ADMIN_USERNAME / ADMIN_PASSWORD not set, admin login disabled");
    }

    // --- App state ---
    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        media,
        media_credentials: media_credentials.map(Arc::new),
        notifier,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    pool.close().await;
    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
