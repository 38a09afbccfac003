use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::Result;
use article_desk::application::{
    editor::EditorDependencies,
    ports::{media::ImageStore, time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use article_desk::config::AppConfig;
use article_desk::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    category::CategoryRepository,
};
use article_desk::infrastructure::{
    database,
    media::LocalImageStore,
    repositories::{
        SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteCategoryRepository,
    },
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use article_desk::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let article_write: Arc<dyn ArticleWriteRepository> =
        Arc::new(SqliteArticleWriteRepository::new(pool.clone()));
    let article_read: Arc<dyn ArticleReadRepository> =
        Arc::new(SqliteArticleReadRepository::new(pool.clone()));
    let categories: Arc<dyn CategoryRepository> =
        Arc::new(SqliteCategoryRepository::new(pool.clone()));
    let images: Arc<dyn ImageStore> = Arc::new(LocalImageStore::new(
        config.media_root().clone(),
        config.media_base_url(),
        config.placeholder_image_url(),
    ));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(EditorDependencies {
        article_read,
        article_write,
        categories,
        images,
        slugger,
        clock,
    }));

    let state = HttpState::with_session_ttl(services, config.editor_session_ttl());
    spawn_session_sweeper(&state);
    let app = build_router(
        state,
        RouterOptions {
            allowed_origins: config.allowed_origins().to_vec(),
            media_root: config.media_root().clone(),
            media_mount: config.media_base_url().to_string(),
        },
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    Ok(())
}

/// Evicts abandoned editing sessions even when no request touches the registry.
fn spawn_session_sweeper(state: &HttpState) {
    let sessions = Arc::clone(&state.sessions);
    let period = sessions.idle_ttl().min(Duration::from_secs(60));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            sessions.purge_expired().await;
        }
    });
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
