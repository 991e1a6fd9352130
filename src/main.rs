use axum::{routing::get, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use impostor::{
    api,
    config::ServerConfig,
    state::{AppState, Session},
    theme::ThemeStore,
    ticks,
    timer::TokioScheduler,
    words::{load_word_list, BuiltinWords, JsonFileWords},
    ws,
};

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env var reads)
    if let Err(e) = dotenvy::dotenv() {
        // Not an error if .env doesn't exist, only log if it's a different issue
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "impostor=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Impostor...");

    let config = ServerConfig::from_env();

    // One-shot dataset load; failures degrade to the fallback pair
    let words = match &config.words_path {
        Some(path) => load_word_list(&JsonFileWords::new(path)).await,
        None => load_word_list(&BuiltinWords).await,
    };
    if let Some(reason) = words.degraded_reason() {
        tracing::warn!(
            "Word list unavailable ({}). Every round will use the fallback word.",
            reason
        );
    }

    let theme = ThemeStore::load(config.theme_path.clone()).await;

    let (scheduler, tick_rx) = TokioScheduler::new();
    let session = Session::new(
        config.game.clone(),
        words,
        Box::new(scheduler),
        StdRng::from_os_rng(),
    );
    let state = Arc::new(AppState::new(session, theme));

    // Spawn background task that feeds countdown ticks into the session
    ticks::spawn_tick_pump(state.clone(), tick_rx);

    let app = Router::new()
        .route("/ws", get(ws::ws_handler))
        .merge(api::routes())
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!("Listening on http://{}", config.bind);

    let listener = tokio::net::TcpListener::bind(config.bind).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
