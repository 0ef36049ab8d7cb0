//! Cadenza HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use application::{
    ChatService, CloningService, ConversationRegistry, NarrationService, ReaderService,
};
use infrastructure::{AppConfig, Environment, GeminiInferenceAdapter, SpeechAdapter};
use presentation_http::{routes, set_expose_internal_errors, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_tracing(&config);

    info!("Cadenza v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(e) = load_error {
        tracing::warn!("Failed to load config, using defaults: {}", e);
    }

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!(
        environment = %config.environment,
        host = %config.server.host,
        port = %config.server.port,
        model = %config.inference.default_model,
        "Configuration loaded"
    );

    // Internal error details stay server-side outside of development
    set_expose_internal_errors(config.environment == Environment::Development);

    // Initialize adapters
    let inference_adapter = GeminiInferenceAdapter::new(config.inference.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize inference: {e}"))?;
    let speech_adapter = SpeechAdapter::new(config.speech.clone(), config.recognizer.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize speech: {e}"))?;

    let inference: Arc<dyn application::ports::InferencePort> = Arc::new(inference_adapter);
    let speech: Arc<dyn application::ports::SpeechPort> = Arc::new(speech_adapter);

    // Initialize services
    let registry = Arc::new(ConversationRegistry::new());
    let chat_service = ChatService::new(
        Arc::clone(&inference),
        Arc::clone(&speech),
        Arc::clone(&registry),
    );
    let narration_service = NarrationService::new(Arc::clone(&inference), Arc::clone(&speech));
    let cloning_service = CloningService::new(Arc::clone(&speech));
    let reader_service = ReaderService::new(Arc::clone(&inference), Arc::clone(&speech));

    let state = AppState {
        chat_service: Arc::new(chat_service),
        narration_service: Arc::new(narration_service),
        cloning_service: Arc::new(cloning_service),
        reader_service: Arc::new(reader_service),
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = routes::create_router(state);

    // Configure CORS layer
    let cors_layer = if config.server.allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production mode: restrict to configured origins
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::DELETE])
            .allow_headers(Any)
    };

    // Add middleware (order matters: first added = outermost)
    let mut app = app.layer(TraceLayer::new_for_http());

    if config.server.cors_enabled {
        app = app.layer(cors_layer);
    }

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Initialize the tracing subscriber per the configured log format
fn init_tracing(config: &AppConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cadenza_server=debug,tower_http=debug".into());

    if config.server.log_format == "json" {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
    // The actual connection draining is handled by axum's graceful_shutdown
}
