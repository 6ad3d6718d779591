use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use configuration::Settings;
use marks::MarksService;
use serde_json::json;
use std::any::Any;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, AllowHeaders, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;
pub mod health;
pub mod ui;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub marks_service: MarksService,
}

impl AppState {
    pub fn new(marks_service: MarksService) -> Arc<Self> {
        Arc::new(Self { marks_service })
    }
}

/// Builds the full router: JSON API under `/api`, the UI page at `/` and `/marks`.
///
/// Only GET and POST exist on `/api/marks`; any other method is answered with
/// 405 by the router itself.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(cors::Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/", get(ui::marks_page))
        .route("/marks", get(ui::marks_page))
        .route("/api/health", get(handlers::health))
        .route(
            "/api/marks",
            get(handlers::get_marks).post(handlers::add_marks),
        )
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(1024 * 1024))
}

/// Renders a panicking handler as `500 { success: false, message }`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Internal server error".to_string()
    };
    tracing::error!(%message, "Request handler panicked.");

    let body = Json(json!({ "success": false, "message": message }));
    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}

/// The main function to configure and run the web server.
///
/// Owns the store lifecycle: the store is opened here, injected into the
/// service, and closed once the server has drained after a shutdown signal.
pub async fn run_server(settings: Settings) -> anyhow::Result<()> {
    let store = database::open_store(&settings.database).await?;
    let marks_service = MarksService::new(store);
    let app = build_router(AppState::new(marks_service.clone()));

    let addr = settings.server.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Web server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped; releasing the marks store.");
    marks_service.shutdown().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C.");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM.");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received.");
}
