//! HTTP server with HTMX support
//!
//! Routes are organized into modules:
//! - routes::accounts: Account list and account creation
//! - routes::transactions: Transaction panel of the selected account

pub mod error;
pub mod routes;

use acctweb_config::Config;
use acctweb_core::{actions, BackendRef, Dashboard, SessionRef};
use axum::{
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<RwLock<Dashboard>>,
    pub backend: BackendRef,
    pub session: SessionRef,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, backend: BackendRef, session: SessionRef) -> Self {
        Self {
            dashboard: Arc::new(RwLock::new(Dashboard::new())),
            backend,
            session,
            config,
        }
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::accounts::{api_accounts, htmx_account_create, htmx_accounts_list};
    use routes::transactions::{
        api_account_transactions, htmx_panel_close, htmx_panel_open, htmx_transaction_store,
    };

    Router::new()
        // API endpoints
        .route("/api/health", get(health_check))
        .route("/api/state", get(api_state))
        .route("/api/accounts", get(api_accounts))
        .route("/api/accounts/:id/transactions", get(api_account_transactions))
        // HTMX page routes
        .route("/", get(index_page))
        // HTMX partial routes
        .route("/accounts", post(htmx_account_create))
        .route("/accounts/list", get(htmx_accounts_list))
        .route("/accounts/:id/transactions", get(htmx_panel_open))
        .route("/accounts/:id/transactions", post(htmx_transaction_store))
        .route("/transactions/close", post(htmx_panel_close))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Current dashboard state (JSON API)
async fn api_state(state: axum::extract::State<AppState>) -> Json<Dashboard> {
    Json(state.dashboard.read().await.clone())
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - Acctweb</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
        .htmx-request.htmx-indicator {{ opacity: 1; }}
    </style>
</head>
<body class="bg-gray-50 text-gray-900">
    {}
</body>
</html>"#,
        acctweb_utils::escape_html(title),
        content
    )
}

/// Page header bar
fn header_bar() -> String {
    String::from(
        "<header class='bg-white border-b'><div class='max-w-7xl mx-auto px-6 py-4'><h1 class='text-xl font-bold text-indigo-600'>Acctweb</h1></div></header>",
    )
}

fn is_htmx_request(headers: &axum::http::HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap content for full page or HTMX partial
pub fn page_response(headers: &axum::http::HeaderMap, title: &str, inner_content: &str) -> String {
    if is_htmx_request(headers) {
        format!(
            "<main class='max-w-7xl mx-auto p-6'>{}</main>",
            inner_content
        )
    } else {
        base_html(
            title,
            &format!(
                "{}<main class='max-w-7xl mx-auto p-6'>{}</main>",
                header_bar(),
                inner_content
            ),
        )
    }
}

/// Error banner shown above a section
pub fn error_banner(message: &str) -> String {
    format!(
        "<div class='bg-red-50 border border-red-200 rounded-lg p-4 mb-4 text-red-700' role='alert'>{}</div>",
        acctweb_utils::escape_html(message)
    )
}

/// Index page: account list and transaction panel
async fn index_page(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    if let Err(e) = actions::load_accounts(&state.dashboard, state.backend.as_ref(), state.session.as_ref()).await {
        log::debug!("index page rendered with account error: {}", e);
    }

    let dashboard = state.dashboard.read().await;
    let inner_content = format!(
        r#"<div class='grid grid-cols-1 lg:grid-cols-2 gap-6'>
            <section id='accounts-section' class='bg-white rounded-xl shadow-sm p-6'>{}</section>
            <section id='transactions-panel' class='bg-white rounded-xl shadow-sm p-6'>{}</section>
        </div>"#,
        routes::accounts::render_accounts_section(&dashboard, &state.config.display),
        routes::transactions::render_transaction_panel(&dashboard, &state.config.display),
    );

    axum::response::Html(page_response(&headers, "Accounts", &inner_content))
}

/// Start the HTTP server
///
/// Binds to `server.host:server.port` and serves until Ctrl-C.
pub async fn start_server(
    config: Config,
    backend: BackendRef,
    session: SessionRef,
) -> std::io::Result<()> {
    let addr = config.bind_addr();
    let backend_url = config.backend.base_url.clone();
    let router = create_router(AppState::new(config, backend, session));

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting Acctweb server on http://{}", addr);
    log::info!("Backend service: {}", backend_url);
    log::info!("Available routes:");
    log::info!("  - / (Accounts and transactions)");
    log::info!("  - /api/* (JSON API endpoints)");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
}
