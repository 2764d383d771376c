//! Transactions API endpoints - JSON API and HTMX partial responses

use crate::routes::transactions::page::render_transaction_panel;
use crate::{ApiError, AppState};
use acctweb_core::state::LOAD_TRANSACTIONS_FALLBACK;
use acctweb_core::{actions, normalize_error, AccountId, CoreError, Transaction, TransactionForm};
use axum::extract::Path;
use axum::response::Html;
use axum::{Form, Json};

/// Transactions of an account, straight from the backend
pub async fn api_account_transactions(
    state: axum::extract::State<AppState>,
    Path(account_id): Path<AccountId>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    match state.backend.list_transactions(account_id).await {
        Ok(transactions) => Ok(Json(transactions)),
        Err(failure) => {
            let message = normalize_error(&failure, LOAD_TRANSACTIONS_FALLBACK);
            Err(CoreError::backend(&failure, message).into())
        }
    }
}

/// Open the panel of an account and return it
pub async fn htmx_panel_open(
    state: axum::extract::State<AppState>,
    Path(account_id): Path<AccountId>,
) -> Html<String> {
    if let Err(e) = actions::open_account(&state.dashboard, state.backend.as_ref(), account_id).await {
        log::debug!("panel for account {} rendered with error: {}", account_id, e);
    }
    render(&state).await
}

/// Create a transaction and return the panel
///
/// The form names its account; if that is not the open panel, the panel is
/// opened for it first. A failed load is shown and nothing is created.
pub async fn htmx_transaction_store(
    state: axum::extract::State<AppState>,
    Path(account_id): Path<AccountId>,
    Form(form): Form<TransactionForm>,
) -> Html<String> {
    let selected = state.dashboard.read().await.selected_account_id();
    if selected != Some(account_id) {
        log::debug!("opening account {} before creating a transaction", account_id);
        if let Err(e) = actions::open_account(&state.dashboard, state.backend.as_ref(), account_id).await {
            log::debug!("transaction not created, panel failed to load: {}", e);
            return render(&state).await;
        }
    }

    if let Err(e) =
        actions::create_transaction(&state.dashboard, state.backend.as_ref(), account_id, form).await
    {
        log::debug!("transaction not created: {}", e);
    }
    render(&state).await
}

/// Close the panel
pub async fn htmx_panel_close(state: axum::extract::State<AppState>) -> Html<String> {
    actions::close_account(&state.dashboard).await;
    render(&state).await
}

async fn render(state: &AppState) -> Html<String> {
    let dashboard = state.dashboard.read().await;
    Html(render_transaction_panel(&dashboard, &state.config.display))
}
