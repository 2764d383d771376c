//! Accounts API endpoints - JSON API and HTMX partial responses

use crate::routes::accounts::page::render_accounts_section;
use crate::{ApiError, AppState};
use acctweb_core::state::LOAD_ACCOUNTS_FALLBACK;
use acctweb_core::{actions, normalize_error, Account, AccountForm, CoreError};
use axum::response::Html;
use axum::{Form, Json};

/// Accounts of the signed-in user, straight from the backend
pub async fn api_accounts(
    state: axum::extract::State<AppState>,
) -> Result<Json<Vec<Account>>, ApiError> {
    let user_id = state.session.current_user().ok_or(ApiError::Unauthorized)?;

    match state.backend.list_accounts(user_id).await {
        Ok(accounts) => Ok(Json(accounts)),
        Err(failure) => {
            let message = normalize_error(&failure, LOAD_ACCOUNTS_FALLBACK);
            Err(CoreError::backend(&failure, message).into())
        }
    }
}

/// Reload the account list and return the accounts section
pub async fn htmx_accounts_list(state: axum::extract::State<AppState>) -> Html<String> {
    if let Err(e) =
        actions::load_accounts(&state.dashboard, state.backend.as_ref(), state.session.as_ref()).await
    {
        log::debug!("accounts list rendered with error: {}", e);
    }

    let dashboard = state.dashboard.read().await;
    Html(render_accounts_section(&dashboard, &state.config.display))
}

/// Create an account and return the accounts section
pub async fn htmx_account_create(
    state: axum::extract::State<AppState>,
    Form(form): Form<AccountForm>,
) -> Html<String> {
    if let Err(e) = actions::create_account(
        &state.dashboard,
        state.backend.as_ref(),
        state.session.as_ref(),
        form,
    )
    .await
    {
        log::debug!("account not created: {}", e);
    }

    let dashboard = state.dashboard.read().await;
    Html(render_accounts_section(&dashboard, &state.config.display))
}
