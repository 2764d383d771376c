//! User actions: validate, call the backend, apply the result
//!
//! The dashboard lock is released while the backend call is in flight, so
//! concurrent requests never wait on a slow backend. Results for a panel
//! that changed in the meantime are dropped by the dashboard itself.

use crate::backend::Backend;
use crate::error::{log_error, CoreResult};
use crate::forms::{AccountForm, TransactionForm};
use crate::models::AccountId;
use crate::session::SessionProvider;
use crate::state::Dashboard;
use tokio::sync::RwLock;

/// Reload the account list of the current user
pub async fn load_accounts(
    state: &RwLock<Dashboard>,
    backend: &dyn Backend,
    session: &dyn SessionProvider,
) -> CoreResult<()> {
    let user_id = {
        let mut dashboard = state.write().await;
        dashboard.begin_accounts_load();
        match session.current_user() {
            Some(user_id) => user_id,
            None => {
                let error = dashboard.session_missing();
                log_error("load_accounts", &error);
                return Err(error);
            }
        }
    };

    log::debug!("loading accounts for user {}", user_id);
    let result = backend.list_accounts(user_id).await;

    let outcome = state.write().await.accounts_loaded(result);
    outcome.inspect_err(|e| log_error("load_accounts", e))
}

/// Create an account from form input
pub async fn create_account(
    state: &RwLock<Dashboard>,
    backend: &dyn Backend,
    session: &dyn SessionProvider,
    form: AccountForm,
) -> CoreResult<()> {
    let request = state
        .write()
        .await
        .submit_account(form, session.current_user())
        .inspect_err(|e| log_error("create_account", e))?;

    log::debug!("creating account {:?}", request.account_name);
    let result = backend.create_account(&request).await;

    let outcome = state.write().await.account_created(result);
    outcome.inspect_err(|e| log_error("create_account", e))
}

/// Open the transaction panel of an account and load its transactions
pub async fn open_account(
    state: &RwLock<Dashboard>,
    backend: &dyn Backend,
    account_id: AccountId,
) -> CoreResult<()> {
    let ticket = state.write().await.open_transactions(account_id);

    log::debug!("loading transactions for account {}", account_id);
    let result = backend.list_transactions(account_id).await;

    let outcome = state.write().await.transactions_loaded(ticket, result);
    outcome
        .map(|_| ())
        .inspect_err(|e| log_error("open_account", e))
}

/// Close the transaction panel
pub async fn close_account(state: &RwLock<Dashboard>) {
    state.write().await.close_transactions();
}

/// Create a transaction on `account_id` from form input
///
/// Fails without a backend call unless `account_id` is the open panel.
pub async fn create_transaction(
    state: &RwLock<Dashboard>,
    backend: &dyn Backend,
    account_id: AccountId,
    form: TransactionForm,
) -> CoreResult<()> {
    let (ticket, request) = state
        .write()
        .await
        .submit_transaction(account_id, form)
        .inspect_err(|e| log_error("create_transaction", e))?;

    log::debug!("creating transaction on account {}", request.account_id);
    let result = backend.create_transaction(&request).await;

    let outcome = state.write().await.transaction_created(ticket, result);
    outcome
        .map(|_| ())
        .inspect_err(|e| log_error("create_transaction", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::failure::ApiFailure;
    use crate::session::StaticSession;
    use crate::testing::{sample_account, sample_transaction, RecordingBackend};
    use serde_json::json;

    #[tokio::test]
    async fn test_load_accounts() {
        let backend = RecordingBackend::new()
            .with_accounts(vec![sample_account(1, "Checking"), sample_account(2, "Savings")]);
        let state = RwLock::new(Dashboard::new());

        load_accounts(&state, &backend, &StaticSession::new(7)).await.unwrap();

        assert_eq!(state.read().await.accounts().len(), 2);
        assert_eq!(backend.calls(), vec!["list_accounts(7)"]);
    }

    #[tokio::test]
    async fn test_load_accounts_without_session_makes_no_call() {
        let backend = RecordingBackend::new();
        let state = RwLock::new(Dashboard::new());

        let error = load_accounts(&state, &backend, &StaticSession::anonymous())
            .await
            .unwrap_err();

        assert_eq!(error, CoreError::NoSession);
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_load_accounts_failure_uses_fallback() {
        let backend = RecordingBackend::new()
            .with_accounts_failure(ApiFailure::from_response(500, json!({})));
        let state = RwLock::new(Dashboard::new());

        assert!(load_accounts(&state, &backend, &StaticSession::new(1)).await.is_err());
        assert_eq!(
            state.read().await.account_error(),
            Some("Failed to load Accounts")
        );
    }

    #[tokio::test]
    async fn test_blank_account_name_makes_no_call() {
        let backend = RecordingBackend::new();
        let state = RwLock::new(Dashboard::new());

        let result = create_account(
            &state,
            &backend,
            &StaticSession::new(1),
            AccountForm::new("  ", "10"),
        )
        .await;

        assert!(result.is_err());
        assert!(backend.calls().is_empty());
        assert_eq!(
            state.read().await.account_error(),
            Some("Account Name must not be blank")
        );
    }

    #[tokio::test]
    async fn test_non_numeric_balance_makes_no_call() {
        let backend = RecordingBackend::new();
        let state = RwLock::new(Dashboard::new());

        let result = create_account(
            &state,
            &backend,
            &StaticSession::new(1),
            AccountForm::new("Savings", "lots"),
        )
        .await;

        assert!(result.is_err());
        assert!(backend.calls().is_empty());
        assert_eq!(
            state.read().await.account_error(),
            Some("Initial Balance must be a number with up to two decimal places")
        );
    }

    #[tokio::test]
    async fn test_created_account_is_last_and_inputs_cleared() {
        let backend = RecordingBackend::new().with_accounts(vec![sample_account(1, "Checking")]);
        let state = RwLock::new(Dashboard::new());
        let session = StaticSession::new(1);

        load_accounts(&state, &backend, &session).await.unwrap();
        create_account(&state, &backend, &session, AccountForm::new("Savings", "25.50"))
            .await
            .unwrap();

        let dashboard = state.read().await;
        let last = dashboard.accounts().last().unwrap();
        assert_eq!(last.account_name, "Savings");
        assert_eq!(dashboard.accounts().len(), 2);
        assert_eq!(dashboard.account_draft(), &AccountForm::default());
        assert_eq!(
            backend.calls(),
            vec!["list_accounts(1)", "create_account(Savings)"]
        );
    }

    #[tokio::test]
    async fn test_account_error_cleared_on_next_account_action() {
        let backend = RecordingBackend::new();
        let state = RwLock::new(Dashboard::new());
        let session = StaticSession::new(1);

        let _ = create_account(&state, &backend, &session, AccountForm::new("", "")).await;
        assert!(state.read().await.account_error().is_some());

        create_account(&state, &backend, &session, AccountForm::new("Travel", ""))
            .await
            .unwrap();
        assert_eq!(state.read().await.account_error(), None);
    }

    #[tokio::test]
    async fn test_panel_shows_most_recent_account() {
        let backend = RecordingBackend::new()
            .with_transactions(1, vec![sample_transaction(10, 1, "rent")])
            .with_transactions(2, vec![sample_transaction(20, 2, "salary")]);
        let state = RwLock::new(Dashboard::new());

        open_account(&state, &backend, 1).await.unwrap();
        close_account(&state).await;
        open_account(&state, &backend, 2).await.unwrap();

        let dashboard = state.read().await;
        assert_eq!(dashboard.selected_account_id(), Some(2));
        let descriptions: Vec<_> = dashboard
            .transactions()
            .iter()
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["salary"]);
    }

    #[tokio::test]
    async fn test_create_transaction_validation_makes_no_call() {
        let backend = RecordingBackend::new().with_transactions(4, vec![]);
        let state = RwLock::new(Dashboard::new());
        open_account(&state, &backend, 4).await.unwrap();

        let form = TransactionForm {
            amount: "1.234".to_string(),
            kind: "expense".to_string(),
            ..Default::default()
        };
        assert!(create_transaction(&state, &backend, 4, form).await.is_err());
        assert_eq!(backend.calls(), vec!["list_transactions(4)"]);
        assert_eq!(
            state.read().await.transaction_error(),
            Some("Amount must be a number with up to two decimal places")
        );
    }

    #[tokio::test]
    async fn test_create_transaction_appends() {
        let backend = RecordingBackend::new()
            .with_transactions(4, vec![sample_transaction(1, 4, "opening")]);
        let state = RwLock::new(Dashboard::new());
        open_account(&state, &backend, 4).await.unwrap();

        let form = TransactionForm {
            amount: "-12.50".to_string(),
            date: "".to_string(),
            description: "Lunch".to_string(),
            kind: "expense".to_string(),
        };
        create_transaction(&state, &backend, 4, form).await.unwrap();

        let dashboard = state.read().await;
        assert_eq!(dashboard.transactions().len(), 2);
        assert_eq!(dashboard.transactions()[1].description, "Lunch");
        assert_eq!(dashboard.transactions()[1].date, None);
        assert_eq!(dashboard.transaction_error(), None);
    }

    #[tokio::test]
    async fn test_create_transaction_backend_failure() {
        let backend = RecordingBackend::new()
            .with_transactions(4, vec![])
            .with_create_failure(ApiFailure::from_response(
                400,
                json!({ "fieldErrors": { "title": "Type is not supported" } }),
            ));
        let state = RwLock::new(Dashboard::new());
        open_account(&state, &backend, 4).await.unwrap();

        let form = TransactionForm {
            amount: "3".to_string(),
            kind: "gift".to_string(),
            ..Default::default()
        };
        let error = create_transaction(&state, &backend, 4, form).await.unwrap_err();

        assert_eq!(error.to_string(), "Type is not supported");
        let dashboard = state.read().await;
        assert_eq!(dashboard.transaction_error(), Some("Type is not supported"));
        assert_eq!(dashboard.transaction_draft().kind, "gift");
    }

    #[tokio::test]
    async fn test_create_transaction_for_switched_panel_makes_no_call() {
        let backend = RecordingBackend::new()
            .with_transactions(4, vec![])
            .with_transactions(9, vec![]);
        let state = RwLock::new(Dashboard::new());
        open_account(&state, &backend, 4).await.unwrap();
        open_account(&state, &backend, 9).await.unwrap();

        let form = TransactionForm {
            amount: "5".to_string(),
            kind: "expense".to_string(),
            ..Default::default()
        };
        let error = create_transaction(&state, &backend, 4, form).await.unwrap_err();

        assert_eq!(error, CoreError::PanelChanged { account_id: 4 });
        assert_eq!(
            backend.calls(),
            vec!["list_transactions(4)", "list_transactions(9)"]
        );
    }
}
