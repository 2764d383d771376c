//! HTTP client for the accounts/transactions REST service
//!
//! Endpoints:
//! - GET  /api/accounts/{userId}
//! - POST /api/accounts
//! - GET  /api/transactions/{accountId}
//! - POST /api/transactions
//!
//! Every request and response is JSON. A non-success response becomes an
//! [`ApiFailure`] carrying the status and the parsed error body.

use acctweb_core::{
    Account, AccountId, ApiFailure, Backend, CreateAccountRequest, CreateTransactionRequest,
    Transaction, UserId,
};
use async_trait::async_trait;
use hyper::client::HttpConnector;
use hyper::{header, Body, Client, Method, Request};
use serde::de::DeserializeOwned;
use serde::Serialize;

const JSON: &str = "application/json";

/// [`Backend`] talking to the REST service over plain HTTP
#[derive(Clone)]
pub struct HttpBackend {
    client: Client<HttpConnector>,
    base_url: String,
}

impl HttpBackend {
    /// `base_url` is the service root, e.g. `http://localhost:8080`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiFailure> {
        let request = Request::builder()
            .method(Method::GET)
            .uri(self.url(path))
            .header(header::CONTENT_TYPE, JSON)
            .header(header::ACCEPT, JSON)
            .body(Body::empty())
            .map_err(|e| ApiFailure::transport(e.to_string()))?;
        self.send(request).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiFailure>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_vec(body).map_err(|e| ApiFailure::transport(e.to_string()))?;
        let request = Request::builder()
            .method(Method::POST)
            .uri(self.url(path))
            .header(header::CONTENT_TYPE, JSON)
            .header(header::ACCEPT, JSON)
            .body(Body::from(body))
            .map_err(|e| ApiFailure::transport(e.to_string()))?;
        self.send(request).await
    }

    async fn send<T: DeserializeOwned>(&self, request: Request<Body>) -> Result<T, ApiFailure> {
        let method = request.method().clone();
        let uri = request.uri().clone();
        log::debug!("{} {}", method, uri);

        let response = self.client.request(request).await.map_err(|e| {
            log::warn!("{} {} failed: {}", method, uri, e);
            ApiFailure::transport(e.to_string())
        })?;

        let status = response.status();
        let bytes = hyper::body::to_bytes(response.into_body())
            .await
            .map_err(|e| ApiFailure::transport(e.to_string()))?;

        if !status.is_success() {
            log::warn!("{} {} -> {}", method, uri, status);
            return Err(ApiFailure::from_body(status.as_u16(), &bytes));
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            log::warn!("{} {} returned an unexpected body: {}", method, uri, e);
            ApiFailure::decode(status.as_u16(), format!("Unexpected response from backend: {}", e))
        })
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn list_accounts(&self, user_id: UserId) -> Result<Vec<Account>, ApiFailure> {
        self.get(&format!("/api/accounts/{}", user_id)).await
    }

    async fn create_account(&self, request: &CreateAccountRequest) -> Result<Account, ApiFailure> {
        self.post("/api/accounts", request).await
    }

    async fn list_transactions(&self, account_id: AccountId) -> Result<Vec<Transaction>, ApiFailure> {
        self.get(&format!("/api/transactions/{}", account_id)).await
    }

    async fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<Transaction, ApiFailure> {
        self.post("/api/transactions", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acctweb_core::{normalize_error, TransactionDate};
    use axum::extract::Path;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use rust_decimal::Decimal;
    use serde_json::{json, Value};
    use std::str::FromStr;

    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn accounts_for(Path(user_id): Path<i64>) -> (StatusCode, Json<Value>) {
        if user_id == 1 {
            (
                StatusCode::OK,
                Json(json!([
                    { "id": 1, "accountName": "Checking", "initialBalance": 100.5, "user": { "id": 1 } },
                    { "id": 2, "accountName": "Savings", "initialBalance": 0 }
                ])),
            )
        } else {
            (StatusCode::NOT_FOUND, Json(json!({})))
        }
    }

    async fn create_account(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        assert_eq!(headers.get("content-type").unwrap(), JSON);
        if body["accountName"] == "Taken" {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "fieldErrors": { "title": "Account name already exists" }, "message": "Validation failed" })),
            );
        }
        (
            StatusCode::CREATED,
            Json(json!({
                "id": 3,
                "accountName": body["accountName"],
                "initialBalance": body["initialBalance"],
                "user": { "id": body["userId"] }
            })),
        )
    }

    async fn transactions_for(Path(account_id): Path<i64>) -> (StatusCode, String) {
        match account_id {
            1 => (
                StatusCode::OK,
                json!([
                    { "id": 10, "date": "2024-02-01", "description": "Rent", "amount": -800, "type": "expense" },
                    { "id": 11, "date": 1709251200000i64, "description": "Pay", "amount": 2000.25, "type": "income" }
                ])
                .to_string(),
            ),
            2 => (StatusCode::OK, String::new()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "oops".to_string()),
        }
    }

    async fn create_transaction(Json(body): Json<Value>) -> Json<Value> {
        Json(json!({
            "id": 12,
            "date": body["date"],
            "description": body["description"],
            "amount": body["amount"],
            "type": body["type"]
        }))
    }

    fn fake_backend() -> Router {
        Router::new()
            .route("/api/accounts/:user_id", get(accounts_for))
            .route("/api/accounts", post(create_account))
            .route("/api/transactions/:account_id", get(transactions_for))
            .route("/api/transactions", post(create_transaction))
    }

    #[tokio::test]
    async fn test_list_accounts() {
        let backend = HttpBackend::new(spawn_backend(fake_backend()).await);
        let accounts = backend.list_accounts(1).await.unwrap();

        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].account_name, "Checking");
        assert_eq!(accounts[0].initial_balance, Decimal::from_str("100.5").unwrap());
        assert_eq!(accounts[1].user, None);
    }

    #[tokio::test]
    async fn test_list_accounts_not_found() {
        let backend = HttpBackend::new(spawn_backend(fake_backend()).await);
        let failure = backend.list_accounts(9).await.unwrap_err();

        assert_eq!(failure.status, Some(404));
        assert_eq!(normalize_error(&failure, "Failed to load Accounts"), "Not Found");
    }

    #[tokio::test]
    async fn test_create_account() {
        let backend = HttpBackend::new(spawn_backend(fake_backend()).await);
        let request = CreateAccountRequest {
            account_name: "Travel".to_string(),
            initial_balance: Decimal::from_str("12.34").unwrap(),
            user_id: 1,
        };
        let account = backend.create_account(&request).await.unwrap();

        assert_eq!(account.id, 3);
        assert_eq!(account.account_name, "Travel");
        assert_eq!(account.initial_balance, Decimal::from_str("12.34").unwrap());
        assert_eq!(account.user.unwrap().id, 1);
    }

    #[tokio::test]
    async fn test_create_account_field_error() {
        let backend = HttpBackend::new(spawn_backend(fake_backend()).await);
        let request = CreateAccountRequest {
            account_name: "Taken".to_string(),
            initial_balance: Decimal::ZERO,
            user_id: 1,
        };
        let failure = backend.create_account(&request).await.unwrap_err();

        assert_eq!(failure.status, Some(400));
        assert_eq!(
            normalize_error(&failure, "Failed to create Account"),
            "Account name already exists"
        );
    }

    #[tokio::test]
    async fn test_list_transactions() {
        let backend = HttpBackend::new(spawn_backend(fake_backend()).await);
        let transactions = backend.list_transactions(1).await.unwrap();

        assert_eq!(transactions.len(), 2);
        assert!(transactions[0].is_expense());
        assert_eq!(transactions[1].date, Some(TransactionDate::Timestamp(1709251200000)));
    }

    #[tokio::test]
    async fn test_non_json_error_body() {
        let backend = HttpBackend::new(spawn_backend(fake_backend()).await);
        let failure = backend.list_transactions(99).await.unwrap_err();

        assert_eq!(failure.status, Some(500));
        assert_eq!(failure.data, json!({}));
        assert_eq!(
            normalize_error(&failure, "Failed to load Transactions"),
            "Failed to load Transactions"
        );
    }

    #[tokio::test]
    async fn test_empty_success_body_is_a_failure() {
        let backend = HttpBackend::new(spawn_backend(fake_backend()).await);
        let failure = backend.list_transactions(2).await.unwrap_err();

        assert_eq!(failure.status, Some(200));
        assert!(failure.message.unwrap().starts_with("Unexpected response from backend"));
    }

    #[tokio::test]
    async fn test_create_transaction_sends_null_date() {
        let backend = HttpBackend::new(spawn_backend(fake_backend()).await);
        let request = CreateTransactionRequest {
            amount: Decimal::from_str("-5.25").unwrap(),
            date: None,
            description: String::new(),
            kind: "expense".to_string(),
            account_id: 1,
        };
        let transaction = backend.create_transaction(&request).await.unwrap();

        assert_eq!(transaction.id, 12);
        assert_eq!(transaction.date, None);
        assert_eq!(transaction.amount, Decimal::from_str("-5.25").unwrap());
        assert_eq!(transaction.kind, "expense");
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let backend = HttpBackend::new(format!("http://{}/", addr));
        assert_eq!(backend.base_url(), format!("http://{}", addr));

        let failure = backend.list_accounts(1).await.unwrap_err();
        assert_eq!(failure.status, None);
        assert!(failure.message.is_some());
    }
}
