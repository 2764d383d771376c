//! Scripted in-memory backend for tests

use crate::backend::Backend;
use crate::failure::ApiFailure;
use crate::models::{
    Account, AccountId, CreateAccountRequest, CreateTransactionRequest, Transaction,
    TransactionDate, UserId,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;

pub fn sample_account(id: AccountId, name: &str) -> Account {
    Account {
        id,
        account_name: name.to_string(),
        initial_balance: Decimal::new(10000, 2),
        user: None,
    }
}

pub fn sample_transaction(id: i64, account_id: AccountId, description: &str) -> Transaction {
    Transaction {
        id,
        account: Some(sample_account(account_id, "")),
        date: Some(TransactionDate::Text("2024-01-15".to_string())),
        description: description.to_string(),
        amount: Decimal::new(-2500, 2),
        kind: "expense".to_string(),
    }
}

#[derive(Default)]
struct Script {
    accounts: Option<Result<Vec<Account>, ApiFailure>>,
    transactions: HashMap<AccountId, Result<Vec<Transaction>, ApiFailure>>,
    create_failure: Option<ApiFailure>,
    next_id: i64,
    calls: Vec<String>,
}

/// Backend that answers from a script and records every call
#[derive(Default)]
pub struct RecordingBackend {
    script: Mutex<Script>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accounts(self, accounts: Vec<Account>) -> Self {
        self.script.lock().unwrap().accounts = Some(Ok(accounts));
        self
    }

    pub fn with_accounts_failure(self, failure: ApiFailure) -> Self {
        self.script.lock().unwrap().accounts = Some(Err(failure));
        self
    }

    pub fn with_transactions(self, account_id: AccountId, transactions: Vec<Transaction>) -> Self {
        self.script
            .lock()
            .unwrap()
            .transactions
            .insert(account_id, Ok(transactions));
        self
    }

    pub fn with_transactions_failure(self, account_id: AccountId, failure: ApiFailure) -> Self {
        self.script
            .lock()
            .unwrap()
            .transactions
            .insert(account_id, Err(failure));
        self
    }

    /// Make every create call fail
    pub fn with_create_failure(self, failure: ApiFailure) -> Self {
        self.script.lock().unwrap().create_failure = Some(failure);
        self
    }

    /// Calls made so far, e.g. `list_accounts(1)`
    pub fn calls(&self) -> Vec<String> {
        self.script.lock().unwrap().calls.clone()
    }

    fn not_found() -> ApiFailure {
        ApiFailure::from_response(404, json!({}))
    }
}

#[async_trait]
impl Backend for RecordingBackend {
    async fn list_accounts(&self, user_id: UserId) -> Result<Vec<Account>, ApiFailure> {
        let mut script = self.script.lock().unwrap();
        script.calls.push(format!("list_accounts({})", user_id));
        script.accounts.clone().unwrap_or_else(|| Ok(vec![]))
    }

    async fn create_account(&self, request: &CreateAccountRequest) -> Result<Account, ApiFailure> {
        let mut script = self.script.lock().unwrap();
        script.calls.push(format!("create_account({})", request.account_name));
        if let Some(ref failure) = script.create_failure {
            return Err(failure.clone());
        }
        script.next_id += 1;
        Ok(Account {
            id: 100 + script.next_id,
            account_name: request.account_name.clone(),
            initial_balance: request.initial_balance,
            user: None,
        })
    }

    async fn list_transactions(&self, account_id: AccountId) -> Result<Vec<Transaction>, ApiFailure> {
        let mut script = self.script.lock().unwrap();
        script.calls.push(format!("list_transactions({})", account_id));
        script
            .transactions
            .get(&account_id)
            .cloned()
            .unwrap_or_else(|| Err(Self::not_found()))
    }

    async fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<Transaction, ApiFailure> {
        let mut script = self.script.lock().unwrap();
        script
            .calls
            .push(format!("create_transaction({})", request.account_id));
        if let Some(ref failure) = script.create_failure {
            return Err(failure.clone());
        }
        script.next_id += 1;
        Ok(Transaction {
            id: 1000 + script.next_id,
            account: None,
            date: request.date.clone().map(TransactionDate::Text),
            description: request.description.clone(),
            amount: request.amount,
            kind: request.kind.clone(),
        })
    }
}
