//! Contract of the accounts/transactions service

use crate::failure::ApiFailure;
use crate::models::{
    Account, AccountId, CreateAccountRequest, CreateTransactionRequest, Transaction, UserId,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Backend reference type
pub type BackendRef = Arc<dyn Backend>;

/// Operations offered by the REST service that owns accounts and transactions
#[async_trait]
pub trait Backend: Send + Sync {
    /// All accounts of a user, in backend order
    async fn list_accounts(&self, user_id: UserId) -> Result<Vec<Account>, ApiFailure>;

    /// Create an account and return it as stored
    async fn create_account(&self, request: &CreateAccountRequest) -> Result<Account, ApiFailure>;

    /// All transactions of an account, in backend order
    async fn list_transactions(&self, account_id: AccountId) -> Result<Vec<Transaction>, ApiFailure>;

    /// Create a transaction and return it as stored
    async fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<Transaction, ApiFailure>;
}
