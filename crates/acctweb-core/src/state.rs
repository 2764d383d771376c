//! Application state of the accounts page
//!
//! All mutation goes through the transition methods below; the web layer
//! only reads. A transaction panel is identified by a [`PanelTicket`] so
//! that results arriving after the user switched or closed the panel are
//! dropped instead of overwriting the newer view.

use crate::error::{CoreError, CoreResult};
use crate::failure::{normalize_error, ApiFailure};
use crate::forms::{AccountForm, TransactionForm};
use crate::models::{
    Account, AccountId, CreateAccountRequest, CreateTransactionRequest, Transaction, UserId,
};
use serde::Serialize;

pub const LOAD_ACCOUNTS_FALLBACK: &str = "Failed to load Accounts";
pub const CREATE_ACCOUNT_FALLBACK: &str = "Failed to create Account";
pub const LOAD_TRANSACTIONS_FALLBACK: &str = "Failed to load Transactions";
pub const CREATE_TRANSACTION_FALLBACK: &str = "Failed to create Transaction";

/// Identifies one opening of the transaction panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelTicket {
    pub account_id: AccountId,
    generation: u64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Dashboard {
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
    selected_account: Option<AccountId>,
    account_error: Option<String>,
    transaction_error: Option<String>,
    account_draft: AccountForm,
    transaction_draft: TransactionForm,
    #[serde(skip)]
    generation: u64,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Accessors ====================

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn selected_account_id(&self) -> Option<AccountId> {
        self.selected_account
    }

    /// The selected account, if it is in the loaded list
    pub fn selected_account(&self) -> Option<&Account> {
        let id = self.selected_account?;
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn account_error(&self) -> Option<&str> {
        self.account_error.as_deref()
    }

    pub fn transaction_error(&self) -> Option<&str> {
        self.transaction_error.as_deref()
    }

    pub fn account_draft(&self) -> &AccountForm {
        &self.account_draft
    }

    pub fn transaction_draft(&self) -> &TransactionForm {
        &self.transaction_draft
    }

    pub fn is_panel_open(&self) -> bool {
        self.selected_account.is_some()
    }

    fn is_current(&self, ticket: PanelTicket) -> bool {
        self.selected_account == Some(ticket.account_id) && self.generation == ticket.generation
    }

    // ==================== Accounts ====================

    /// A reload of the account list starts
    pub fn begin_accounts_load(&mut self) {
        self.account_error = None;
    }

    /// An account action needed a user but nobody is signed in
    pub fn session_missing(&mut self) -> CoreError {
        let error = CoreError::NoSession;
        self.account_error = Some(error.to_string());
        error
    }

    pub fn accounts_loaded(&mut self, result: Result<Vec<Account>, ApiFailure>) -> CoreResult<()> {
        match result {
            Ok(accounts) => {
                log::debug!("loaded {} accounts", accounts.len());
                self.accounts = accounts;
                Ok(())
            }
            Err(failure) => {
                let message = normalize_error(&failure, LOAD_ACCOUNTS_FALLBACK);
                self.account_error = Some(message.clone());
                Err(CoreError::backend(&failure, message))
            }
        }
    }

    /// The create-account form was submitted
    ///
    /// Returns the request to send, or the validation error that is now
    /// shown. The draft is kept either way until creation succeeds.
    pub fn submit_account(
        &mut self,
        form: AccountForm,
        user_id: Option<UserId>,
    ) -> CoreResult<CreateAccountRequest> {
        self.account_error = None;
        self.account_draft = form;

        let Some(user_id) = user_id else {
            return Err(self.session_missing());
        };

        self.account_draft.validate(user_id).map_err(|e| {
            let error = CoreError::from(e);
            self.account_error = Some(error.to_string());
            error
        })
    }

    pub fn account_created(&mut self, result: Result<Account, ApiFailure>) -> CoreResult<()> {
        match result {
            Ok(account) => {
                log::info!("created account {} ({})", account.id, account.account_name);
                self.accounts.push(account);
                self.account_draft = AccountForm::default();
                Ok(())
            }
            Err(failure) => {
                let message = normalize_error(&failure, CREATE_ACCOUNT_FALLBACK);
                self.account_error = Some(message.clone());
                Err(CoreError::backend(&failure, message))
            }
        }
    }

    // ==================== Transactions ====================

    /// Open (or re-open) the transaction panel for an account
    pub fn open_transactions(&mut self, account_id: AccountId) -> PanelTicket {
        self.generation += 1;
        self.selected_account = Some(account_id);
        self.transactions.clear();
        self.transaction_error = None;
        self.transaction_draft = TransactionForm::default();
        PanelTicket {
            account_id,
            generation: self.generation,
        }
    }

    pub fn close_transactions(&mut self) {
        self.generation += 1;
        self.selected_account = None;
        self.transactions.clear();
        self.transaction_error = None;
        self.transaction_draft = TransactionForm::default();
    }

    /// Apply a transaction list fetch; returns whether it was applied
    pub fn transactions_loaded(
        &mut self,
        ticket: PanelTicket,
        result: Result<Vec<Transaction>, ApiFailure>,
    ) -> CoreResult<bool> {
        if !self.is_current(ticket) {
            log::debug!("dropping stale transactions for account {}", ticket.account_id);
            return Ok(false);
        }
        match result {
            Ok(transactions) => {
                log::debug!(
                    "loaded {} transactions for account {}",
                    transactions.len(),
                    ticket.account_id
                );
                self.transactions = transactions;
                Ok(true)
            }
            Err(failure) => {
                let message = normalize_error(&failure, LOAD_TRANSACTIONS_FALLBACK);
                self.transaction_error = Some(message.clone());
                Err(CoreError::backend(&failure, message))
            }
        }
    }

    /// The create-transaction form was submitted for `account_id`
    ///
    /// The request is built for `account_id` only while its panel is the
    /// open one. If another panel was opened in the meantime the submit is
    /// rejected and that panel's state is left alone.
    pub fn submit_transaction(
        &mut self,
        account_id: AccountId,
        form: TransactionForm,
    ) -> CoreResult<(PanelTicket, CreateTransactionRequest)> {
        match self.selected_account {
            None => {
                let error = CoreError::NoAccountSelected;
                self.transaction_error = Some(error.to_string());
                self.transaction_draft = form;
                return Err(error);
            }
            Some(selected) if selected != account_id => {
                return Err(CoreError::PanelChanged { account_id });
            }
            Some(_) => {}
        }

        self.transaction_error = None;
        self.transaction_draft = form;
        let ticket = PanelTicket {
            account_id,
            generation: self.generation,
        };

        match self.transaction_draft.validate(account_id) {
            Ok(request) => Ok((ticket, request)),
            Err(e) => {
                let error = CoreError::from(e);
                self.transaction_error = Some(error.to_string());
                Err(error)
            }
        }
    }

    /// Apply a creation result; returns whether it was applied
    pub fn transaction_created(
        &mut self,
        ticket: PanelTicket,
        result: Result<Transaction, ApiFailure>,
    ) -> CoreResult<bool> {
        if !self.is_current(ticket) {
            log::debug!("dropping stale transaction result for account {}", ticket.account_id);
            return Ok(false);
        }
        match result {
            Ok(transaction) => {
                log::info!(
                    "created transaction {} on account {}",
                    transaction.id,
                    ticket.account_id
                );
                self.transactions.push(transaction);
                self.transaction_draft = TransactionForm::default();
                Ok(true)
            }
            Err(failure) => {
                let message = normalize_error(&failure, CREATE_TRANSACTION_FALLBACK);
                self.transaction_error = Some(message.clone());
                Err(CoreError::backend(&failure, message))
            }
        }
    }
}
