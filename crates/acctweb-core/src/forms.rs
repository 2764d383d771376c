//! Form input and its validation into backend requests

use crate::amount::{parse_amount, ParsedAmount};
use crate::models::{AccountId, CreateAccountRequest, CreateTransactionRequest, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input rejected before a request is sent
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Account Name must not be blank")]
    BlankAccountName,

    #[error("Initial Balance must be a number with up to two decimal places")]
    InvalidInitialBalance,

    #[error("Amount must not be blank")]
    BlankAmount,

    #[error("Amount must be a number with up to two decimal places")]
    InvalidAmount,

    #[error("Type must not be blank")]
    BlankType,
}

/// Raw input of the create-account form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountForm {
    #[serde(default)]
    pub account_name: String,
    #[serde(default)]
    pub initial_balance: String,
}

impl AccountForm {
    pub fn new(account_name: impl Into<String>, initial_balance: impl Into<String>) -> Self {
        Self {
            account_name: account_name.into(),
            initial_balance: initial_balance.into(),
        }
    }

    /// Build the create request; a blank balance means zero
    pub fn validate(&self, user_id: UserId) -> Result<CreateAccountRequest, ValidationError> {
        let account_name = self.account_name.trim();
        if account_name.is_empty() {
            return Err(ValidationError::BlankAccountName);
        }

        let balance = self.initial_balance.trim();
        let initial_balance = if balance.is_empty() {
            Decimal::ZERO
        } else {
            match parse_amount(balance) {
                ParsedAmount::Valid(value) => value,
                ParsedAmount::Invalid => return Err(ValidationError::InvalidInitialBalance),
            }
        };

        Ok(CreateAccountRequest {
            account_name: account_name.to_string(),
            initial_balance,
            user_id,
        })
    }
}

/// Raw input of the create-transaction form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionForm {
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl TransactionForm {
    /// Build the create request; blank date becomes `null`
    pub fn validate(&self, account_id: AccountId) -> Result<CreateTransactionRequest, ValidationError> {
        let amount = self.amount.trim();
        if amount.is_empty() {
            return Err(ValidationError::BlankAmount);
        }
        let amount = match parse_amount(amount) {
            ParsedAmount::Valid(value) => value,
            ParsedAmount::Invalid => return Err(ValidationError::InvalidAmount),
        };

        let kind = self.kind.trim();
        if kind.is_empty() {
            return Err(ValidationError::BlankType);
        }

        let date = Some(self.date.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Ok(CreateTransactionRequest {
            amount,
            date,
            description: self.description.trim().to_string(),
            kind: kind.to_string(),
            account_id,
        })
    }
}
