//! Data models exchanged with the accounts/transactions service

use chrono::{format::StrftimeItems, format::Item, DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// User identifier as assigned by the backend
pub type UserId = i64;
/// Account identifier as assigned by the backend
pub type AccountId = i64;
/// Transaction identifier as assigned by the backend
pub type TransactionId = i64;

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Owner of an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Account as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: AccountId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub account_name: String,
    #[serde(default)]
    pub initial_balance: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Transaction date: the backend sends either a date string or an
/// epoch-millisecond timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionDate {
    Timestamp(i64),
    Text(String),
}

impl TransactionDate {
    /// Render the date; timestamps are formatted in UTC with `format`
    pub fn display(&self, format: &str) -> String {
        match self {
            TransactionDate::Text(text) => text.clone(),
            TransactionDate::Timestamp(millis) => {
                let format = if is_valid_format(format) { format } else { FALLBACK_DATE_FORMAT };
                DateTime::<Utc>::from_timestamp_millis(*millis)
                    .map(|dt| dt.format(format).to_string())
                    .unwrap_or_else(|| millis.to_string())
            }
        }
    }
}

fn is_valid_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Transaction as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
    #[serde(default)]
    pub date: Option<TransactionDate>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub amount: Decimal,
    /// Open set of tags such as "income" or "expense"
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub kind: String,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind.eq_ignore_ascii_case("income")
    }

    pub fn is_expense(&self) -> bool {
        self.kind.eq_ignore_ascii_case("expense")
    }

    /// Date for display, empty when the backend sent none
    pub fn date_display(&self, format: &str) -> String {
        self.date
            .as_ref()
            .map(|d| d.display(format))
            .unwrap_or_default()
    }
}

/// Body of `POST /api/accounts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub account_name: String,
    pub initial_balance: Decimal,
    pub user_id: UserId,
}

/// Body of `POST /api/transactions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub amount: Decimal,
    pub date: Option<String>,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub account_id: AccountId,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
