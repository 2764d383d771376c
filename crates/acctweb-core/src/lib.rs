//! Core account/transaction logic
//!
//! - models: wire types of the accounts/transactions service
//! - amount: parsing of user-entered amounts
//! - failure: failed backend calls and their display message
//! - forms: form input validation
//! - state: the page's application state and its transitions
//! - actions: async user actions tying state and backend together

pub mod actions;
pub mod amount;
pub mod backend;
pub mod error;
pub mod failure;
pub mod forms;
pub mod models;
pub mod session;
pub mod state;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use amount::{format_amount, parse_amount, ParsedAmount};
pub use backend::{Backend, BackendRef};
pub use error::{CoreError, CoreResult, ErrorCode, ErrorSeverity};
pub use failure::{normalize_error, ApiFailure, NOT_FOUND_MESSAGE};
pub use forms::{AccountForm, TransactionForm, ValidationError};
pub use models::{
    Account, AccountId, CreateAccountRequest, CreateTransactionRequest, Transaction,
    TransactionDate, TransactionId, User, UserId,
};
pub use session::{SessionProvider, SessionRef, StaticSession};
pub use state::{Dashboard, PanelTicket};
