//! Transaction routes - Transaction panel of the selected account
//!
//! Features:
//! - Open an account's panel and load its transactions
//! - Create a transaction on the open account
//! - Close the panel
//!
//! Only one panel is open at a time; a load that finishes after the user
//! moved on is dropped by the dashboard.
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Panel rendering

pub mod api;
pub mod page;

pub use api::{api_account_transactions, htmx_panel_close, htmx_panel_open, htmx_transaction_store};
pub use page::render_transaction_panel;
