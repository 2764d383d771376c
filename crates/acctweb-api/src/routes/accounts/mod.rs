//! Account routes - Account list and account creation
//!
//! Features:
//! - List the accounts of the signed-in user
//! - Create an account from the inline form
//! - Open an account's transaction panel
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Accounts section rendering

pub mod api;
pub mod page;

pub use api::{api_accounts, htmx_account_create, htmx_accounts_list};
pub use page::render_accounts_section;
