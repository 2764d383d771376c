//! Accounts section - list table, error banner and create form

use crate::error_banner;
use crate::routes::{format_money, text_input};
use acctweb_config::DisplayConfig;
use acctweb_core::{Account, Dashboard};
use acctweb_utils::escape_html;

/// Render the content of `#accounts-section`
pub fn render_accounts_section(dashboard: &Dashboard, display: &DisplayConfig) -> String {
    let banner = dashboard.account_error().map(error_banner).unwrap_or_default();

    let list = if dashboard.accounts().is_empty() {
        "<p class='text-gray-500 py-4'>No accounts yet</p>".to_string()
    } else {
        let rows: Vec<String> = dashboard
            .accounts()
            .iter()
            .map(|account| {
                render_account_row(
                    account,
                    dashboard.selected_account_id() == Some(account.id),
                    &display.currency,
                )
            })
            .collect();
        format!(
            r#"<table class='w-full text-sm'>
                <thead><tr class='text-left text-gray-500 border-b'><th class='py-2'>Account Name</th><th class='py-2 text-right'>Initial Balance</th><th></th></tr></thead>
                <tbody>{}</tbody>
            </table>"#,
            rows.join("")
        )
    };

    let draft = dashboard.account_draft();
    format!(
        r#"<div class='flex items-center justify-between mb-4'>
            <h2 class='text-lg font-semibold'>Accounts</h2>
            <button hx-get='/accounts/list' hx-target='#accounts-section' hx-swap='innerHTML' class='text-sm text-indigo-600 hover:underline'>Reload</button>
        </div>
        {}
        {}
        <form hx-post='/accounts' hx-target='#accounts-section' hx-swap='innerHTML' class='mt-6 space-y-3 border-t pt-4'>
            <h3 class='font-medium'>New Account</h3>
            {}
            {}
            <button type='submit' class='bg-indigo-600 text-white rounded-lg px-4 py-2'>Create Account</button>
        </form>"#,
        banner,
        list,
        text_input("Account Name", "account_name", &draft.account_name, ""),
        text_input("Initial Balance", "initial_balance", &draft.initial_balance, "0.00"),
    )
}

fn render_account_row(account: &Account, selected: bool, currency: &str) -> String {
    let row_class = if selected { "bg-indigo-50" } else { "hover:bg-gray-50" };
    format!(
        r#"<tr class='border-b {}'>
            <td class='py-2'>{}</td>
            <td class='py-2 text-right font-mono'>{}</td>
            <td class='py-2 text-right'><button hx-get='/accounts/{}/transactions' hx-target='#transactions-panel' hx-swap='innerHTML' class='text-indigo-600 hover:underline'>Transactions</button></td>
        </tr>"#,
        row_class,
        escape_html(&account.account_name),
        format_money(&account.initial_balance, currency),
        account.id
    )
}
