//! Transaction panel - list table, error banner and create form

use crate::error_banner;
use crate::routes::{format_money, text_input};
use acctweb_config::DisplayConfig;
use acctweb_core::{AccountId, Dashboard, Transaction};
use acctweb_utils::escape_html;

const TRANSACTION_TYPES: [&str; 2] = ["income", "expense"];

/// Render the content of `#transactions-panel`
pub fn render_transaction_panel(dashboard: &Dashboard, display: &DisplayConfig) -> String {
    let Some(account_id) = dashboard.selected_account_id() else {
        return "<p class='text-gray-500 py-4'>Select an account to view its transactions</p>"
            .to_string();
    };

    let title = dashboard
        .selected_account()
        .map(|a| escape_html(&a.account_name))
        .unwrap_or_else(|| format!("Account #{}", account_id));
    let banner = dashboard
        .transaction_error()
        .map(error_banner)
        .unwrap_or_default();

    let list = if dashboard.transactions().is_empty() {
        "<p class='text-gray-500 py-4'>No transactions</p>".to_string()
    } else {
        let rows: Vec<String> = dashboard
            .transactions()
            .iter()
            .map(|t| render_transaction_row(t, display))
            .collect();
        format!(
            r#"<table class='w-full text-sm'>
                <thead><tr class='text-left text-gray-500 border-b'><th class='py-2'>Date</th><th class='py-2'>Description</th><th class='py-2'>Type</th><th class='py-2 text-right'>Amount</th></tr></thead>
                <tbody>{}</tbody>
            </table>"#,
            rows.join("")
        )
    };

    format!(
        r#"<div class='flex items-center justify-between mb-4'>
            <h2 class='text-lg font-semibold'>Transactions: {}</h2>
            <button hx-post='/transactions/close' hx-target='#transactions-panel' hx-swap='innerHTML' class='text-sm text-gray-500 hover:text-gray-700'>Close</button>
        </div>
        {}
        {}
        {}"#,
        title,
        banner,
        list,
        render_transaction_form(dashboard, account_id),
    )
}

fn render_transaction_row(transaction: &Transaction, display: &DisplayConfig) -> String {
    let amount_class = if transaction.is_income() {
        "text-green-600"
    } else if transaction.is_expense() {
        "text-red-600"
    } else {
        "text-gray-900"
    };
    format!(
        r#"<tr class='border-b'>
            <td class='py-2 whitespace-nowrap'>{}</td>
            <td class='py-2'>{}</td>
            <td class='py-2'>{}</td>
            <td class='py-2 text-right font-mono {}'>{}</td>
        </tr>"#,
        escape_html(&transaction.date_display(&display.date_format)),
        escape_html(&transaction.description),
        escape_html(&transaction.kind),
        amount_class,
        format_money(&transaction.amount, &display.currency)
    )
}

fn render_transaction_form(dashboard: &Dashboard, account_id: AccountId) -> String {
    let draft = dashboard.transaction_draft();

    let mut kinds: Vec<&str> = TRANSACTION_TYPES.to_vec();
    if !draft.kind.is_empty() && !kinds.contains(&draft.kind.as_str()) {
        kinds.push(draft.kind.as_str());
    }
    let options: String = kinds
        .iter()
        .map(|kind| {
            let selected = if *kind == draft.kind { " selected" } else { "" };
            format!(
                "<option value='{0}'{1}>{0}</option>",
                escape_html(kind),
                selected
            )
        })
        .collect();

    format!(
        r#"<form hx-post='/accounts/{}/transactions' hx-target='#transactions-panel' hx-swap='innerHTML' class='mt-6 space-y-3 border-t pt-4'>
            <h3 class='font-medium'>New Transaction</h3>
            {}
            {}
            {}
            <label class='block'>
                <span class='text-sm text-gray-600'>Type</span>
                <select name='type' class='mt-1 w-full border rounded-lg px-3 py-2'><option value=''>Select type</option>{}</select>
            </label>
            <button type='submit' class='bg-indigo-600 text-white rounded-lg px-4 py-2'>Add Transaction</button>
        </form>"#,
        account_id,
        text_input("Amount", "amount", &draft.amount, "0.00"),
        text_input("Date", "date", &draft.date, "YYYY-MM-DD"),
        text_input("Description", "description", &draft.description, ""),
        options,
    )
}
