//! Route modules for the API server
//!
//! - accounts: Account list, account creation
//! - transactions: Transaction panel, transaction creation
//!
//! Each module follows a consistent structure:
//! - mod.rs: Module declaration and exports
//! - api.rs: JSON API endpoints and HTMX partial handlers
//! - page.rs: HTML rendering

pub mod accounts;
pub mod transactions;

use rust_decimal::Decimal;

/// Amount with two decimals, thousands separators and the configured currency
pub fn format_money(amount: &Decimal, currency: &str) -> String {
    let number = acctweb_utils::format_number(acctweb_core::format_amount(amount));
    if currency.is_empty() {
        number
    } else {
        format!("{} {}", number, acctweb_utils::escape_html(currency))
    }
}

/// Text input with a label, pre-filled with `value`
pub(crate) fn text_input(label: &str, name: &str, value: &str, placeholder: &str) -> String {
    format!(
        r#"<label class='block'>
            <span class='text-sm text-gray-600'>{}</span>
            <input type='text' name='{}' value='{}' placeholder='{}' class='mt-1 w-full border rounded-lg px-3 py-2'>
        </label>"#,
        label,
        name,
        acctweb_utils::escape_html(value),
        placeholder
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_money() {
        let amount = Decimal::from_str("1234567.5").unwrap();
        assert_eq!(format_money(&amount, ""), "1,234,567.50");
        assert_eq!(format_money(&amount, "USD"), "1,234,567.50 USD");
        assert_eq!(format_money(&Decimal::from_str("-25").unwrap(), ""), "-25.00");
    }

    #[test]
    fn test_text_input_escapes_value() {
        let input = text_input("Name", "account_name", "'><b>", "");
        assert!(input.contains("value='&#39;&gt;&lt;b&gt;'"));
    }
}
