//! Utility functions and helpers

/// Format a number with thousands separators
///
/// Accepts anything whose `Display` is a plain decimal (`-1234.50`); the
/// sign and fractional part are kept as-is.
pub fn format_number<T: ToString>(n: T) -> String {
    let s = n.to_string();
    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.as_str()),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(pos) => (&unsigned[..pos], &unsigned[pos..]),
        None => (unsigned, ""),
    };

    let mut result = String::new();
    let mut count = 0;
    for c in int_part.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    let grouped: String = result.chars().rev().collect();
    format!("{}{}{}", sign, grouped, frac_part)
}

/// Escape text for safe inclusion in HTML content and attribute values
pub fn escape_html(content: &str) -> String {
    let mut escaped = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
