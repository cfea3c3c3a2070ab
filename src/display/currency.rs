//! Brazilian Real formatting: `R$ 1.234,56`

/// Separator between the symbol and the digits (no-break space)
const SYMBOL_GAP: char = '\u{a0}';

/// Insert `sep` every three digits from the right of an integer digit string
pub fn group_thousands(digits: &str, sep: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(sep);
        }
        grouped.push(c);
    }
    grouped
}

/// Amount with pt-BR grouping and exactly two decimals, no symbol
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞".to_string() } else { "-∞".to_string() };
    }

    // f64::round rounds half away from zero
    let cents = (value.abs() * 100.0).round();
    let units = (cents / 100.0).trunc();
    let fraction = (cents - units * 100.0) as u32;

    let sign = if value < 0.0 && cents > 0.0 { "-" } else { "" };
    format!("{}{},{:02}", sign, group_thousands(&format!("{:.0}", units), '.'), fraction)
}

/// Currency display, e.g. `R$ 1.234,56` (negative: `-R$ 1.234,56`)
pub fn format_currency(value: f64) -> String {
    let amount = format_amount(value);
    match amount.strip_prefix('-') {
        Some(unsigned) => format!("-R${}{}", SYMBOL_GAP, unsigned),
        None => format!("R${}{}", SYMBOL_GAP, amount),
    }
}

/// Percentage with a comma decimal separator, e.g. `455,6%`.
/// Ties round away from zero like `format_amount`.
pub fn format_percent(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    // Avoid "-0%"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}%", decimals, rounded).replace('.', ",")
}
