//! Month counts as Portuguese durations

fn years_phrase(years: u32) -> String {
    if years == 1 { "1 ano".to_string() } else { format!("{years} anos") }
}

fn months_phrase(months: u32) -> String {
    if months == 1 { "1 mês".to_string() } else { format!("{months} meses") }
}

/// Duration phrase such as `"2 anos e 3 meses"`.
///
/// Zero years or zero remaining months drop out of the phrase; a count of 0
/// reads `"menos de 1 mês"`.
pub fn format_duration(total_months: u32) -> String {
    let years = total_months / 12;
    let months = total_months % 12;

    match (years, months) {
        (0, 0) => "menos de 1 mês".to_string(),
        (0, m) => months_phrase(m),
        (y, 0) => years_phrase(y),
        (y, m) => format!("{} e {}", years_phrase(y), months_phrase(m)),
    }
}

/// Short label for the annual table, e.g. `"2 anos 3m"` or `"5m"`
pub fn format_elapsed(month: u32) -> String {
    let years = month / 12;
    let months = month % 12;

    match (years, months) {
        (0, 0) => "0m".to_string(),
        (0, m) => format!("{m}m"),
        (y, 0) => years_phrase(y),
        (y, m) => format!("{} {m}m", years_phrase(y)),
    }
}
