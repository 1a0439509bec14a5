/// Formats an integer with `,` thousands separators.
pub fn thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Formats a price rounded to whole dollars, e.g. `$181,234`.
pub fn price(value: f64) -> String {
    if !value.is_finite() {
        return "$n/a".into();
    }
    format!("${}", thousands(value.round() as i64))
}
