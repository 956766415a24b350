//! Number formatting for chart labels.

/// Format with thousands separators and two decimals, e.g. `1,234.56`.
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string().to_lowercase();
    }

    let fixed = format!("{:.2}", amount);
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{fraction}")
}

/// Units of `target` per unit of `source`; zero when the source amount is not positive.
pub fn exchange_rate(source: f64, target: f64) -> f64 {
    if source > 0.0 {
        target / source
    } else {
        0.0
    }
}

pub fn format_rate(rate: f64) -> String {
    format!("{:.4}", rate)
}
