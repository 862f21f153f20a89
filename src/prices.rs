/// Parse a catalog price string like "$1,234.50" into its numeric value.
/// Unparseable strings count as zero, matching the storefront's lenient
/// handling of authored data.
pub fn parse_price(price: &str) -> f64 {
    price
        .replace('$', "")
        .replace(',', "")
        .trim()
        .parse()
        .unwrap_or(0.0)
}

/// Format an MXN amount the way es-MX renders currency: two fraction
/// digits and comma thousands separators, e.g. "$22,221.00".
pub fn format_mxn(amount: f64) -> String {
    let raw = format!("{:.2}", amount);
    let (int_part, frac_part) = match raw.split_once('.') {
        Some(parts) => parts,
        None => (raw.as_str(), "00"),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::new();
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && digit.is_ascii_digit() && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    format!("${}.{}", grouped, frac_part)
}

/// Cart total in the source currency, with the comma decimal separator
/// the storefront uses for the total line: "$1234,50".
pub fn format_total_usd(total: f64) -> String {
    format!("${}", format!("{:.2}", total).replace('.', ","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parses_dollar_prices_with_thousands_separators() {
        assert_relative_eq!(parse_price("$1,234.50"), 1234.50);
        assert_relative_eq!(parse_price("$19.99"), 19.99);
        assert_relative_eq!(parse_price("$1,000,000.00"), 1_000_000.0);
        assert_relative_eq!(parse_price("45.75"), 45.75);
    }

    #[test]
    fn unparseable_price_counts_as_zero() {
        assert_relative_eq!(parse_price("gratis"), 0.0);
        assert_relative_eq!(parse_price(""), 0.0);
    }

    #[test]
    fn formats_mxn_with_grouping_and_two_decimals() {
        // $1,234.50 at a rate of 18.0
        assert_eq!(format_mxn(1234.50 * 18.0), "$22,221.00");
        assert_eq!(format_mxn(0.0), "$0.00");
        assert_eq!(format_mxn(999.999), "$1,000.00");
        assert_eq!(format_mxn(1_500_000.5), "$1,500,000.50");
    }

    #[test]
    fn formats_total_with_comma_decimal_separator() {
        assert_eq!(format_total_usd(1234.5), "$1234,50");
        assert_eq!(format_total_usd(159.98), "$159,98");
    }
}
