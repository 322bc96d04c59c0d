//! Currency codes, display metadata, and amount formatting.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TrackerError};

/// Display metadata for one supported currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub code: &'static str,
    pub symbol: &'static str,
    pub locale: &'static str,
}

/// Every currency the tracker can display. Fixed at compile time, not
/// user-editable.
pub const CURRENCY_FORMATS: &[CurrencyFormat] = &[
    CurrencyFormat { code: "USD", symbol: "$", locale: "en-US" },
    CurrencyFormat { code: "EUR", symbol: "€", locale: "de-DE" },
    CurrencyFormat { code: "GBP", symbol: "£", locale: "en-GB" },
    CurrencyFormat { code: "JPY", symbol: "¥", locale: "ja-JP" },
    CurrencyFormat { code: "CAD", symbol: "C$", locale: "en-CA" },
    CurrencyFormat { code: "AUD", symbol: "A$", locale: "en-AU" },
    CurrencyFormat { code: "INR", symbol: "₹", locale: "en-IN" },
    CurrencyFormat { code: "CNY", symbol: "¥", locale: "zh-CN" },
    CurrencyFormat { code: "BRL", symbol: "R$", locale: "pt-BR" },
    CurrencyFormat { code: "ZAR", symbol: "R", locale: "en-ZA" },
    CurrencyFormat { code: "NGN", symbol: "₦", locale: "en-NG" },
];

impl CurrencyFormat {
    pub fn lookup(code: &str) -> Option<&'static CurrencyFormat> {
        CURRENCY_FORMATS
            .iter()
            .find(|format| format.code.eq_ignore_ascii_case(code))
    }
}

/// ISO 4217 currency selection, normalized to uppercase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    /// Builds a code after checking it against the supported table.
    pub fn validated(code: &str) -> Result<Self> {
        let trimmed = code.trim();
        if CurrencyFormat::lookup(trimmed).is_none() {
            return Err(TrackerError::UnsupportedCurrency(trimmed.to_string()));
        }
        Ok(Self::new(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display metadata for this code. Unrecognized codes fall back to the
    /// USD entry so rendering never fails.
    pub fn format(&self) -> &'static CurrencyFormat {
        CurrencyFormat::lookup(&self.0).unwrap_or(&CURRENCY_FORMATS[0])
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renders an amount with the currency symbol, exactly two decimal places,
/// and locale-style separators.
pub fn format_amount(amount: f64, format: &CurrencyFormat) -> String {
    let (decimal, grouping) = separators_for(format.locale);
    let body = format_number(amount.abs(), decimal, grouping);
    if amount < 0.0 {
        format!("-{}{}", format.symbol, body)
    } else {
        format!("{}{}", format.symbol, body)
    }
}

fn separators_for(locale: &str) -> (char, char) {
    match locale {
        "de-DE" | "pt-BR" => (',', '.'),
        _ => ('.', ','),
    }
}

fn format_number(value: f64, decimal: char, grouping: char) -> String {
    let fixed = format!("{value:.2}");
    match fixed.split_once('.') {
        Some((int_part, frac_part)) => {
            format!("{}{}{}", group_digits(int_part, grouping), decimal, frac_part)
        }
        None => group_digits(&fixed, grouping),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut grouped = String::with_capacity(chars.len() + chars.len() / 3);
    for (index, ch) in chars.iter().enumerate() {
        let remaining = chars.len() - index;
        if index != 0 && remaining % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(*ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_the_eleven_supported_codes() {
        assert_eq!(CURRENCY_FORMATS.len(), 11);
        for code in [
            "USD", "EUR", "GBP", "JPY", "CAD", "AUD", "INR", "CNY", "BRL", "ZAR", "NGN",
        ] {
            assert!(CurrencyFormat::lookup(code).is_some(), "missing {code}");
        }
    }

    #[test]
    fn validated_normalizes_case_and_rejects_unknown_codes() {
        let code = CurrencyCode::validated("eur").expect("eur is supported");
        assert_eq!(code.as_str(), "EUR");
        let err = CurrencyCode::validated("XXX").expect_err("must fail");
        assert!(matches!(err, TrackerError::UnsupportedCurrency(_)));
    }

    #[test]
    fn formats_with_symbol_and_grouping() {
        let usd = CurrencyFormat::lookup("USD").expect("usd");
        assert_eq!(format_amount(1234.5, usd), "$1,234.50");
        assert_eq!(format_amount(-42.5, usd), "-$42.50");
        assert_eq!(format_amount(0.0, usd), "$0.00");
    }

    #[test]
    fn comma_decimal_locales_swap_separators() {
        let eur = CurrencyFormat::lookup("EUR").expect("eur");
        assert_eq!(format_amount(1234.56, eur), "€1.234,56");
        let brl = CurrencyFormat::lookup("BRL").expect("brl");
        assert_eq!(format_amount(1000000.0, brl), "R$1.000.000,00");
    }

    #[test]
    fn yen_still_renders_two_decimal_places() {
        let jpy = CurrencyFormat::lookup("JPY").expect("jpy");
        assert_eq!(format_amount(1000.0, jpy), "¥1,000.00");
    }
}
