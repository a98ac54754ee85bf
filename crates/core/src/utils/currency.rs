//! Currency symbol lookup and amount formatting for display.

use rust_decimal::Decimal;

use crate::constants::{DEFAULT_CURRENCY, DISPLAY_DECIMAL_PRECISION};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

/// Currencies offered when creating an account.
pub const SUPPORTED_CURRENCIES: &[CurrencyInfo] = &[
    CurrencyInfo {
        code: "PEN",
        symbol: "S/",
        name: "Peruvian Sol",
    },
    CurrencyInfo {
        code: "USD",
        symbol: "$",
        name: "US Dollar",
    },
    CurrencyInfo {
        code: "EUR",
        symbol: "€",
        name: "Euro",
    },
];

/// Symbol for an ISO 4217 code. Unknown codes are returned unchanged and a
/// missing code falls back to the default currency's symbol.
pub fn currency_symbol(code: Option<&str>) -> String {
    let code = match code.map(str::trim).filter(|c| !c.is_empty()) {
        Some(c) => c,
        None => return symbol_for(DEFAULT_CURRENCY).to_string(),
    };
    match code.to_ascii_uppercase().as_str() {
        "PEN" => "S/".to_string(),
        "USD" | "MXN" | "ARS" | "COP" | "CLP" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "BRL" => "R$".to_string(),
        "JPY" | "CNY" => "¥".to_string(),
        _ => code.to_string(),
    }
}

fn symbol_for(code: &str) -> &'static str {
    SUPPORTED_CURRENCIES
        .iter()
        .find(|c| c.code == code)
        .map(|c| c.symbol)
        .unwrap_or("S/")
}

/// Formats `amount` as e.g. `S/100.00`, or `+$50.00` / `-€3.10` with `show_sign`.
pub fn format_amount(amount: Decimal, currency: Option<&str>, show_sign: bool) -> String {
    let sign = match (show_sign, amount.is_sign_negative() && !amount.is_zero()) {
        (false, _) => "",
        (true, true) => "-",
        (true, false) => "+",
    };
    let abs = amount.abs().round_dp(DISPLAY_DECIMAL_PRECISION);
    format!(
        "{}{}{:.2}",
        sign,
        currency_symbol(currency),
        abs
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_symbol() {
        assert_eq!(currency_symbol(Some("usd")), "$");
        assert_eq!(currency_symbol(Some("PEN")), "S/");
        assert_eq!(currency_symbol(Some("CHF")), "CHF");
        assert_eq!(currency_symbol(None), "S/");
        assert_eq!(currency_symbol(Some("")), "S/");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec!(100), Some("PEN"), false), "S/100.00");
        assert_eq!(format_amount(dec!(50.5), Some("EUR"), true), "+€50.50");
        assert_eq!(format_amount(dec!(-3.1), Some("USD"), true), "-$3.10");
        assert_eq!(format_amount(dec!(-3.1), Some("USD"), false), "$3.10");
    }
}
