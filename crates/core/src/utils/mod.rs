pub mod currency;
pub mod time_utils;

pub use currency::{currency_symbol, format_amount, CurrencyInfo, SUPPORTED_CURRENCIES};
pub use time_utils::{format_api_date, parse_api_date, today};
