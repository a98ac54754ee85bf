use chrono::{Datelike, Duration, Local, Months, NaiveDate};

/// Wire format for calendar dates.
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_api_date(date: NaiveDate) -> String {
    date.format(API_DATE_FORMAT).to_string()
}

/// Parses a wire date, keeping only the calendar part of date-time values
/// such as `2024-01-10T08:30:00` or `2024-01-10T08:30:00Z`.
pub fn parse_api_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    let date_part = raw.split('T').next().unwrap_or(raw).trim();
    NaiveDate::parse_from_str(date_part, API_DATE_FORMAT)
}

pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month `months_ago` months before `date`.
pub fn first_day_of_months_ago(date: NaiveDate, months_ago: u32) -> NaiveDate {
    let first = first_day_of_month(date);
    first
        .checked_sub_months(Months::new(months_ago))
        .unwrap_or(first)
}

pub fn days_ago(date: NaiveDate, days: i64) -> NaiveDate {
    date - Duration::days(days)
}

/// Signed number of days from `from` until `to`; negative once `to` has passed.
pub fn days_until(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// `yyyy-MM` bucket key for monthly grouping.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Serde adapter for required wire dates.
pub mod api_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_api_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_api_date(&raw).map_err(de::Error::custom)
    }
}

/// Serde adapter for optional wire dates; empty strings decode to `None`.
pub mod api_date_opt {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => serializer.serialize_str(&super::format_api_date(*d)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => super::parse_api_date(value)
                .map(Some)
                .map_err(de::Error::custom),
        }
    }
}
