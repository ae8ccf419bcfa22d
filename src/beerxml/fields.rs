//! Scalar conversions for BeerXML element text.
//!
//! Callers pass already trimmed, non-empty text.

use crate::error::{ImportError, ImportResult};
use crate::model::{Percentage, Temperature, TimeSpan, Volume, Weight};
use chrono::NaiveDate;

/// The only date layout accepted, `dd MMM yyyy` (e.g. "14 Mar 2012").
pub const DATE_FORMAT: &str = "%d %b %Y";

pub fn number(field: &str, text: &str) -> ImportResult<f64> {
    text.parse::<f64>().map_err(|_| ImportError::InvalidNumber {
        field: field.to_string(),
        value: text.to_string(),
    })
}

pub fn whole_number(field: &str, text: &str) -> ImportResult<u32> {
    let value = number(field, text)?;
    let in_range = value.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&value);
    if !in_range || value.fract() != 0.0 {
        return Err(ImportError::InvalidNumber {
            field: field.to_string(),
            value: text.to_string(),
        });
    }
    Ok(value as u32)
}

/// BeerXML percentages are 0-100; they are stored as fractions.
pub fn percentage(field: &str, text: &str) -> ImportResult<Percentage> {
    Ok(Percentage::from_percent(number(field, text)?))
}

pub fn litres(field: &str, text: &str) -> ImportResult<Volume> {
    Ok(Volume::litres(number(field, text)?))
}

pub fn kilograms(field: &str, text: &str) -> ImportResult<Weight> {
    Ok(Weight::kilograms(number(field, text)?))
}

pub fn celsius(field: &str, text: &str) -> ImportResult<Temperature> {
    Ok(Temperature::celsius(number(field, text)?))
}

pub fn minutes(field: &str, text: &str) -> ImportResult<TimeSpan> {
    Ok(TimeSpan::minutes(number(field, text)?))
}

pub fn days(field: &str, text: &str) -> ImportResult<TimeSpan> {
    Ok(TimeSpan::days(number(field, text)?))
}

/// Anything other than a case-insensitive "true" is false.
pub fn flag(text: &str) -> bool {
    text.eq_ignore_ascii_case("true")
}

pub fn date(text: &str) -> ImportResult<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| ImportError::InvalidDate {
        value: text.to_string(),
    })
}
