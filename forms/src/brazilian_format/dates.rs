// Conversions between calendar dates, "DD/MM/YYYY" display text and "YYYY-MM-DD" wire text.
// Everything works on calendar fields only; no timezone is ever involved.
use chrono::{Datelike, NaiveDate};

use crate::error::{FormsError, Result};

const ISO_PATTERN: &str = "YYYY-MM-DD";
const DISPLAY_PATTERN: &str = "DD/MM/YYYY";
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// Builds a calendar date from its fields, rejecting impossible dates and years outside 0001-9999.
pub fn date_from_parts(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(out_of_range(year));
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        FormsError::InvalidDate(format!("{:02}/{:02}/{:04} is not a calendar date", day, month, year))
    })
}

/// Formats a date as `YYYY-MM-DD`, the representation the backend expects.
pub fn to_iso_date(date: NaiveDate) -> Result<String> {
    check_year(date)?;
    Ok(format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day()))
}

/// Formats a date as `D/M/YYYY`.
///
/// Day and month are not zero-padded here (`5/10/2023`), unlike
/// [`to_display_date_from_iso`] which always pads (`05/10/2023`).
pub fn to_display_date(date: NaiveDate) -> Result<String> {
    check_year(date)?;
    Ok(format!("{}/{}/{:04}", date.day(), date.month(), date.year()))
}

/// Converts `YYYY-MM-DD` into `DD/MM/YYYY`.
pub fn to_display_date_from_iso(iso: &str) -> Result<String> {
    let date = parse_iso_date(iso)?;
    Ok(format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year()))
}

/// Converts `DD/MM/YYYY` (day and month may also be unpadded) into `YYYY-MM-DD`.
pub fn to_iso_from_display_date(display: &str) -> Result<String> {
    let date = parse_display_date(display)?;
    to_iso_date(date)
}

/// Parses `YYYY-MM-DD` into a calendar date.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate> {
    let [year, month, day] = split_segments(input, '-', ISO_PATTERN)?;
    if year.len() != 4 || !is_day_or_month(month) || !is_day_or_month(day) {
        return Err(parse_error(input, ISO_PATTERN));
    }
    build(input, ISO_PATTERN, year, month, day)
}

/// Parses `DD/MM/YYYY` into a calendar date.
pub fn parse_display_date(input: &str) -> Result<NaiveDate> {
    let [day, month, year] = split_segments(input, '/', DISPLAY_PATTERN)?;
    if year.len() != 4 || !is_day_or_month(month) || !is_day_or_month(day) {
        return Err(parse_error(input, DISPLAY_PATTERN));
    }
    build(input, DISPLAY_PATTERN, year, month, day)
}

fn split_segments<'a>(input: &'a str, separator: char, expected: &'static str) -> Result<[&'a str; 3]> {
    let segments: Vec<&str> = input.trim().split(separator).collect();
    match segments.as_slice() {
        [a, b, c] if [a, b, c].iter().all(|s| is_numeric(s)) => Ok([*a, *b, *c]),
        _ => Err(parse_error(input, expected)),
    }
}

fn build(input: &str, expected: &'static str, year: &str, month: &str, day: &str) -> Result<NaiveDate> {
    let number = |segment: &str| segment.parse::<u32>().map_err(|_| parse_error(input, expected));
    let year = i32::try_from(number(year)?).map_err(|_| parse_error(input, expected))?;
    date_from_parts(year, number(month)?, number(day)?)
}

fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

fn is_day_or_month(segment: &str) -> bool {
    (1..=2).contains(&segment.len())
}

fn check_year(date: NaiveDate) -> Result<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        Ok(())
    } else {
        Err(out_of_range(date.year()))
    }
}

fn out_of_range(year: i32) -> FormsError {
    FormsError::InvalidDate(format!("year {} is outside 0001-9999", year))
}

fn parse_error(input: &str, expected: &'static str) -> FormsError {
    tracing::debug!(input = %input, expected, "Rejected date text");
    FormsError::DateParse { input: input.to_string(), expected }
}
