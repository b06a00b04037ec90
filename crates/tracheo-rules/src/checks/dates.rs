//! Date parsing and whole-unit age arithmetic.

use jiff::civil::Date;
use jiff::Unit;

const FORMAT: &str = "must be a valid date in the format DD/MM/YYYY";

/// Parse `DD/MM/YYYY`, or ISO `YYYY-MM-DD`. Every component is plain
/// digits of fixed width; no signs, no time part, no year zero.
pub fn parse(input: &str) -> Result<Date, String> {
    let input = input.trim();
    let slashed: Vec<&str> = input.split('/').collect();
    let dashed: Vec<&str> = input.split('-').collect();
    let (day, month, year) = match (slashed.as_slice(), dashed.as_slice()) {
        ([day, month, year], _) => (*day, *month, *year),
        (_, [year, month, day]) => (*day, *month, *year),
        _ => return Err(FORMAT.to_string()),
    };
    let day: i8 = component(day, 2)?;
    let month: i8 = component(month, 2)?;
    let year: i16 = component(year, 4)?;
    if year == 0 {
        return Err(FORMAT.to_string());
    }
    Date::new(year, month, day).map_err(|_| FORMAT.to_string())
}

fn component<T: std::str::FromStr>(part: &str, width: usize) -> Result<T, String> {
    if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FORMAT.to_string());
    }
    part.parse().map_err(|_| FORMAT.to_string())
}

fn elapsed(from: Date, to: Date, unit: Unit) -> Result<jiff::Span, String> {
    to.since((unit, from))
        .map_err(|e| format!("date arithmetic failed: {e}"))
}

/// Whole days from `from` to `to`; negative when `from` is later.
pub fn days_between(from: Date, to: Date) -> Result<i32, String> {
    Ok(elapsed(from, to, Unit::Day)?.get_days())
}

/// Whole months from `from` to `to`.
pub fn months_between(from: Date, to: Date) -> Result<i32, String> {
    Ok(elapsed(from, to, Unit::Month)?.get_months())
}

/// Whole years from `from` to `to`.
pub fn years_between(from: Date, to: Date) -> Result<i16, String> {
    Ok(elapsed(from, to, Unit::Year)?.get_years())
}

/// A birth date may not lie after `today`.
pub fn check_not_future(date: Date, today: Date) -> Result<(), String> {
    if days_between(date, today)? < 0 {
        return Err("date cannot be in the future".to_string());
    }
    Ok(())
}
