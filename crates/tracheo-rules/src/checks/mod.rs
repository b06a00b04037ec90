//! Field-level checks shared by the section rules. Each returns a
//! user-facing message on failure.

pub mod birth_weight;
pub mod dates;
pub mod health_id;
pub mod phone;
pub mod postal_code;

/// At least a first and a last name.
pub fn full_name(input: &str) -> Result<(), String> {
    let words: Vec<&str> = input.split_whitespace().collect();
    if words.len() < 2 {
        return Err("enter the full name (first and last name)".to_string());
    }
    if words
        .iter()
        .any(|w| w.chars().any(|c| c.is_ascii_digit()))
    {
        return Err("names cannot contain digits".to_string());
    }
    Ok(())
}

/// A whole number within `min..=max`.
pub fn whole_number(input: &str, min: u32, max: u32) -> Result<u32, String> {
    let n: u32 = input
        .trim()
        .parse()
        .map_err(|_| "must be a whole number".to_string())?;
    if !(min..=max).contains(&n) {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(n)
}

/// A positive decimal; accepts either `,` or `.` as the separator.
pub fn positive_decimal(input: &str) -> Result<f64, String> {
    let n: f64 = input
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| "must be a number".to_string())?;
    if !n.is_finite() || n <= 0.0 {
        return Err("must be greater than zero".to_string());
    }
    Ok(n)
}

/// `local@domain.tld` without whitespace.
pub fn email(input: &str) -> Result<(), String> {
    const MESSAGE: &str = "must be a valid email address";
    let input = input.trim();
    if input.chars().any(char::is_whitespace) {
        return Err(MESSAGE.to_string());
    }
    let (local, domain) = input.split_once('@').ok_or(MESSAGE)?;
    let dotted = domain
        .split('.')
        .collect::<Vec<_>>();
    if local.is_empty() || dotted.len() < 2 || dotted.iter().any(|part| part.is_empty()) {
        return Err(MESSAGE.to_string());
    }
    Ok(())
}
