//! Postal code structure, known-fake blacklist, and regional ranges.

/// Regional ranges over the first five digits. Disjoint, ascending, and
/// together covering 01000 to 99999.
pub const REGION_RANGES: [(u32, u32); 11] = [
    (1_000, 5_999),
    (6_000, 9_999),
    (10_000, 19_999),
    (20_000, 28_999),
    (29_000, 29_999),
    (30_000, 39_999),
    (40_000, 48_999),
    (49_000, 59_999),
    (60_000, 69_999),
    (70_000, 79_999),
    (80_000, 99_999),
];

/// The canonical placeholder code, in normalized form.
pub const PLACEHOLDER: &str = "12345678";

/// Accepts `DDDDD-DDD` or `DDDDDDDD` and returns the eight digits.
pub fn normalize(input: &str) -> Option<String> {
    let input = input.trim();
    let digits = match input.split_once('-') {
        Some((head, tail)) if head.len() == 5 && tail.len() == 3 => format!("{head}{tail}"),
        Some(_) => return None,
        None => input.to_string(),
    };
    (digits.len() == 8 && digits.bytes().all(|b| b.is_ascii_digit())).then_some(digits)
}

/// All-same-digit codes and the placeholder.
pub fn is_blacklisted(digits: &str) -> bool {
    let mut bytes = digits.bytes();
    let all_same = match bytes.next() {
        Some(first) => bytes.all(|b| b == first),
        None => false,
    };
    all_same || digits == PLACEHOLDER
}

/// Index into [`REGION_RANGES`] of the range holding `prefix`.
pub fn region_of(prefix: u32) -> Option<usize> {
    REGION_RANGES
        .iter()
        .position(|&(min, max)| (min..=max).contains(&prefix))
}

pub fn validate(input: &str) -> Result<(), String> {
    let digits = normalize(input).ok_or_else(|| "must be in the format 00000-000".to_string())?;
    if is_blacklisted(&digits) {
        return Err("postal code is not valid".to_string());
    }
    let prefix: u32 = digits[..5]
        .parse()
        .map_err(|_| "must be in the format 00000-000".to_string())?;
    if region_of(prefix).is_none() {
        return Err("postal code does not belong to any region".to_string());
    }
    Ok(())
}
