//! National health card number (15 digits, last one a mod-11 check digit).

pub const LENGTH: usize = 15;

/// Weights applied to the first 14 digits, left to right.
const WEIGHTS: [u32; LENGTH - 1] = [15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Check digit for the first 14 digits of a health card number.
///
/// `sum mod 11` below 2 maps to 0, anything else to `11 - remainder`, so the
/// result is always a single decimal digit.
pub fn check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(WEIGHTS)
        .map(|(&d, w)| u32::from(d) * w)
        .sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => (11 - r) as u8,
    }
}

/// Decimal digits of a card number, ignoring whitespace. `None` unless the
/// input is exactly 15 digits.
pub fn digits(input: &str) -> Option<Vec<u8>> {
    let digits: Vec<u8> = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_digit(10).map(|d| d as u8))
        .collect::<Option<_>>()?;
    (digits.len() == LENGTH).then_some(digits)
}

pub fn validate(input: &str) -> Result<(), String> {
    let digits = digits(input)
        .ok_or_else(|| format!("must have exactly {LENGTH} digits"))?;
    let expected = check_digit(&digits[..LENGTH - 1]);
    if digits[LENGTH - 1] != expected {
        return Err("invalid health card number (check digit mismatch)".to_string());
    }
    Ok(())
}
