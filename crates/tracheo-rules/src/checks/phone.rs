//! Phone numbers: `(DD) 9XXXX-XXXX` for mobiles, `(DD) XXXX-XXXX` for landlines.

/// Area codes in service.
pub const AREA_CODES: &[u8] = &[
    11, 12, 13, 14, 15, 16, 17, 18, 19, //
    21, 22, 24, 27, 28, //
    31, 32, 33, 34, 35, 37, 38, //
    41, 42, 43, 44, 45, 46, 47, 48, 49, //
    51, 53, 54, 55, //
    61, 62, 63, 64, 65, 66, 67, 68, 69, //
    71, 73, 74, 75, 77, 79, //
    81, 82, 83, 84, 85, 86, 87, 88, 89, //
    91, 92, 93, 94, 95, 96, 97, 98, 99,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneKind {
    Mobile,
    Landline,
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

pub fn parse(input: &str) -> Result<PhoneKind, String> {
    const FORMAT: &str = "must be in the format (00) 90000-0000 or (00) 0000-0000";

    let rest = input.trim().strip_prefix('(').ok_or(FORMAT)?;
    let (area, rest) = rest.split_once(") ").ok_or(FORMAT)?;
    if area.len() != 2 || !all_digits(area) {
        return Err(FORMAT.to_string());
    }
    let (head, tail) = rest.split_once('-').ok_or(FORMAT)?;
    if tail.len() != 4 || !all_digits(tail) || !all_digits(head) {
        return Err(FORMAT.to_string());
    }

    let kind = match (head.len(), head.starts_with('9')) {
        (5, true) => PhoneKind::Mobile,
        (4, false) => PhoneKind::Landline,
        (5, false) => return Err("mobile numbers must start with 9".to_string()),
        (4, true) => return Err("landline numbers cannot start with 9".to_string()),
        _ => return Err(FORMAT.to_string()),
    };

    let area: u8 = area.parse().map_err(|_| FORMAT.to_string())?;
    if !AREA_CODES.contains(&area) {
        return Err(format!("area code {area} does not exist"));
    }
    Ok(kind)
}
