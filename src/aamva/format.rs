//! Conversions from form input to AAMVA-coded values.
//!
//! These produce data element values. They are not called by the assembler.
use crate::aamva::dlid::{
    types::{CharClass, Numeric, F3N},
    FormatError,
};

/// Code used for any color that is not recognized.
pub const UNKNOWN_COLOR: &str = "UNK";

const EYE_COLORS: [(&str, &str); 10] = [
    ("black", "BLK"),
    ("blue", "BLU"),
    ("brown", "BRO"),
    ("grey", "GRY"),
    ("green", "GRN"),
    ("hazel", "HAZ"),
    ("maroon", "MAR"),
    ("pink", "PNK"),
    ("dichromatic", "DIC"),
    ("unknown", UNKNOWN_COLOR),
];

const HAIR_COLORS: [(&str, &str); 10] = [
    ("bald", "BAL"),
    ("black", "BLK"),
    ("blond", "BLN"),
    ("brown", "BRO"),
    ("grey", "GRY"),
    ("red", "RED"),
    ("auburn", "RED"),
    ("sandy", "SDY"),
    ("white", "WHI"),
    ("unknown", UNKNOWN_COLOR),
];

fn color_code(table: &[(&str, &'static str)], kind: &'static str, name: &str) -> &'static str {
    let needle = name.trim();
    match table.iter().find(|(n, _)| n.eq_ignore_ascii_case(needle)) {
        Some(&(_, code)) => code,
        None => {
            tracing::warn!(
                target: "aamva::format",
                kind,
                color = name,
                "unrecognized color, using `{}`",
                UNKNOWN_COLOR
            );
            UNKNOWN_COLOR
        }
    }
}

/// Eye color code (DAY) for a color name such as `"hazel"`.
///
/// Unrecognized names map to [`UNKNOWN_COLOR`].
pub fn eye_color_code(name: &str) -> &'static str {
    color_code(&EYE_COLORS, "eye", name)
}

/// Hair color code (DAZ) for a color name such as `"blond"`.
///
/// Unrecognized names map to [`UNKNOWN_COLOR`].
pub fn hair_color_code(name: &str) -> &'static str {
    color_code(&HAIR_COLORS, "hair", name)
}

/// Nine-digit postal code (DAK).
///
/// Five-digit codes are completed with `0000`. Dashes and whitespace are
/// ignored.
pub fn format_zip(zip: &str) -> Result<String, FormatError> {
    let digits: String = zip
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect();

    if !Numeric::contains_all(digits.as_bytes()) {
        return Err(FormatError::new("postal code", zip));
    }

    match digits.len() {
        5 if zip.len() == 5 => Ok(digits + "0000"),
        9 => Ok(digits),
        _ => Err(FormatError::new("postal code", zip)),
    }
}

/// Sex code (DBC): `1` for male, `2` for female, `9` when not specified.
pub fn format_sex(sex: &str) -> &'static str {
    match sex.trim().to_ascii_lowercase().as_str() {
        "male" | "m" => "1",
        "female" | "f" => "2",
        _ => "9",
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<u64, FormatError> {
    let value = value.trim();
    if value.is_empty() || !Numeric::contains_all(value.as_bytes()) {
        return Err(FormatError::new(field, value));
    }

    value.parse().map_err(|_| FormatError::new(field, value))
}

fn three_digits(field: &'static str, value: u64) -> Result<F3N, FormatError> {
    F3N::from_value(value).map_err(|e| e.for_field(field))
}

/// Height in inches (DAU), such as `"069 in"` for 5'9".
pub fn format_height(feet: &str, inches: &str) -> Result<String, FormatError> {
    let feet = parse_number("height", feet)?;
    let inches = parse_number("height", inches)?;
    let total = feet
        .checked_mul(12)
        .and_then(|f| f.checked_add(inches))
        .ok_or_else(|| FormatError::new("height", format!("{feet}'{inches}\"")))?;

    Ok(format!("{} in", three_digits("height", total)?))
}

/// Height in centimeters (DAU), such as `"175 cm"`.
pub fn format_height_cm(centimeters: &str) -> Result<String, FormatError> {
    let cm = parse_number("height", centimeters)?;
    Ok(format!("{} cm", three_digits("height", cm)?))
}

/// Weight (DAW or DAX) as three zero-padded digits.
pub fn format_weight(weight: &str) -> Result<String, FormatError> {
    let value = parse_number("weight", weight)?;
    Ok(three_digits("weight", value)?.to_string())
}
