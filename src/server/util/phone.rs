use crate::server::error::{auth::AuthError, Error};

/// Country code assumed for numbers entered without one
pub const DEFAULT_COUNTRY_CODE: &str = "+91";

const MIN_DIGITS: usize = 10;
const MAX_DIGITS: usize = 15;

/// Normalizes a user entered mobile number to `+<digits>`.
///
/// Spaces and dashes are stripped and numbers without a leading `+` get
/// [`DEFAULT_COUNTRY_CODE`] prepended.
///
/// # Returns
/// - `Ok(String)` - `+` followed by 10 to 15 digits
/// - `Err(Error::AuthError(AuthError::InvalidPhone))` - anything else
pub fn normalize_phone(raw: &str) -> Result<String, Error> {
    let compact: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .collect();

    let normalized = if compact.starts_with('+') {
        compact
    } else {
        format!("{}{}", DEFAULT_COUNTRY_CODE, compact)
    };

    let digits = &normalized[1..];
    let valid = (MIN_DIGITS..=MAX_DIGITS).contains(&digits.len())
        && digits.chars().all(|c| c.is_ascii_digit());

    if !valid {
        return Err(AuthError::InvalidPhone(raw.to_string()).into());
    }

    Ok(normalized)
}
