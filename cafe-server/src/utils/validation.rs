//! Input validation helpers
//!
//! The `/add` form posts amenity flags as literal tokens rather than
//! proper booleans. Decoding is strict: anything outside the canonical
//! tokens is rejected with a per-field validation error instead of being
//! silently coerced to `false`.

use crate::utils::AppError;

/// Canonical true/false tokens accepted by [`parse_flag`]
const TRUE_TOKENS: [&str; 2] = ["True", "true"];
const FALSE_TOKENS: [&str; 2] = ["False", "false"];

/// Decode a form flag token into a bool, failing fast on anything else.
pub fn parse_flag(field: &str, value: &str) -> Result<bool, AppError> {
    if TRUE_TOKENS.contains(&value) {
        Ok(true)
    } else if FALSE_TOKENS.contains(&value) {
        Ok(false)
    } else {
        Err(AppError::validation(format!(
            "{field} must be 'True' or 'False', got '{value}'"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_canonical_tokens() {
        assert!(parse_flag("has_wifi", "True").unwrap());
        assert!(parse_flag("has_wifi", "true").unwrap());
        assert!(!parse_flag("has_wifi", "False").unwrap());
        assert!(!parse_flag("has_wifi", "false").unwrap());
    }

    #[test]
    fn test_parse_flag_rejects_everything_else() {
        for bad in ["TRUE", "yes", "1", "0", "", " True"] {
            let err = parse_flag("has_toilet", bad).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "token: {bad:?}");
        }
    }

    #[test]
    fn test_parse_flag_error_names_the_field() {
        let err = parse_flag("can_take_calls", "maybe").unwrap_err();
        assert!(err.to_string().contains("can_take_calls"));
    }
}
