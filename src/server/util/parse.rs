use crate::server::error::validation::{FieldIssue, ValidationError};

const ID_NOT_NUMERIC: &str = "ID must be a numeric value";
const ID_NOT_POSITIVE: &str = "ID must be a positive number";
const ID_OUT_OF_RANGE: &str = "ID is out of range";

/// Parses a resource identifier from a raw path segment.
///
/// Every failing rule is reported: a non-numeric value is also not positive, so `"abc"`
/// yields both messages.
///
/// # Arguments
/// - `value` - Raw path segment
///
/// # Returns
/// - `Ok(i32)` - Positive identifier within the store's key range
/// - `Err(ValidationError)` - The value is not numeric, not positive, or too large
pub fn parse_id(value: &str) -> Result<i32, ValidationError> {
    let Ok(parsed) = value.parse::<i64>() else {
        if is_integer_literal(value) {
            let message = if value.starts_with('-') {
                ID_NOT_POSITIVE
            } else {
                ID_OUT_OF_RANGE
            };
            return Err(ValidationError::new(vec![FieldIssue::new("id", message)]));
        }

        return Err(ValidationError::new(vec![
            FieldIssue::new("id", ID_NOT_NUMERIC),
            FieldIssue::new("id", ID_NOT_POSITIVE),
        ]));
    };

    ensure_positive_id(parsed)
}

/// Whether `value` is an optionally signed run of digits, whatever its magnitude.
fn is_integer_literal(value: &str) -> bool {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);

    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Checks an already numeric identifier against the positive, in-range rules.
pub fn ensure_positive_id(id: i64) -> Result<i32, ValidationError> {
    if id <= 0 {
        return Err(ValidationError::new(vec![FieldIssue::new(
            "id",
            ID_NOT_POSITIVE,
        )]));
    }

    i32::try_from(id)
        .map_err(|_| ValidationError::new(vec![FieldIssue::new("id", ID_OUT_OF_RANGE)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_integer() {
        assert_eq!(parse_id("42").unwrap(), 42);
    }

    #[test]
    fn reports_both_rules_for_text() {
        let err = parse_id("abc").unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid data supplied: id: ID must be a numeric value, id: ID must be a positive number"
        );
    }

    #[test]
    fn rejects_zero_and_negative() {
        for value in ["0", "-3"] {
            let err = parse_id(value).unwrap_err();
            assert_eq!(err.issues, vec![FieldIssue::new("id", ID_NOT_POSITIVE)]);
        }
    }

    #[test]
    fn rejects_fractional_value() {
        let err = parse_id("1.5").unwrap_err();

        assert_eq!(err.issues[0].message, ID_NOT_NUMERIC);
    }

    #[test]
    fn rejects_value_beyond_key_range() {
        let err = parse_id("2147483648").unwrap_err();

        assert_eq!(err.issues, vec![FieldIssue::new("id", ID_OUT_OF_RANGE)]);
    }

    #[test]
    fn rejects_digits_beyond_i64_as_out_of_range() {
        let err = parse_id("99999999999999999999").unwrap_err();

        assert_eq!(err.issues, vec![FieldIssue::new("id", ID_OUT_OF_RANGE)]);
    }

    #[test]
    fn rejects_huge_negative_as_not_positive() {
        let err = parse_id("-99999999999999999999").unwrap_err();

        assert_eq!(err.issues, vec![FieldIssue::new("id", ID_NOT_POSITIVE)]);
    }

    #[test]
    fn bare_sign_is_not_numeric() {
        let err = parse_id("-").unwrap_err();

        assert_eq!(err.issues[0].message, ID_NOT_NUMERIC);
    }
}
