//! Form field validators.

/// Check that `value` is shaped like `local@domain.tld`.
///
/// This is a shape check, not RFC 5322 validation: quoted local parts,
/// comments, IP-literal domains and internationalised addresses are not
/// recognised.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// A field is empty when absent or blank after trimming.
pub fn is_empty_field(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Coerce `value` to a number, returning it only when finite and strictly
/// positive.
///
/// `"inf"` and overflowing literals such as `"1e400"` parse as infinity and
/// are rejected: they have no JSON representation.
pub fn parse_positive_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n > 0.0)
}

/// True only when `value` coerces to a number strictly greater than zero.
pub fn is_positive_number(value: &str) -> bool {
    parse_positive_number(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_number_examples() {
        assert!(is_positive_number("10"));
        assert!(is_positive_number(" 0.5 "));
        assert!(!is_positive_number("-5"));
        assert!(!is_positive_number("0"));
        assert!(!is_positive_number("abc"));
        assert!(!is_positive_number(""));
        assert!(!is_positive_number("NaN"));
    }

    #[test]
    fn infinite_values_are_not_positive_numbers() {
        for value in ["inf", "Infinity", "+inf", "1e400", "-inf"] {
            assert!(!is_positive_number(value), "{value} should be rejected");
        }
        assert_eq!(parse_positive_number("1e300"), Some(1e300));
    }

    #[test]
    fn empty_field_examples() {
        assert!(is_empty_field(Some("  ")));
        assert!(is_empty_field(Some("")));
        assert!(is_empty_field(None));
        assert!(!is_empty_field(Some("x")));
    }

    #[test]
    fn email_accepts_simple_addresses() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b+tag@mail.example.org"));
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        for bad in [
            "",
            "invalid-email",
            "@example.com",
            "alice@",
            "alice@example",
            "alice@example.",
            "alice@@example.com",
            "alice @example.com",
            "alice@exa mple.com",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
    }
}
