//! National identification number (11 digits, two check digits).

const LEN: usize = 11;

/// Compute both check digits for a 9-digit base.
pub fn check_digits(base: &[u8; 9]) -> (u8, u8) {
    let first = check_digit(base);

    let mut extended = [0u8; 10];
    extended[..9].copy_from_slice(base);
    extended[9] = first;
    let second = check_digit(&extended);

    (first, second)
}

/// Weighted sum with descending weights `len + 1 ..= 2`, reduced mod 11.
fn check_digit(digits: &[u8]) -> u8 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .zip((2..=top).rev())
        .map(|(d, w)| u32::from(*d) * w)
        .sum();

    match (sum * 10) % 11 {
        10 => 0,
        r => r as u8,
    }
}

fn digits_of(value: &str) -> Vec<u8> {
    value
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect()
}

/// Validate an identification number.
///
/// Punctuation is ignored (`111.444.777-35` and `11144477735` are
/// equivalent). Numbers whose digits are all identical are rejected even
/// though they satisfy the check-digit arithmetic.
pub fn is_valid_id_number(value: &str) -> bool {
    let digits = digits_of(value);
    if digits.len() != LEN {
        return false;
    }
    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    let mut base = [0u8; 9];
    base.copy_from_slice(&digits[..9]);
    let (first, second) = check_digits(&base);

    first == digits[9] && second == digits[10]
}

/// Render the 11 digits of `value` as `XXX.XXX.XXX-XX`.
///
/// Returns `None` when the input does not hold exactly 11 digits. Check
/// digits are not verified here.
pub fn format_id_number(value: &str) -> Option<String> {
    let digits: String = digits_of(value)
        .into_iter()
        .map(|d| char::from(b'0' + d))
        .collect();
    if digits.len() != LEN {
        return None;
    }
    Some(format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_fixture_is_valid_with_and_without_punctuation() {
        assert!(is_valid_id_number("111.444.777-35"));
        assert!(is_valid_id_number("11144477735"));
    }

    #[test]
    fn altered_check_digit_is_invalid() {
        assert!(!is_valid_id_number("11144477736"));
        assert!(!is_valid_id_number("11144477725"));
    }

    #[test]
    fn all_equal_digits_are_invalid() {
        assert!(!is_valid_id_number("00000000000"));
        assert!(!is_valid_id_number("111.111.111-11"));
    }

    #[test]
    fn wrong_length_is_invalid() {
        assert!(!is_valid_id_number(""));
        assert!(!is_valid_id_number("1114447773"));
        assert!(!is_valid_id_number("111444777350"));
    }

    #[test]
    fn check_digits_match_fixture() {
        assert_eq!(check_digits(&[1, 1, 1, 4, 4, 4, 7, 7, 7]), (3, 5));
    }

    #[test]
    fn format_inserts_punctuation() {
        assert_eq!(
            format_id_number("11144477735").as_deref(),
            Some("111.444.777-35")
        );
        assert_eq!(format_id_number("123"), None);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn assemble(base: [u8; 9]) -> String {
            let (a, b) = check_digits(&base);
            base.iter()
                .chain([a, b].iter())
                .map(|d| char::from(b'0' + d))
                .collect()
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: numbers built from computed check digits validate,
            /// unless every digit happens to be the same.
            #[test]
            fn generated_numbers_validate(base in prop::array::uniform9(0u8..10)) {
                let number = assemble(base);
                let all_same = number.chars().all(|c| Some(c) == number.chars().next());
                prop_assert_eq!(is_valid_id_number(&number), !all_same);
            }

            /// Property: the verdict is deterministic.
            #[test]
            fn verdict_is_deterministic(number in "[0-9]{11}") {
                prop_assert_eq!(is_valid_id_number(&number), is_valid_id_number(&number));
            }

            /// Property: all-equal-digit strings never validate.
            #[test]
            fn repeated_digit_never_validates(d in 0u8..10) {
                let number: String = std::iter::repeat(char::from(b'0' + d)).take(11).collect();
                prop_assert!(!is_valid_id_number(&number));
            }

            /// Property: changing the last digit of a valid number invalidates it.
            #[test]
            fn altering_last_digit_invalidates(
                base in prop::array::uniform9(0u8..10),
                bump in 1u8..10
            ) {
                let number = assemble(base);
                let mut bytes = number.into_bytes();
                bytes[10] = b'0' + (bytes[10] - b'0' + bump) % 10;
                let altered = String::from_utf8(bytes).unwrap();
                prop_assert!(!is_valid_id_number(&altered));
            }
        }
    }
}
