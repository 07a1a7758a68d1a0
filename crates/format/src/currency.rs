//! Currency formatting (BRL, `pt-BR` grouping).

const SYMBOL: &str = "R$";
/// Separator between symbol and amount, as emitted by the `pt-BR` locale.
const NBSP: char = '\u{a0}';

/// Format `amount` as `R$ 1.234,56`.
///
/// A missing or non-finite amount is rendered as zero. Negative amounts keep
/// their sign in front of the symbol (`-R$ 12,50`).
///
/// Rounding works on the shortest decimal form of the amount, half away from
/// zero at the cent, so `1.005` renders as `R$ 1,01` like the locale
/// formatter does, and large amounts keep every digit.
pub fn format_currency(amount: Option<f64>) -> String {
    let amount = amount.filter(|a| a.is_finite()).unwrap_or(0.0);
    let (units, cents) = round_to_cents(amount.abs());

    let negative = amount < 0.0 && (cents != 0 || units != "0");
    let sign = if negative { "-" } else { "" };
    format!("{sign}{SYMBOL}{NBSP}{},{cents:02}", group_thousands(&units))
}

/// Split a non-negative finite amount into integer digits and cents.
fn round_to_cents(amount: f64) -> (String, u8) {
    // `Display` for f64 is the shortest round-trip form and never uses an
    // exponent.
    let text = amount.to_string();
    let (units, fraction) = text.split_once('.').unwrap_or((&text, ""));

    let mut digits = fraction.bytes().map(|b| b - b'0');
    let tens = digits.next().unwrap_or(0);
    let ones = digits.next().unwrap_or(0);
    let cents = tens * 10 + ones;

    if digits.next().unwrap_or(0) < 5 {
        return (units.to_string(), cents);
    }
    match cents + 1 {
        100 => (increment(units), 0),
        cents => (units.to_string(), cents),
    }
}

/// Add one to a string of decimal digits.
fn increment(digits: &str) -> String {
    let mut out: Vec<u8> = digits.bytes().collect();
    for digit in out.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return String::from_utf8(out).unwrap_or_default();
        }
    }
    out.insert(0, b'1');
    String::from_utf8(out).unwrap_or_default()
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_amount_formats_as_zero() {
        assert_eq!(format_currency(None), "R$\u{a0}0,00");
        assert_eq!(format_currency(Some(f64::NAN)), "R$\u{a0}0,00");
        assert_eq!(format_currency(Some(f64::INFINITY)), "R$\u{a0}0,00");
    }

    #[test]
    fn groups_thousands_and_uses_comma_decimals() {
        assert_eq!(format_currency(Some(1234.5)), "R$\u{a0}1.234,50");
        assert_eq!(format_currency(Some(1_000_000.0)), "R$\u{a0}1.000.000,00");
        assert_eq!(format_currency(Some(999.999)), "R$\u{a0}1.000,00");
        assert_eq!(format_currency(Some(0.05)), "R$\u{a0}0,05");
    }

    #[test]
    fn halfway_cents_round_up_from_the_decimal_form() {
        assert_eq!(format_currency(Some(1.005)), "R$\u{a0}1,01");
        assert_eq!(format_currency(Some(2.675)), "R$\u{a0}2,68");
        assert_eq!(format_currency(Some(0.125)), "R$\u{a0}0,13");
        assert_eq!(format_currency(Some(1.004)), "R$\u{a0}1,00");
        assert_eq!(format_currency(Some(-2.675)), "-R$\u{a0}2,68");
    }

    #[test]
    fn large_amounts_are_not_truncated() {
        assert_eq!(
            format_currency(Some(1e17)),
            "R$\u{a0}100.000.000.000.000.000,00"
        );
        assert_eq!(format_currency(Some(9.995)), "R$\u{a0}10,00");
        assert_eq!(format_currency(Some(99999.995)), "R$\u{a0}100.000,00");
    }

    #[test]
    fn negative_amounts_keep_the_sign() {
        assert_eq!(format_currency(Some(-12.5)), "-R$\u{a0}12,50");
        assert_eq!(format_currency(Some(-1234.0)), "-R$\u{a0}1.234,00");
        assert_eq!(format_currency(Some(-0.001)), "R$\u{a0}0,00");
    }
}
