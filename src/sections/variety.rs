//! Character variety sections - uppercase, lowercase and digit checks.

use unicode_categories::UnicodeCategories;
use unicode_normalization::char::decompose_compatible;

use super::SectionResult;

fn missing(class: &str) -> SectionResult {
    Some(format!("Missing: {}", class))
}

/// Checks that the password contains at least one uppercase letter.
pub fn uppercase_section(password: &str) -> SectionResult {
    if password.chars().any(|c| c.is_uppercase()) {
        return None;
    }
    missing("uppercase")
}

/// Checks that the password contains at least one lowercase letter.
pub fn lowercase_section(password: &str) -> SectionResult {
    if password.chars().any(|c| c.is_lowercase()) {
        return None;
    }
    missing("lowercase")
}

/// Decimal digits of any script, plus compatibility forms of a single
/// digit such as `²` or `①`. Fractions and multi-digit forms (`½`, `⑩`)
/// are not digits.
fn is_digit(c: char) -> bool {
    if c.is_number_decimal_digit() {
        return true;
    }
    if !c.is_number_other() {
        return false;
    }

    let mut digits = 0;
    decompose_compatible(c, |d| {
        if d.is_number_decimal_digit() {
            digits += 1;
        }
    });
    digits == 1
}

/// Checks that the password contains at least one digit.
pub fn digit_section(password: &str) -> SectionResult {
    if password.chars().any(is_digit) {
        return None;
    }
    missing("numbers")
}
