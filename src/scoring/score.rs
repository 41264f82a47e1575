//! Suitability scoring for driver-shipment pairs.
//!
//! # Algorithm
//!
//! The score of a (shipment address, driver name) pair is derived from the
//! shipment's street name and the driver's name:
//!
//! 1. If the street name has an even number of characters, the base score is
//!    1.5 × the number of vowels in the driver's name; otherwise it is the
//!    number of consonants in the driver's name.
//! 2. If the street name length and the driver name length share a common
//!    factor greater than 1, the base score is multiplied by 1.5.

/// Extracts the street name from a shipment address.
///
/// The address is split on whitespace; when more than one token is present
/// the leading token is dropped as the house number. A trailing
/// `Suite <token>`, `Apt <token>`, or `Apt. <token>` pair is removed
/// (case-sensitive; `Suite.` is left alone). Remaining tokens are joined
/// with single spaces.
///
/// # Examples
///
/// ```
/// use u_assign::scoring::street_name;
///
/// assert_eq!(street_name("123 Main St"), "Main St");
/// assert_eq!(street_name("10 Oak Avenue Suite 5"), "Oak Avenue");
/// assert_eq!(street_name("42 Elm Apt. 3B"), "Elm");
/// assert_eq!(street_name("Broadway"), "Broadway");
/// ```
pub fn street_name(address: &str) -> String {
    let mut tokens: Vec<&str> = address.split_whitespace().collect();
    if tokens.len() > 1 {
        tokens.remove(0);
    }
    // The suffix needs a preceding token; a leading "Suite"/"Apt" is part
    // of the street name itself
    if tokens.len() > 2 {
        let marker = tokens[tokens.len() - 2];
        if marker == "Suite" || marker == "Apt" || marker == "Apt." {
            tokens.truncate(tokens.len() - 2);
        }
    }
    tokens.join(" ")
}

/// Computes the suitability score of assigning `driver` to the shipment at
/// `address`.
///
/// Total over all inputs; empty strings produce a score of zero.
///
/// # Examples
///
/// ```
/// use u_assign::scoring::score;
///
/// // "Main St" has 7 characters (odd): consonants of "Alice" = 2
/// assert_eq!(score("123 Main St", "Alice"), 2.0);
///
/// // "Oak Avenue" has 10 characters (even): 1.5 × 3 vowels = 4.5,
/// // and gcd(10, 5) > 1 applies another 1.5 factor
/// assert_eq!(score("10 Oak Avenue Suite 5", "Alice"), 6.75);
/// ```
pub fn score(address: &str, driver: &str) -> f64 {
    let street = street_name(address);
    let street_len = street.chars().count();
    let driver_len = driver.chars().count();

    let base = if street_len % 2 == 0 {
        1.5 * vowel_count(driver) as f64
    } else {
        consonant_count(driver) as f64
    };

    if gcd(street_len, driver_len) > 1 {
        base * 1.5
    } else {
        base
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

fn vowel_count(s: &str) -> usize {
    s.chars().filter(|&c| c.is_alphabetic() && is_vowel(c)).count()
}

fn consonant_count(s: &str) -> usize {
    s.chars().filter(|&c| c.is_alphabetic() && !is_vowel(c)).count()
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_street_name_drops_house_number() {
        assert_eq!(street_name("123 Main St"), "Main St");
        assert_eq!(street_name("1 Infinite Loop"), "Infinite Loop");
    }

    #[test]
    fn test_street_name_single_token_kept() {
        assert_eq!(street_name("Broadway"), "Broadway");
    }

    #[test]
    fn test_street_name_strips_suite() {
        assert_eq!(street_name("10 Oak Avenue Suite 5"), "Oak Avenue");
    }

    #[test]
    fn test_street_name_strips_apt_variants() {
        assert_eq!(street_name("42 Elm Apt 3B"), "Elm");
        assert_eq!(street_name("42 Elm Apt. 3B"), "Elm");
    }

    #[test]
    fn test_street_name_suite_dot_not_stripped() {
        // Only "Suite", "Apt", and "Apt." are suffix markers
        assert_eq!(street_name("42 Elm Suite. 3B"), "Elm Suite. 3B");
    }

    #[test]
    fn test_street_name_leading_marker_kept() {
        // Nothing precedes the marker once the house number is gone
        assert_eq!(street_name("9 Suite 5"), "Suite 5");
    }

    #[test]
    fn test_street_name_case_sensitive() {
        assert_eq!(street_name("42 Elm suite 3B"), "Elm suite 3B");
    }

    #[test]
    fn test_street_name_whitespace() {
        assert_eq!(street_name("  12   Cedar   Rd  "), "Cedar Rd");
        assert_eq!(street_name(""), "");
    }

    #[test]
    fn test_counts() {
        assert_eq!(vowel_count("Everardo"), 4);
        assert_eq!(consonant_count("Everardo"), 4);
        assert_eq!(vowel_count("B0b!"), 0);
        assert_eq!(consonant_count("B0b!"), 2);
        assert_eq!(vowel_count(""), 0);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(10, 5), 5);
        assert_eq!(gcd(7, 3), 1);
        assert_eq!(gcd(0, 4), 4);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn test_score_odd_street() {
        // "Main St" = 7 chars, consonants of "Eve" = 1, gcd(7, 3) = 1
        assert_eq!(score("9 Main St", "Eve"), 1.0);
    }

    #[test]
    fn test_score_even_street() {
        // "Broadway" = 8 chars, vowels of "Ann" = 1, gcd(8, 3) = 1
        assert_eq!(score("Broadway", "Ann"), 1.5);
    }

    #[test]
    fn test_score_common_factor_even() {
        // "Fake Dr." = 8 chars, vowels of "Daniel" = 3, gcd(8, 6) = 2
        assert_eq!(score("44 Fake Dr.", "Daniel"), 1.5 * 3.0 * 1.5);
    }

    #[test]
    fn test_score_common_factor_odd() {
        // "Main St" = 7 chars, consonants of "Matthew" = 5, gcd(7, 7) = 7
        assert_eq!(score("9 Main St", "Matthew"), 7.5);
    }

    #[test]
    fn test_score_empty_inputs() {
        assert_eq!(score("", ""), 0.0);
        assert_eq!(score("123 Main St", ""), 0.0);
    }
}
