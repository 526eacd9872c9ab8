//! Property tests for the checksum core.

use flota_rut::{compute_check_digit, validate, Rut};
use proptest::prelude::*;

const CHECK_ALPHABET: [char; 11] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'k'];

fn check_value(c: char) -> u32 {
    if c == 'k' {
        10
    } else {
        c.to_digit(10).expect("check character is a digit or 'k'")
    }
}

fn check_char(v: u32) -> char {
    CHECK_ALPHABET[v as usize]
}

proptest! {
    #[test]
    fn format_then_validate_roundtrips(body in "[0-9]{1,12}") {
        prop_assert!(validate(&flota_rut::format(&body, true)));
    }

    #[test]
    fn check_digit_stays_in_alphabet(body in "[0-9]{1,12}") {
        let dv = compute_check_digit(&body).unwrap();
        prop_assert!(CHECK_ALPHABET.contains(&dv));
    }

    #[test]
    fn check_digit_is_deterministic(body in "[0-9]{1,12}") {
        prop_assert_eq!(compute_check_digit(&body), compute_check_digit(&body));
    }

    #[test]
    fn validation_ignores_decoration(body in "[0-9]{1,12}") {
        let canonical = flota_rut::format(&body, true);
        let compact: String = canonical.chars().filter(|c| *c != '.').collect();
        let spaced: String = canonical.chars().flat_map(|c| [c, ' ']).collect();

        prop_assert!(validate(&canonical));
        prop_assert!(validate(&compact));
        prop_assert!(validate(&spaced));
    }

    #[test]
    fn wrong_check_digit_is_rejected(body in "[0-9]{1,12}", offset in 1u32..11) {
        let expected = compute_check_digit(&body).unwrap();
        let wrong = check_char((check_value(expected) + offset) % 11);
        let candidate = format!("{body}-{wrong}");

        prop_assert!(!validate(&candidate));
    }

    #[test]
    fn rut_display_parse_roundtrips(body in "[0-9]{1,12}") {
        let rut = Rut::from_body(&body).unwrap();
        let reparsed: Rut = rut.to_string().parse().unwrap();
        prop_assert_eq!(&rut, &reparsed);

        // Compact and canonical forms agree on validity
        prop_assert!(validate(&rut.compact()));
        prop_assert!(validate(&rut.to_string()));
    }
}
