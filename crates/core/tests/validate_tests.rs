// ═══════════════════════════════════════════════════════════════════
// Validate Tests — pre-request form checks (no network involved)
// ═══════════════════════════════════════════════════════════════════

use roboadvisor_client_core::errors::ClientError;
use roboadvisor_client_core::messages::Language;
use roboadvisor_client_core::validate::{
    isin_or_ticker, password_confirmation, password_length, required,
};

mod required_fields {
    use super::*;

    #[test]
    fn empty_and_whitespace_fail() {
        assert!(required(Language::De, "", "Name").is_err());
        assert!(required(Language::De, "   ", "Name").is_err());
    }

    #[test]
    fn message_names_the_field() {
        let err = required(Language::De, "", "Kaufdatum").unwrap_err();
        assert_eq!(err.to_string(), "Kaufdatum ist erforderlich");
        assert!(err.is_validation());
    }

    #[test]
    fn non_empty_passes() {
        assert!(required(Language::De, "Apple Inc.", "Name").is_ok());
    }
}

mod passwords {
    use super::*;

    #[test]
    fn mismatch_is_rejected() {
        let err = password_confirmation(Language::De, "geheim123", "geheim124").unwrap_err();
        assert_eq!(err.to_string(), "Die neuen Passwörter stimmen nicht überein");
    }

    #[test]
    fn matching_confirmation_passes() {
        assert!(password_confirmation(Language::De, "geheim123", "geheim123").is_ok());
    }

    #[test]
    fn too_short_is_rejected() {
        let err = password_length(Language::De, "kurz5").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Passwort muss mindestens 6 Zeichen lang sein"
        );
    }

    #[test]
    fn too_long_is_rejected() {
        let long = "x".repeat(129);
        let err = password_length(Language::De, &long).unwrap_err();
        assert!(err.to_string().contains("maximal 128 Zeichen"));
    }

    #[test]
    fn boundary_lengths_pass() {
        assert!(password_length(Language::De, "sechs6").is_ok());
        assert!(password_length(Language::De, &"x".repeat(128)).is_ok());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Six umlauts are six characters even though they are twelve bytes.
        assert!(password_length(Language::De, "ääääää").is_ok());
    }
}

mod identifiers {
    use super::*;

    #[test]
    fn both_missing_is_rejected() {
        let err = isin_or_ticker(Language::De, None, None).unwrap_err();
        assert_eq!(err.to_string(), "ISIN oder Ticker muss angegeben werden");
    }

    #[test]
    fn blank_values_count_as_missing() {
        assert!(isin_or_ticker(Language::De, Some("  "), Some("")).is_err());
    }

    #[test]
    fn either_one_is_enough() {
        assert!(isin_or_ticker(Language::De, Some("US0378331005"), None).is_ok());
        assert!(isin_or_ticker(Language::De, None, Some("AAPL")).is_ok());
    }

    #[test]
    fn validation_errors_never_carry_a_status() {
        let err: ClientError = isin_or_ticker(Language::De, None, None).unwrap_err();
        assert_eq!(err.status(), None);
    }
}
