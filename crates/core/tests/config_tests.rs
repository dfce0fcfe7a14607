// ═══════════════════════════════════════════════════════════════════
// Config Tests — one-shot base-URL resolution
// ═══════════════════════════════════════════════════════════════════

use roboadvisor_client_core::config::{resolve_base_url, ClientConfig};
use roboadvisor_client_core::messages::Language;

mod base_url {
    use super::*;

    #[test]
    fn explicit_override_always_wins() {
        let url = resolve_base_url(
            Some("https://api.example.com"),
            Some("https://app.example.com"),
        )
        .unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/");
    }

    #[test]
    fn localhost_origin_uses_development_backend() {
        let url = resolve_base_url(None, Some("http://localhost:5173")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/");
    }

    #[test]
    fn loopback_ip_counts_as_localhost() {
        let url = resolve_base_url(None, Some("http://127.0.0.1:5173")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/");
    }

    #[test]
    fn production_origin_gets_the_fixed_backend_path() {
        let url = resolve_base_url(None, Some("https://advisor.example.com")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://advisor.example.com/roboadvisor-frontend-backend"
        );
    }

    #[test]
    fn no_origin_falls_back_to_development_backend() {
        let url = resolve_base_url(None, None).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/");
    }

    #[test]
    fn malformed_override_is_rejected() {
        assert!(resolve_base_url(Some("not a url"), None).is_err());
    }
}

mod client_config {
    use super::*;

    #[test]
    fn token_path_can_be_redirected_for_tests() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::new(Some("http://localhost:8000"), None, Language::De)
            .unwrap()
            .with_token_path(dir.path().join("auth_token"));
        assert_eq!(config.token_path, dir.path().join("auth_token"));
    }

    #[test]
    fn language_is_carried_through() {
        let config = ClientConfig::new(Some("http://localhost:8000"), None, Language::En).unwrap();
        assert_eq!(config.language, Language::En);
    }
}
