//! User-facing message catalog and HTTP error classification.
//!
//! The backend serves a German-speaking audience; `De` is the default
//! language and `En` mirrors every text for shells that prefer it.

use serde::{Deserialize, Serialize};

/// Language of every user-facing message produced by this library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    De,
    En,
}

impl Language {
    /// Parse the two-letter code stored in user settings ("de"/"en").
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "en" => Language::En,
            _ => Language::De,
        }
    }
}

/// Markers that identify technical leakage in a backend-supplied message.
/// A message containing any of these is discarded in favor of the
/// status-keyed generic text.
const LEAKAGE_MARKERS: &[&str] = &[
    "Internal server error",
    "Registration failed",
    "Traceback",
    "password cannot be longer than 72 bytes",
    "truncate manually",
    "cannot be longer",
    "bytes",
    "Exception",
    "Error:",
    "at ",
    "File \"",
    "line ",
];

/// Map an HTTP error status to the fixed user-facing message.
#[must_use]
pub fn status_message(lang: Language, status: u16) -> &'static str {
    match (lang, status) {
        (Language::De, 400) => "Ungültige Eingabedaten. Bitte überprüfen Sie Ihre Eingaben.",
        (Language::De, 401) => "E-Mail oder Passwort falsch",
        (Language::De, 403) => "Zugriff verweigert",
        (Language::De, 404) => "Ressource nicht gefunden",
        (Language::De, 409) => "Diese E-Mail-Adresse ist bereits registriert",
        (Language::De, _) => generic(Language::De),
        (Language::En, 400) => "Invalid input. Please check your entries.",
        (Language::En, 401) => "Incorrect email or password",
        (Language::En, 403) => "Access denied",
        (Language::En, 404) => "Resource not found",
        (Language::En, 409) => "This email address is already registered",
        (Language::En, _) => generic(Language::En),
    }
}

/// The generic retry-later message (500/503, transport failures, fallback).
#[must_use]
pub fn generic(lang: Language) -> &'static str {
    match lang {
        Language::De => "Ein Fehler ist aufgetreten. Bitte versuchen Sie es später erneut.",
        Language::En => "An error occurred. Please try again later.",
    }
}

/// Classify a failed response into a user-facing message.
///
/// The server's own message is used verbatim when present and free of
/// technical leakage; otherwise the status-keyed generic text wins.
#[must_use]
pub fn classify(lang: Language, status: u16, backend_message: Option<&str>) -> String {
    if let Some(msg) = backend_message {
        if !msg.is_empty() && !LEAKAGE_MARKERS.iter().any(|marker| msg.contains(marker)) {
            return msg.to_string();
        }
    }
    status_message(lang, status).to_string()
}

// ── Client-side validation messages ─────────────────────────────────

#[must_use]
pub fn required_field(lang: Language, field: &str) -> String {
    match lang {
        Language::De => format!("{field} ist erforderlich"),
        Language::En => format!("{field} is required"),
    }
}

#[must_use]
pub fn passwords_mismatch(lang: Language) -> &'static str {
    match lang {
        Language::De => "Die neuen Passwörter stimmen nicht überein",
        Language::En => "The new passwords do not match",
    }
}

#[must_use]
pub fn password_too_short(lang: Language) -> &'static str {
    match lang {
        Language::De => "Passwort muss mindestens 6 Zeichen lang sein",
        Language::En => "Password must be at least 6 characters long",
    }
}

#[must_use]
pub fn password_too_long(lang: Language) -> &'static str {
    match lang {
        Language::De => "Passwort ist zu lang. Bitte verwenden Sie maximal 128 Zeichen.",
        Language::En => "Password is too long. Please use at most 128 characters.",
    }
}

#[must_use]
pub fn isin_or_ticker_required(lang: Language) -> &'static str {
    match lang {
        Language::De => "ISIN oder Ticker muss angegeben werden",
        Language::En => "Either ISIN or ticker must be provided",
    }
}

#[must_use]
pub fn invalid_isin(lang: Language, isin: &str) -> String {
    match lang {
        Language::De => format!("Ungültiges ISIN-Format: {isin}"),
        Language::En => format!("Invalid ISIN format: {isin}"),
    }
}

#[must_use]
pub fn invalid_date(lang: Language, value: &str) -> String {
    match lang {
        Language::De => format!(
            "Ungültiges Datumsformat: '{value}'. Unterstützte Formate: YYYY-MM-DD, DD.MM.YYYY, DD/MM/YYYY"
        ),
        Language::En => format!(
            "Invalid date format: '{value}'. Supported formats: YYYY-MM-DD, DD.MM.YYYY, DD/MM/YYYY"
        ),
    }
}

#[must_use]
pub fn invalid_number(lang: Language, value: &str) -> String {
    match lang {
        Language::De => format!("Ungültige Anzahl: {value}"),
        Language::En => format!("Invalid quantity: {value}"),
    }
}

#[must_use]
pub fn quantity_must_be_positive(lang: Language) -> &'static str {
    match lang {
        Language::De => "Anzahl muss größer als 0 sein",
        Language::En => "Quantity must be greater than 0",
    }
}

// ── CSV validation messages ─────────────────────────────────────────

#[must_use]
pub fn csv_empty(lang: Language) -> &'static str {
    match lang {
        Language::De => "CSV-Datei ist leer oder hat keinen Header",
        Language::En => "CSV file is empty or has no header",
    }
}

#[must_use]
pub fn csv_missing_columns(lang: Language, missing: &[&str]) -> String {
    let missing = missing.join(", ");
    match lang {
        Language::De => format!("Fehlende Spalten in CSV: {missing}"),
        Language::En => format!("Missing CSV columns: {missing}"),
    }
}

/// Prefix a per-row validation message with its line number (the header is
/// line 1, so data rows count from 2).
#[must_use]
pub fn csv_row_error(lang: Language, row: usize, message: &str) -> String {
    match lang {
        Language::De => format!("Zeile {row}: {message}"),
        Language::En => format!("Row {row}: {message}"),
    }
}
