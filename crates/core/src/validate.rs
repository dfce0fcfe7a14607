//! Pre-request form checks.
//!
//! These short-circuit with an immediate localized `Validation` error
//! before any network call is made; server-side validation still applies
//! to whatever passes.

use crate::errors::ClientError;
use crate::messages::{self, Language};

pub const PASSWORD_MIN_LEN: usize = 6;
pub const PASSWORD_MAX_LEN: usize = 128;

/// A required text field must be non-empty after trimming.
pub fn required(lang: Language, value: &str, field_label: &str) -> Result<(), ClientError> {
    if value.trim().is_empty() {
        return Err(ClientError::Validation(messages::required_field(
            lang,
            field_label,
        )));
    }
    Ok(())
}

/// Registration / password-change confirmation must match exactly.
pub fn password_confirmation(
    lang: Language,
    password: &str,
    confirmation: &str,
) -> Result<(), ClientError> {
    if password != confirmation {
        return Err(ClientError::Validation(
            messages::passwords_mismatch(lang).to_string(),
        ));
    }
    Ok(())
}

/// Length bounds checked client-side; the server enforces its own limit
/// on top.
pub fn password_length(lang: Language, password: &str) -> Result<(), ClientError> {
    let chars = password.chars().count();
    if chars < PASSWORD_MIN_LEN {
        return Err(ClientError::Validation(
            messages::password_too_short(lang).to_string(),
        ));
    }
    if chars > PASSWORD_MAX_LEN {
        return Err(ClientError::Validation(
            messages::password_too_long(lang).to_string(),
        ));
    }
    Ok(())
}

/// A holding or watchlist entry needs at least one identifier.
pub fn isin_or_ticker(
    lang: Language,
    isin: Option<&str>,
    ticker: Option<&str>,
) -> Result<(), ClientError> {
    let has_isin = isin.map(str::trim).is_some_and(|s| !s.is_empty());
    let has_ticker = ticker.map(str::trim).is_some_and(|s| !s.is_empty());
    if !has_isin && !has_ticker {
        return Err(ClientError::Validation(
            messages::isin_or_ticker_required(lang).to_string(),
        ));
    }
    Ok(())
}
