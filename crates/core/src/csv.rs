//! Client-visible subset of the portfolio CSV import contract.
//!
//! The backend is authoritative; this module lets the shell validate a
//! file before uploading it and reproduce the template offline. Required
//! columns are `name, purchase_date, quantity, purchase_price`; `isin` and
//! `ticker` are optional but at least one must be present per row. `,` and
//! `;` delimiters, `.` and `,` decimal separators, and a tolerant set of
//! date formats are all accepted.

use chrono::{NaiveDate, NaiveDateTime};

use crate::errors::ClientError;
use crate::messages::{self, Language};
use crate::models::portfolio::HoldingDraft;

/// The semicolon-delimited template the backend serves for download.
pub const TEMPLATE: &str = "name;purchase_date;quantity;purchase_price;isin;ticker\n\
Apple Inc.;2024-01-15;10;150.50;US0378331005;AAPL\n\
Microsoft Corporation;2024-02-20;5;380.25;US5949181045;MSFT\n\
BASF;2024-01-01;11.532;77.0855;DE000BASF111;\n";

const REQUIRED_COLUMNS: [&str; 4] = ["name", "purchase_date", "quantity", "purchase_price"];

/// Date-only formats tried in order.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y", "%Y/%m/%d", "%d-%m-%Y"];

/// Formats carrying a time component; the time is dropped.
const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%d.%m.%Y %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
];

/// Extra date-only tolerance the backend grew over time.
const EXTRA_DATE_FORMATS: [&str; 2] = ["%Y.%m.%d", "%d %m %Y"];

/// Outcome of a pre-upload validation pass. A row error never aborts the
/// remaining rows.
#[derive(Debug, Clone)]
pub struct CsvValidation {
    pub rows: Vec<HoldingDraft>,
    pub errors: Vec<String>,
}

/// Detect the field delimiter from the header line: `;` wins when present,
/// `,` otherwise.
#[must_use]
pub fn detect_delimiter(text: &str) -> u8 {
    let first_line = text.lines().next().unwrap_or(text);
    if first_line.contains(';') {
        b';'
    } else {
        b','
    }
}

/// Parse one of the accepted date representations into a calendar date.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    for fmt in DATE_FORMATS.iter().chain(EXTRA_DATE_FORMATS.iter()) {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(date);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(datetime.date());
        }
    }
    // ISO 8601 with a T separator ("2024-01-15T10:30:00"): the date part
    // alone is enough.
    if let Some((date_part, _)) = raw.split_once('T') {
        if let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
            return Some(date);
        }
    }
    None
}

/// Parse a decimal that may use `,` as its separator. Returns `None` for
/// anything non-finite.
#[must_use]
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

/// ISIN format check: exactly 12 alphanumeric characters.
#[must_use]
pub fn validate_isin(isin: &str) -> bool {
    isin.len() == 12 && isin.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Validate a whole CSV file against the import contract.
///
/// Header problems (empty file, missing required columns) fail the whole
/// file with `ClientError::Validation`; per-row problems land in
/// `errors` with their line number (header is line 1) while the remaining
/// rows are still processed, mirroring how the server applies the batch.
pub fn validate(text: &str, lang: Language) -> Result<CsvValidation, ClientError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    if text.trim().is_empty() {
        return Err(ClientError::Validation(messages::csv_empty(lang).to_string()));
    }

    let delimiter = detect_delimiter(text);
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| {
            tracing::warn!(error = %e, "unreadable CSV header");
            ClientError::Validation(messages::csv_empty(lang).to_string())
        })?
        .clone();

    let column = |name: &str| headers.iter().position(|h| h == name);
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|c| column(c).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(ClientError::Validation(messages::csv_missing_columns(
            lang, &missing,
        )));
    }

    let name_col = column("name");
    let date_col = column("purchase_date");
    let quantity_col = column("quantity");
    let price_col = column("purchase_price");
    let isin_col = column("isin");
    let ticker_col = column("ticker");
    let field = |record: &csv::StringRecord, col: Option<usize>| -> String {
        col.and_then(|i| record.get(i)).unwrap_or("").trim().to_string()
    };

    let mut rows = Vec::new();
    let mut errors = Vec::new();

    for (index, record) in reader.records().enumerate() {
        let row_num = index + 2; // header is line 1
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                errors.push(messages::csv_row_error(lang, row_num, &e.to_string()));
                continue;
            }
        };

        let name = field(&record, name_col);
        let date_raw = field(&record, date_col);
        let quantity_raw = field(&record, quantity_col);
        let price_raw = field(&record, price_col);
        let isin = field(&record, isin_col);
        let ticker = field(&record, ticker_col);

        if name.is_empty() {
            errors.push(messages::csv_row_error(
                lang,
                row_num,
                &messages::required_field(lang, name_label(lang)),
            ));
            continue;
        }
        if date_raw.is_empty() {
            errors.push(messages::csv_row_error(
                lang,
                row_num,
                &messages::required_field(lang, date_label(lang)),
            ));
            continue;
        }
        if quantity_raw.is_empty() {
            errors.push(messages::csv_row_error(
                lang,
                row_num,
                &messages::required_field(lang, quantity_label(lang)),
            ));
            continue;
        }
        if price_raw.is_empty() {
            errors.push(messages::csv_row_error(
                lang,
                row_num,
                &messages::required_field(lang, price_label(lang)),
            ));
            continue;
        }
        if isin.is_empty() && ticker.is_empty() {
            errors.push(messages::csv_row_error(
                lang,
                row_num,
                messages::isin_or_ticker_required(lang),
            ));
            continue;
        }

        let Some(purchase_date) = parse_date(&date_raw) else {
            errors.push(messages::csv_row_error(
                lang,
                row_num,
                &messages::invalid_date(lang, &date_raw),
            ));
            continue;
        };

        let Some(quantity) = parse_decimal(&quantity_raw) else {
            errors.push(messages::csv_row_error(
                lang,
                row_num,
                &messages::invalid_number(lang, &quantity_raw),
            ));
            continue;
        };
        if quantity <= 0.0 {
            errors.push(messages::csv_row_error(
                lang,
                row_num,
                messages::quantity_must_be_positive(lang),
            ));
            continue;
        }

        if !isin.is_empty() && !validate_isin(&isin) {
            errors.push(messages::csv_row_error(
                lang,
                row_num,
                &messages::invalid_isin(lang, &isin),
            ));
            continue;
        }

        if parse_decimal(&price_raw).is_none() {
            errors.push(messages::csv_row_error(
                lang,
                row_num,
                &messages::invalid_number(lang, &price_raw),
            ));
            continue;
        }

        rows.push(HoldingDraft {
            name,
            isin: (!isin.is_empty()).then(|| isin.to_uppercase()),
            ticker: (!ticker.is_empty()).then(|| ticker.to_uppercase()),
            sector: None,
            region: None,
            asset_class: None,
            purchase_date: purchase_date.format("%Y-%m-%d").to_string(),
            quantity,
            // The backend stores the price string with a dot separator.
            purchase_price: price_raw.replace(',', "."),
        });
    }

    Ok(CsvValidation { rows, errors })
}

fn name_label(lang: Language) -> &'static str {
    match lang {
        Language::De => "Name",
        Language::En => "Name",
    }
}

fn date_label(lang: Language) -> &'static str {
    match lang {
        Language::De => "Kaufdatum",
        Language::En => "Purchase date",
    }
}

fn quantity_label(lang: Language) -> &'static str {
    match lang {
        Language::De => "Anzahl",
        Language::En => "Quantity",
    }
}

fn price_label(lang: Language) -> &'static str {
    match lang {
        Language::De => "Kaufpreis",
        Language::En => "Purchase price",
    }
}
