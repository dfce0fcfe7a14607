use serde::{Deserialize, Serialize};

/// One portfolio position. Valuation fields are server-computed and only
/// present on dashboard responses; plain CRUD responses leave them `None`
/// and the shell renders "N/A". Never mutated locally except by full
/// reload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Holding {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub isin: Option<String>,
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub asset_class: Option<String>,
    pub purchase_date: String,
    pub quantity: f64,
    /// Kept as the string the backend stores (decimal separator preserved).
    pub purchase_price: String,
    #[serde(default)]
    pub purchase_value: Option<f64>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub current_value: Option<f64>,
    #[serde(default)]
    pub gain_loss: Option<f64>,
    #[serde(default)]
    pub gain_loss_percent: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Holding {
    /// Display form of an optional valuation figure.
    #[must_use]
    pub fn display_value(value: Option<f64>) -> String {
        match value {
            Some(v) => format!("{v:.2}"),
            None => "N/A".to_string(),
        }
    }
}

/// Create payload for a new holding (manual form or a validated CSV row).
/// `purchase_date` is an ISO `YYYY-MM-DD` string on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldingDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_class: Option<String>,
    pub purchase_date: String,
    pub quantity: f64,
    pub purchase_price: String,
}

/// Partial update for an existing holding.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HoldingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<String>,
}

/// Identity echo of a holding created by the CSV upload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedHolding {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub isin: Option<String>,
    #[serde(default)]
    pub ticker: Option<String>,
}

/// Result of `POST /api/portfolio/upload-csv`: per-row errors never abort
/// the batch, so a partially successful upload reports both sides.
#[derive(Debug, Clone, Deserialize)]
pub struct CsvUploadReport {
    pub success: u32,
    pub errors: Vec<String>,
    pub created: Vec<CreatedHolding>,
}
