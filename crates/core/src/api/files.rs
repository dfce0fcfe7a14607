//! Binary endpoints that bypass the generic JSON path: CSV upload
//! (multipart form), CSV template download, and the account data export.
//! Downloads end in a client-side file save into a caller-supplied
//! directory.

use std::path::{Path, PathBuf};

use reqwest::multipart::{Form, Part};

use crate::errors::ClientError;
use crate::messages;
use crate::models::portfolio::CsvUploadReport;

use super::ApiClient;

const CSV_TEMPLATE_FILE_NAME: &str = "portfolio_template.csv";

impl ApiClient {
    /// Upload a portfolio CSV as a multipart form (field `file`). The
    /// report carries per-row errors; a partially failed batch is still a
    /// 200 with both sides filled in.
    pub async fn upload_portfolio_csv(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<CsvUploadReport, ClientError> {
        let url = self.url("/api/portfolio/upload-csv");
        let part = Part::bytes(contents)
            .file_name(file_name.to_string())
            .mime_str("text/csv")
            .map_err(|e| {
                tracing::error!(error = %e, "failed to build multipart body");
                ClientError::Network(messages::generic(self.language).to_string())
            })?;
        let form = Form::new().part("file", part);

        let mut builder = self.http.post(&url).multipart(form);
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(url = %url, error = %e, "CSV upload failed");
            ClientError::Network(messages::generic(self.language).to_string())
        })?;

        let status = response.status().as_u16();
        let ok = response.status().is_success();
        let text = response.text().await.map_err(|e| {
            tracing::error!(url = %url, status, error = %e, "failed to read upload response");
            ClientError::Network(messages::generic(self.language).to_string())
        })?;

        self.finish_json(&url, status, ok, &text)
    }

    /// Download the CSV template and save it as `portfolio_template.csv`
    /// in `dest_dir`. Returns the saved path.
    pub async fn download_csv_template(&self, dest_dir: &Path) -> Result<PathBuf, ClientError> {
        let bytes = self
            .fetch_binary(reqwest::Method::GET, "/api/portfolio/csv-template")
            .await?;
        save_file(dest_dir, CSV_TEMPLATE_FILE_NAME, &bytes)
    }

    /// Export the account data and save it as `user_data_<YYYY-MM-DD>.json`
    /// in `dest_dir`. Returns the saved path.
    pub async fn export_user_data(&self, dest_dir: &Path) -> Result<PathBuf, ClientError> {
        let bytes = self
            .fetch_binary(reqwest::Method::POST, "/api/user/data-export")
            .await?;
        let file_name = format!("user_data_{}.json", chrono::Utc::now().format("%Y-%m-%d"));
        save_file(dest_dir, &file_name, &bytes)
    }

    /// Fetch a binary body with the bearer token attached. A failure
    /// status raises the error from the parsed JSON body when there is
    /// one.
    async fn fetch_binary(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> Result<Vec<u8>, ClientError> {
        let url = self.url(path);
        let mut builder = self.http.request(method, &url);
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(url = %url, error = %e, "download request failed");
            ClientError::Network(messages::generic(self.language).to_string())
        })?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();
            let backend_message = serde_json::from_str::<serde_json::Value>(&text)
                .ok()
                .and_then(|data| {
                    data.get("detail")
                        .or_else(|| data.get("error"))
                        .and_then(serde_json::Value::as_str)
                        .map(str::to_owned)
                });
            tracing::error!(url = %url, status, backend_message = ?backend_message, "download error response");
            return Err(ClientError::Api {
                status,
                message: messages::classify(self.language, status, backend_message.as_deref()),
            });
        }

        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!(url = %url, status, error = %e, "failed to read download body");
            ClientError::Network(messages::generic(self.language).to_string())
        })?;
        Ok(bytes.to_vec())
    }
}

fn save_file(dest_dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, ClientError> {
    std::fs::create_dir_all(dest_dir)?;
    let path = dest_dir.join(file_name);
    std::fs::write(&path, bytes)?;
    Ok(path)
}
