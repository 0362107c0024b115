//! HTTP client harness implementation.

use std::path::Path;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// Per-request timeout, matching the harness's expectation that issuance
/// and handshake complete in milliseconds.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client harness for a TLS endpoint secured by an issued certificate.
///
/// Keep-alive is disabled so every request exercises a fresh handshake.
#[derive(Debug, Clone)]
pub struct HarnessClient {
    http: reqwest::Client,
    base_url: String,
}

impl HarnessClient {
    /// Create a client trusting the certificate at `ca_cert_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the certificate file cannot be read or parsed,
    /// or if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, ca_cert_path: &Path) -> ClientResult<Self> {
        let pem = std::fs::read(ca_cert_path).map_err(|source| ClientError::Io {
            path: ca_cert_path.to_path_buf(),
            source,
        })?;
        let ca = reqwest::Certificate::from_pem(&pem).map_err(|e| ClientError::CaCertificate {
            path: ca_cert_path.to_path_buf(),
            message: e.to_string(),
        })?;

        let http = reqwest::Client::builder()
            .add_root_certificate(ca)
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(REQUEST_TIMEOUT)
            .pool_max_idle_per_host(0)
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Returns the base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET the greeting endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-success status.
    pub async fn get_home(&self) -> ClientResult<String> {
        self.execute(self.http.get(format!("{}/", self.base_url)))
            .await
    }

    /// POST a JSON message to the echo endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-success status.
    pub async fn post_json(&self, message: &str) -> ClientResult<String> {
        let body = serde_json::json!({ "message": message });
        self.execute(
            self.http
                .post(format!("{}/postjson", self.base_url))
                .json(&body),
        )
        .await
    }

    /// Upload a local file as the `uploadfile` multipart field.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or on transport failure
    /// or non-success status.
    pub async fn upload_file(&self, path: &Path) -> ClientResult<String> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ClientError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let file_name = path
            .file_name()
            .map_or_else(|| "upload.bin".to_string(), |n| n.to_string_lossy().into_owned());

        let form = Form::new().part("uploadfile", Part::bytes(bytes).file_name(file_name));
        self.execute(
            self.http
                .post(format!("{}/upload", self.base_url))
                .multipart(form),
        )
        .await
    }

    /// Sends a request and returns the body text of a successful response.
    async fn execute(&self, request: reqwest::RequestBuilder) -> ClientResult<String> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(%status, "Harness response received");

        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus { status, body });
        }
        Ok(body)
    }
}
