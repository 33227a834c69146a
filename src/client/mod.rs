//! HTTP client for the eVatR endpoint.
//!
//! Each check is one GET request: the query string from
//! [`rpc::build_query`](crate::rpc::build_query) is appended to the endpoint
//! URL and the response body is handed to
//! [`rpc::parse_response`](crate::rpc::parse_response). Nothing is retried.
//!
//! # Example
//!
//! ```ignore
//! use evatr::client;
//! use evatr::core::CheckRequestBuilder;
//!
//! let request = CheckRequestBuilder::new("DE115235681", "CZ00177041").build()?;
//! let result = client::check_simple(&request).await?;
//! assert!(result.valid);
//! ```

mod config;

pub use config::{ClientConfig, EVATR_URL};

use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::core::{CheckRequest, CheckResult, EvatrError, is_known_error_code};
use crate::rpc;

/// Client for the eVatR endpoint. Cheap to clone.
#[derive(Debug, Clone)]
pub struct EvatrClient {
    http: Client,
    base_url: Url,
}

impl EvatrClient {
    /// Create a client for the production endpoint.
    pub fn new() -> Result<Self, EvatrError> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns `EvatrError::InvalidUrl` if `config.base_url` does not parse,
    /// `EvatrError::Http` if the HTTP client cannot be initialized.
    pub fn with_config(config: ClientConfig) -> Result<Self, EvatrError> {
        let base_url = Url::parse(&config.base_url)?;
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent)
            .build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Run a simple or qualified check, depending on the request.
    pub async fn check(&self, request: &CheckRequest) -> Result<CheckResult, EvatrError> {
        if request.is_qualified() {
            self.check_qualified(request).await
        } else {
            self.check_simple(request).await
        }
    }

    /// Confirm the VAT number only. Company details on the request are ignored.
    pub async fn check_simple(&self, request: &CheckRequest) -> Result<CheckResult, EvatrError> {
        let query = rpc::build_simple_query(request)?;
        let body = self.fetch(&query, false).await?;
        finish(rpc::parse_response(&body, false, request.include_raw_xml))
    }

    /// Confirm the VAT number and compare the company details.
    ///
    /// # Errors
    ///
    /// Returns `EvatrError::InvalidArgument` without sending anything if the
    /// request carries no company details.
    pub async fn check_qualified(
        &self,
        request: &CheckRequest,
    ) -> Result<CheckResult, EvatrError> {
        if !request.is_qualified() {
            return Err(EvatrError::InvalidArgument(
                "qualified check requires company details".into(),
            ));
        }
        let query = rpc::build_query(request)?;
        let body = self.fetch(&query, true).await?;
        finish(rpc::parse_response(&body, true, request.include_raw_xml))
    }

    async fn fetch(&self, query: &str, qualified: bool) -> Result<String, EvatrError> {
        let mut url = self.base_url.clone();
        url.set_query(Some(query));

        debug!(endpoint = %self.base_url, qualified, "sending eVatR request");
        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        debug!(bytes = body.len(), "received eVatR response");
        Ok(body)
    }
}

fn finish(result: Result<CheckResult, EvatrError>) -> Result<CheckResult, EvatrError> {
    match &result {
        Ok(r) => {
            if !is_known_error_code(r.error_code) {
                warn!(error_code = r.error_code, "eVatR returned an undocumented code");
            }
            debug!(
                error_code = r.error_code,
                valid = r.valid,
                "eVatR check complete"
            );
        }
        Err(e) => debug!(error = %e, "eVatR response rejected"),
    }
    result
}

/// Simple check with a default client.
pub async fn check_simple(request: &CheckRequest) -> Result<CheckResult, EvatrError> {
    request.validate()?;
    EvatrClient::new()?.check_simple(request).await
}

/// Qualified check with a default client.
pub async fn check_qualified(request: &CheckRequest) -> Result<CheckResult, EvatrError> {
    request.validate()?;
    EvatrClient::new()?.check_qualified(request).await
}
