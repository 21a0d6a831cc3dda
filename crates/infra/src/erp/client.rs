//! HTTP client for the ERP packing list endpoint
//!
//! Submits the re-nested packing lists as a JSON array. Carries a request
//! timeout so a hung endpoint cannot wedge the caller, but deliberately no
//! retry and no idempotency key: a blind retry after an ambiguous timeout
//! could double-submit a packing list, and the ERP offers no dedup contract.

use std::time::Duration;

use async_trait::async_trait;
use packlist_domain::constants::DEFAULT_ERP_TIMEOUT_SECS;
use packlist_domain::{
    ErpAcknowledgement, ErpConfig, ErpSubmissionEntry, PacklistError, Result,
};
use packlist_core::ErpClient;
use tracing::{debug, info};

use crate::errors::InfraError;

/// Configuration for the ERP REST client.
#[derive(Debug, Clone)]
pub struct ErpClientConfig {
    /// Full URL of the packing list submission endpoint.
    pub endpoint_url: String,
    /// Timeout applied to the whole request.
    pub timeout: Duration,
}

impl ErpClientConfig {
    #[must_use]
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            timeout: Duration::from_secs(DEFAULT_ERP_TIMEOUT_SECS),
        }
    }
}

impl From<&ErpConfig> for ErpClientConfig {
    fn from(config: &ErpConfig) -> Self {
        Self {
            endpoint_url: config.endpoint_url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

/// Reqwest-backed implementation of the [`ErpClient`] port.
pub struct ErpRestClient {
    client: reqwest::Client,
    config: ErpClientConfig,
}

impl ErpRestClient {
    /// Build the client.
    ///
    /// # Errors
    /// Returns `PacklistError::Config` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: ErpClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .no_proxy()
            .build()
            .map_err(|err| PacklistError::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl ErpClient for ErpRestClient {
    async fn submit(&self, entries: &[ErpSubmissionEntry]) -> Result<ErpAcknowledgement> {
        debug!(
            url = %self.config.endpoint_url,
            entries = entries.len(),
            "posting packing lists to ERP"
        );

        let response = self
            .client
            .post(&self.config.endpoint_url)
            .json(entries)
            .send()
            .await
            .map_err(|err| PacklistError::from(InfraError::from(err)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = if body.trim().is_empty() {
                format!("HTTP {status}")
            } else {
                format!("HTTP {status}: {}", body.trim())
            };
            return Err(PacklistError::Network(format!("ERP rejected submission: {detail}")));
        }

        let acknowledgement: ErpAcknowledgement = response
            .json()
            .await
            .map_err(|err| PacklistError::from(InfraError::from(err)))?;

        info!(
            buyer_po = acknowledgement.buyer_po.as_deref().unwrap_or("-"),
            warnings = acknowledgement.warnings.len(),
            "ERP accepted submission"
        );
        Ok(acknowledgement)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn entry(buyer_po: &str, pwnid: i64) -> ErpSubmissionEntry {
        ErpSubmissionEntry {
            buyer_name: "Acme".into(),
            factory_name: "Textiles".into(),
            user_name: "ops".into(),
            buyer_erp_code: "AC".into(),
            factory_erp_code: "TX".into(),
            buyer_po_number: buyer_po.to_string(),
            po_number_edi: format!("EDI-{buyer_po}"),
            pwnid: Some(pwnid),
            packs: vec![],
        }
    }

    async fn client_for(server: &MockServer) -> ErpRestClient {
        ErpRestClient::new(ErpClientConfig {
            endpoint_url: format!("{}/packing-lists", server.uri()),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn posts_entries_and_parses_acknowledgement() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/packing-lists"))
            .and(body_partial_json(json!([{ "buyerPONumber": "PO-1", "PWNID": 42 }])))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "packingListId": 991,
                "packingListNumber": "PL-2024-12",
                "buyerPO": "PO-1",
                "warnings": ["pack 2 heavier than declared"]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let ack = client.submit(&[entry("PO-1", 42)]).await.unwrap();

        assert_eq!(ack.buyer_po.as_deref(), Some("PO-1"));
        assert_eq!(ack.warnings, vec!["pack 2 heavier than declared".to_string()]);
        assert_eq!(ack.packing_list_number, Some(json!("PL-2024-12")));
    }

    #[tokio::test]
    async fn non_2xx_surfaces_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(422).set_body_string("PWNID 42 already assigned"),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.submit(&[entry("PO-1", 42)]).await.unwrap_err();

        match err {
            PacklistError::Network(msg) => {
                assert!(msg.contains("422"));
                assert!(msg.contains("already assigned"));
            }
            other => panic!("expected network error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn empty_error_body_falls_back_to_status_line() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.submit(&[entry("PO-1", 1)]).await.unwrap_err();
        assert!(err.to_string().contains("HTTP 503"));
    }

    #[tokio::test]
    async fn connection_failure_maps_to_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener); // release the port so requests fail with ECONNREFUSED

        let client = ErpRestClient::new(ErpClientConfig {
            endpoint_url: format!("http://{addr}/packing-lists"),
            timeout: Duration::from_secs(2),
        })
        .unwrap();

        let err = client.submit(&[entry("PO-1", 1)]).await.unwrap_err();
        assert!(matches!(err, PacklistError::Network(_)));
    }
}
