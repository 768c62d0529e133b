//! Contact relay: delivers contact-form submissions to a third-party email
//! service.
//!
//! `EmailJsRelay` speaks the EmailJS REST API. `DryRunRelay` only logs, for
//! running without network access.

use crate::config::RelayConfig;
use crate::core::contact::ContactSubmission;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Every way a submission can fail; the form treats them all the same
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("relay rejected the submission with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("relay is not configured: '{0}' is empty")]
    NotConfigured(&'static str),
}

/// Outbound delivery of a contact submission
#[async_trait]
pub trait ContactRelay: Send + Sync {
    /// Deliver once. No retries; the caller surfaces the result.
    async fn send(&self, submission: &ContactSubmission) -> Result<(), RelayError>;
}

#[derive(Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// Names must match the variables used by the EmailJS template
#[derive(Serialize)]
struct TemplateParams<'a> {
    user_name: &'a str,
    user_email: &'a str,
    subject: &'a str,
    message: &'a str,
}

pub struct EmailJsRelay {
    config: RelayConfig,
    http: Client,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, http })
    }
}

#[async_trait]
impl ContactRelay for EmailJsRelay {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), RelayError> {
        if let Some(field) = self.config.missing_field() {
            return Err(RelayError::NotConfigured(field));
        }

        let request = EmailJsRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: TemplateParams {
                user_name: &submission.name,
                user_email: &submission.email,
                subject: &submission.subject,
                message: &submission.message,
            },
        };

        debug!(endpoint = %self.config.endpoint, "Posting contact submission");
        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!(status = status.as_u16(), "Contact submission delivered");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(RelayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

/// Logs submissions and reports success without sending anything
pub struct DryRunRelay;

#[async_trait]
impl ContactRelay for DryRunRelay {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), RelayError> {
        info!(
            name = %submission.name,
            email = %submission.email,
            subject = %submission.subject,
            "Dry run: contact submission not sent"
        );
        Ok(())
    }
}

/// Pick the relay for this run
pub fn build_relay(config: &RelayConfig, dry_run: bool) -> Result<Arc<dyn ContactRelay>> {
    if dry_run {
        info!("Contact relay running in dry-run mode");
        return Ok(Arc::new(DryRunRelay));
    }
    Ok(Arc::new(EmailJsRelay::new(config.clone())?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Project Inquiry".to_string(),
            message: "Hello there".to_string(),
        }
    }

    fn relay_at(base: &str, timeout_secs: u64) -> EmailJsRelay {
        EmailJsRelay::new(RelayConfig {
            endpoint: format!("{}/api/v1.0/email/send", base),
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            public_key: "public_test".to_string(),
            timeout_secs,
        })
        .unwrap()
    }

    fn relay_for(server: &MockServer) -> EmailJsRelay {
        relay_at(&server.uri(), 5)
    }

    #[tokio::test]
    async fn test_posts_emailjs_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1.0/email/send"))
            .and(body_json(json!({
                "service_id": "service_test",
                "template_id": "template_test",
                "user_id": "public_test",
                "template_params": {
                    "user_name": "Jane Doe",
                    "user_email": "jane@example.com",
                    "subject": "Project Inquiry",
                    "message": "Hello there"
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .expect(1)
            .mount(&server)
            .await;

        relay_for(&server).send(&submission()).await.unwrap();
    }

    #[tokio::test]
    async fn test_non_success_status_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("The user ID is invalid"))
            .mount(&server)
            .await;

        let err = relay_for(&server).send(&submission()).await.unwrap_err();
        match err {
            RelayError::Rejected { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "The user ID is invalid");
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = relay_for(&server).send(&submission()).await.unwrap_err();
        assert!(matches!(err, RelayError::Rejected { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_unreachable_relay_is_transport_error() {
        // Reserve a free port, then close it so nothing is listening
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let relay = relay_at(&format!("http://{}", addr), 5);
        let err = relay.send(&submission()).await.unwrap_err();
        assert!(matches!(err, RelayError::Transport(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_slow_relay_times_out_as_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let relay = relay_at(&server.uri(), 1);
        let err = relay.send(&submission()).await.unwrap_err();
        match err {
            RelayError::Transport(e) => assert!(e.is_timeout(), "got {:?}", e),
            other => panic!("expected Transport, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unconfigured_relay_fails_without_network() {
        let relay = EmailJsRelay::new(RelayConfig::default()).unwrap();
        let err = relay.send(&submission()).await.unwrap_err();
        assert!(matches!(err, RelayError::NotConfigured("service_id")));
    }

    #[tokio::test]
    async fn test_dry_run_succeeds() {
        let relay = build_relay(&RelayConfig::default(), true).unwrap();
        assert!(relay.send(&submission()).await.is_ok());
    }
}
