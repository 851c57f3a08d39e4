use thiserror::Error;

use super::form::SubmissionPayload;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("no submission endpoint configured")]
    NotConfigured,
    #[error("couldn't encode submission: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("network request failed: {0}")]
    Network(String),
    #[error("submissions can only be sent from the browser")]
    Unavailable,
}

/// Delivers a submission somewhere. Completing without an error is the only
/// success signal; implementations are not expected to confirm delivery.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, payload: &SubmissionPayload) -> Result<(), TransportError>;
}

/// Posts submissions to the spreadsheet ingestion endpoint.
///
/// The endpoint lives on another origin and doesn't send CORS headers, so the
/// request goes out in `no-cors` mode and the response is opaque: status and
/// body are never inspected.
#[derive(Debug, Clone, Copy)]
pub struct SheetTransport {
    endpoint: &'static str,
}

impl SheetTransport {
    pub const fn new(endpoint: &'static str) -> Self {
        Self { endpoint }
    }

    fn encode(&self, payload: &SubmissionPayload) -> Result<String, TransportError> {
        if self.endpoint.trim().is_empty() {
            return Err(TransportError::NotConfigured);
        }
        Ok(serde_json::to_string(payload)?)
    }
}

impl Transport for SheetTransport {
    #[cfg(feature = "hydrate")]
    async fn send(&self, payload: &SubmissionPayload) -> Result<(), TransportError> {
        use gloo_net::http::Request;
        use web_sys::RequestMode;

        let body = self.encode(payload)?;
        Request::post(self.endpoint)
            .mode(RequestMode::NoCors)
            .body(body)
            .map_err(|e| TransportError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(())
    }

    #[cfg(not(feature = "hydrate"))]
    async fn send(&self, payload: &SubmissionPayload) -> Result<(), TransportError> {
        self.encode(payload)?;
        Err(TransportError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::form::FormData;
    use chrono::Utc;

    fn payload() -> SubmissionPayload {
        SubmissionPayload::new(
            FormData {
                name: "Jo".to_string(),
                email: "jo@x.com".to_string(),
                message: "Hi".to_string(),
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_empty_endpoint_is_not_configured() {
        let transport = SheetTransport::new("  ");
        assert!(matches!(
            transport.encode(&payload()),
            Err(TransportError::NotConfigured)
        ));
    }

    #[test]
    fn test_encode_body() {
        let transport = SheetTransport::new("https://script.example.com/exec");
        let body = transport.encode(&payload()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["name"], "Jo");
        assert_eq!(json["email"], "jo@x.com");
        assert_eq!(json["message"], "Hi");
        assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[cfg(not(feature = "hydrate"))]
    #[tokio::test]
    async fn test_server_build_has_no_transport() {
        let transport = SheetTransport::new("https://script.example.com/exec");
        let res = transport.send(&payload()).await;
        assert!(matches!(res, Err(TransportError::Unavailable)));
    }
}
