use gloo_net::http::Request;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

pub const FROM_NAME: &str = "Portfolio Contact Form";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("form relay access key is not configured")]
    MissingAccessKey,

    #[error("form relay request failed: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("could not decode form relay response: {0}")]
    Decode(#[source] gloo_net::Error),

    #[error("form relay rejected the message: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct RelayRequest<'a> {
    pub access_key: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
    pub from_name: &'a str,
}

impl<'a> RelayRequest<'a> {
    pub fn new(access_key: &'a str, contact: &'a ContactMessage) -> Self {
        Self {
            access_key,
            name: &contact.name,
            email: &contact.email,
            message: &contact.message,
            from_name: FROM_NAME,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RelayResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl RelayResponse {
    pub fn into_result(self) -> Result<(), RelayError> {
        if self.success {
            Ok(())
        } else {
            Err(RelayError::Rejected(
                self.message.unwrap_or_else(|| "no reason given".to_string()),
            ))
        }
    }
}

/// Posts the message to the form relay. Non-2xx answers still carry a JSON
/// body, so success is read from the body alone.
pub async fn submit(contact: &ContactMessage) -> Result<(), RelayError> {
    let access_key = config::web3forms_key().ok_or(RelayError::MissingAccessKey)?;

    let response = Request::post(config::relay_endpoint())
        .header("Content-Type", "application/json")
        .json(&RelayRequest::new(access_key, contact))?
        .send()
        .await?;
    if !response.ok() {
        warn!("Form relay answered with status {}", response.status());
    }

    let body = response
        .json::<RelayResponse>()
        .await
        .map_err(RelayError::Decode)?;
    body.into_result()?;
    info!("Contact message delivered");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body() {
        let contact = ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Need a promo video".to_string(),
        };
        let body = serde_json::to_value(RelayRequest::new("key-123", &contact)).unwrap();
        assert_eq!(
            body,
            json!({
                "access_key": "key-123",
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Need a promo video",
                "from_name": "Portfolio Contact Form"
            })
        );
    }

    #[test]
    fn test_success_response() {
        let response: RelayResponse =
            serde_json::from_str(r#"{ "success": true, "message": "Email sent successfully!" }"#)
                .unwrap();
        assert!(response.into_result().is_ok());
    }

    #[test]
    fn test_failure_response() {
        let response: RelayResponse =
            serde_json::from_str(r#"{ "success": false, "message": "Invalid access key" }"#)
                .unwrap();
        match response.into_result() {
            Err(RelayError::Rejected(reason)) => assert_eq!(reason, "Invalid access key"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_response_without_success_flag_is_failure() {
        let response: RelayResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(response.into_result(), Err(RelayError::Rejected(_))));
    }
}
