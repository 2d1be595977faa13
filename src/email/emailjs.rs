//! EmailJS REST client.
//!
//! Posts template parameters to `/api/v1.0/email/send`. The service replies
//! `200 OK` on acceptance; anything else is treated as a rejection.

use serde::Serialize;

use super::{EmailError, EmailSender, TemplateParams};
use crate::config::{EmailJsConfig, HttpTimeouts};

const SEND_PATH: &str = "/api/v1.0/email/send";

pub struct EmailJsClient {
    http: reqwest::Client,
    config: EmailJsConfig,
}

impl EmailJsClient {
    /// # Errors
    ///
    /// Returns [`EmailError::HttpClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: EmailJsConfig, timeouts: HttpTimeouts) -> Result<Self, EmailError> {
        let http = reqwest::Client::builder()
            .timeout(timeouts.request)
            .connect_timeout(timeouts.connect)
            .build()
            .map_err(|e| EmailError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    fn send_url(&self) -> String {
        format!("{}{}", self.config.base_url, SEND_PATH)
    }
}

#[async_trait::async_trait]
impl EmailSender for EmailJsClient {
    async fn send(&self, params: &TemplateParams) -> Result<(), EmailError> {
        let body = build_send_request(&self.config, params);
        let response = self
            .http
            .post(self.send_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| EmailError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if status == 200 {
            return Ok(());
        }
        let body = response
            .text()
            .await
            .map_err(|e| EmailError::Request(e.to_string()))?;
        Err(EmailError::Rejected { status, body })
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a TemplateParams,
}

fn build_send_request<'a>(config: &'a EmailJsConfig, params: &'a TemplateParams) -> SendRequest<'a> {
    SendRequest {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        access_token: config.private_key.as_deref(),
        template_params: params,
    }
}

#[cfg(test)]
#[path = "emailjs_test.rs"]
mod tests;
