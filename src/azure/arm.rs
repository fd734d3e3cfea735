//! Azure Resource Manager REST transport.
//!
//! Builds management-endpoint URLs, attaches the bearer token and parses JSON
//! responses. Errors are not retried; any non-success status aborts the run.

use crate::config;
use colored::Colorize;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;

/// Client handle for the management endpoint, shared by the resource group
/// and Traffic Manager clients. Immutable for the duration of a run.
pub struct ArmClient {
    http: reqwest::Client,
    bearer_token: String,
    subscription_id: String,
}

impl ArmClient {
    pub fn new(http: reqwest::Client, bearer_token: String, subscription_id: String) -> Self {
        ArmClient {
            http,
            bearer_token,
            subscription_id,
        }
    }

    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    /// GET a resource and parse the JSON response.
    pub async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        api_version: &str,
    ) -> Result<R, Box<dyn Error>> {
        let body = self.send(Method::GET, path, api_version, None).await?;
        parse_json(&body)
    }

    /// PUT a resource definition and parse the JSON response.
    pub async fn put<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        api_version: &str,
        body: &B,
    ) -> Result<R, Box<dyn Error>> {
        let payload =
            serde_json::to_value(body).map_err(|e| format!("Error serializing request body: {e}"))?;
        let body = self
            .send(Method::PUT, path, api_version, Some(payload))
            .await?;
        parse_json(&body)
    }

    /// POST with an empty body (provider registration) and parse the response.
    pub async fn post<R: DeserializeOwned>(
        &self,
        path: &str,
        api_version: &str,
    ) -> Result<R, Box<dyn Error>> {
        let body = self.send(Method::POST, path, api_version, None).await?;
        parse_json(&body)
    }

    /// DELETE a resource. ARM deletes are asynchronous; 200, 202 and 204 all
    /// count as accepted and the operation is not polled to completion.
    pub async fn delete(&self, path: &str, api_version: &str) -> Result<(), Box<dyn Error>> {
        self.send(Method::DELETE, path, api_version, None).await?;
        Ok(())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        api_version: &str,
        body: Option<serde_json::Value>,
    ) -> Result<String, Box<dyn Error>> {
        let url = format!(
            "{endpoint}{path}?api-version={api_version}",
            endpoint = config::MANAGEMENT_ENDPOINT
        );
        log::debug!("{method} {url}", url = url.on_blue());

        let mut request = self
            .http
            .request(method.clone(), &url)
            .bearer_auth(&self.bearer_token);
        if let Some(json) = body {
            request = request.json(&json);
        }

        let response = request.send().await.map_err(|e| {
            log::error!("Request execution failed: {e}");
            format!("Failed to send {method} {path}: {e}")
        })?;

        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            log::debug!(
                "Success {method} {path} status={status} body.len()={}",
                text.len()
            );
        } else {
            log::trace!(
                "status={status}\n┎######\nbody=\n{body}\n┖######",
                body = text.red()
            );
            log::warn!(
                "{failed} {method} {path} status={status}",
                failed = "failed".on_red()
            );
            return Err(format!("ARM request failed: {method} {path}: {status}: {text}").into());
        }

        Ok(text)
    }
}

/// Parse an ARM JSON body, reporting the failing path on schema mismatch.
fn parse_json<R: DeserializeOwned>(body: &str) -> Result<R, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::error!("BODY START:\n\n{body}\n\nBODY END\n");
        format!("Error parsing ARM response: path={} error={}", e.path(), e).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Sample {
        name: String,
    }

    #[test]
    fn test_parse_json() {
        let parsed: Sample = parse_json(r#"{"name":"demo"}"#).expect("Error parsing JSON");
        assert_eq!(parsed.name, "demo");
    }

    #[test]
    fn test_parse_json_reports_path() {
        let err = parse_json::<Sample>(r#"{"name":42}"#).expect_err("Expected parse error");
        assert!(err.to_string().contains("path=name"), "got: {err}");
    }
}
