//! HTTP client for the ADB controller backend
//!
//! Every endpoint is a JSON `POST`. The HTTP status code is not inspected:
//! the backend reports failures in the body, and a body that does not decode
//! is treated as a transport error like any connection failure.

use crate::error::{ApiError, Result};
use crate::types::*;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    pub fn new(base_url: &str, connect_timeout: Duration) -> Result<Self> {
        let mut url = Url::parse(base_url.trim())
            .map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }
        // Endpoints are joined relative to the base, so it must end with a slash
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, name: &str) -> Result<Url> {
        self.base_url
            .join(name)
            .map_err(|e| ApiError::InvalidUrl(format!("{}{name}: {e}", self.base_url)))
    }

    async fn post<B, R>(&self, name: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint(name)?;
        debug!(url = %url, "POST");
        let response = self.http.post(url).json(body).send().await?;
        debug!(status = %response.status(), endpoint = name, "Response received");
        Ok(response.json::<R>().await?)
    }

    pub async fn get_devices(&self, mode: Mode) -> Result<Reply<DeviceListing>> {
        let response: DevicesResponse = self
            .post("get_devices", &ListDevicesRequest { mode })
            .await?;
        Ok(response.into_reply())
    }

    pub async fn connect_wireless(&self, ip_address: &str) -> Result<Reply<String>> {
        let body = WirelessRequest {
            ip_address: ip_address.to_string(),
        };
        let response: CommandResponse = self.post("connect_wireless", &body).await?;
        Ok(response.into_reply())
    }

    /// The backend names the field `ip_address`, but it takes any wireless identifier (`ip:port`).
    pub async fn disconnect_wireless(&self, identifier: &str) -> Result<Reply<String>> {
        let body = WirelessRequest {
            ip_address: identifier.to_string(),
        };
        let response: CommandResponse = self.post("disconnect_wireless", &body).await?;
        Ok(response.into_reply())
    }

    pub async fn enable_tcpip(&self, identifier: &str) -> Result<Reply<String>> {
        let body = IdentifierRequest {
            identifier: identifier.to_string(),
        };
        let response: CommandResponse = self.post("enable_tcpip", &body).await?;
        Ok(response.into_reply())
    }

    pub async fn toggle_display(
        &self,
        identifiers: &[String],
        state: DisplayState,
    ) -> Result<Reply<Vec<ToggleResult>>> {
        let body = ToggleDisplayRequest {
            identifiers: identifiers.to_vec(),
            state,
        };
        let response: ToggleDisplayResponse = self.post("toggle_display", &body).await?;
        Ok(response.into_reply())
    }
}
