//! Transport over the remote management API.
//!
//! [`ResourceTransport`] is the seam between the hosting accessors and the
//! wire: fetch one resource by identifier, or list resources of a type.
//! [`HttpTransport`] implements it with a blocking reqwest client against
//! a configurable base URL.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{PipewrightError, Result};

/// API version used for resource list requests.
const LIST_API_VERSION: &str = "2019-05-01";

/// An opaque remote resource record.
///
/// Only `id`, `type`, and `kind` are interpreted by this crate; everything
/// else passes through untouched in [`Resource::extra`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Fully qualified resource identifier.
    pub id: String,

    /// Resource type, e.g. `Microsoft.Web/sites`.
    #[serde(rename = "type")]
    pub resource_type: String,

    /// Short resource name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Kind tag, e.g. `app` or `app,linux`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Remaining fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// List envelope returned by the management API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceList {
    /// Resources on this page.
    #[serde(default)]
    pub value: Vec<Resource>,

    /// Absolute URL of the next page, when the listing is paginated.
    #[serde(rename = "nextLink", default, skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
}

/// Wire-level access to the remote management API.
pub trait ResourceTransport {
    /// Fetch a single resource by its fully qualified identifier.
    fn get_resource(&self, resource_id: &str, api_version: &str) -> Result<Resource>;

    /// List all resources of a type.
    ///
    /// When `follow_next_link` is true, pagination continuation is handled
    /// here; callers never see partial pages.
    fn get_resources(&self, resource_type: &str, follow_next_link: bool) -> Result<Vec<Resource>>;
}

/// HTTP implementation of [`ResourceTransport`].
pub struct HttpTransport {
    client: Client,
    base_url: String,
    subscription_id: String,
    timeout: Duration,
}

impl HttpTransport {
    /// Default management API host.
    pub const DEFAULT_BASE_URL: &'static str = "https://management.azure.com";

    /// Create a transport with the default 30-second timeout.
    pub fn new(base_url: impl Into<String>, subscription_id: impl Into<String>) -> Self {
        Self::with_timeout(base_url, subscription_id, Duration::from_secs(30))
    }

    /// Create a transport with a custom timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        subscription_id: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client: Client::builder()
                .user_agent("pipewright")
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            subscription_id: subscription_id.into(),
            timeout,
        }
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get the base URL this transport talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn fetch_page(&self, url: &str) -> Result<ResourceList> {
        let response = self.client.get(url).send()?;

        if !response.status().is_success() {
            return Err(PipewrightError::RemoteStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.json()?)
    }
}

impl ResourceTransport for HttpTransport {
    fn get_resource(&self, resource_id: &str, api_version: &str) -> Result<Resource> {
        let url = format!(
            "{}/{}?api-version={}",
            self.base_url,
            resource_id.trim_start_matches('/'),
            api_version
        );
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send()?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(PipewrightError::ResourceNotFound {
                resource_id: resource_id.to_string(),
            });
        }

        if !response.status().is_success() {
            return Err(PipewrightError::RemoteStatus {
                status: response.status().as_u16(),
                url,
            });
        }

        Ok(response.json()?)
    }

    fn get_resources(&self, resource_type: &str, follow_next_link: bool) -> Result<Vec<Resource>> {
        let url = format!(
            "{}/subscriptions/{}/resources?$filter=resourceType%20eq%20'{}'&api-version={}",
            self.base_url, self.subscription_id, resource_type, LIST_API_VERSION
        );
        tracing::debug!("GET {}", url);

        let mut resources = Vec::new();
        let mut page = self.fetch_page(&url)?;

        loop {
            resources.extend(page.value);

            match page.next_link.take() {
                Some(link) if follow_next_link => {
                    tracing::debug!("GET {} (continuation)", link);
                    page = self.fetch_page(&link)?;
                }
                _ => break,
            }
        }

        Ok(resources)
    }
}
