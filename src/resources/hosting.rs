//! Accessors for web-hosting resources.
//!
//! [`HostingClient`] narrows the generic [`ResourceTransport`] to the fixed
//! web-site resource type and adds the publish-profile fetch, which is the
//! one call that needs a bearer token.

use reqwest::blocking::Client;
use std::time::Duration;

use super::session::TokenProvider;
use super::transport::{Resource, ResourceTransport};
use crate::error::{PipewrightError, Result};

/// Resource type served by this client.
pub const SITES_RESOURCE_TYPE: &str = "Microsoft.Web/sites";

/// API version for single-resource fetches.
const RESOURCE_API_VERSION: &str = "2019-05-01";

/// API version for the publish-profile endpoint.
const PUBLISH_PROFILE_API_VERSION: &str = "2016-03-01";

/// Client for web-hosting resources.
pub struct HostingClient<T, P> {
    transport: T,
    tokens: P,
    http: Client,
    base_url: String,
}

impl<T: ResourceTransport, P: TokenProvider> HostingClient<T, P> {
    /// Create a client over a transport and token provider.
    ///
    /// `base_url` is the management API host used for the publish-profile
    /// endpoint; resource fetches go through `transport`.
    pub fn new(transport: T, tokens: P, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            tokens,
            http: Client::builder()
                .user_agent("pipewright")
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch a single hosting resource by identifier.
    pub fn get_resource(&self, resource_id: &str) -> Result<Resource> {
        if resource_id.is_empty() {
            return Err(PipewrightError::MissingArgument {
                name: "resource_id",
            });
        }

        self.transport.get_resource(resource_id, RESOURCE_API_VERSION)
    }

    /// List all hosting resources.
    pub fn get_resources(&self, follow_next_link: bool) -> Result<Vec<Resource>> {
        self.transport
            .get_resources(SITES_RESOURCE_TYPE, follow_next_link)
    }

    /// List hosting resources whose `kind` tag equals `kind` exactly.
    ///
    /// An empty result is not an error.
    pub fn get_resources_by_kind(&self, kind: &str) -> Result<Vec<Resource>> {
        let resources = self.transport.get_resources(SITES_RESOURCE_TYPE, true)?;

        let filtered: Vec<Resource> = resources
            .into_iter()
            .filter(|resource| resource.kind.as_deref() == Some(kind))
            .collect();

        tracing::debug!("{} resource(s) with kind '{}'", filtered.len(), kind);
        Ok(filtered)
    }

    /// Fetch the publish profile for a hosting resource as raw text.
    ///
    /// Makes exactly one signed outbound call; no retry.
    pub fn get_publish_profile(&self, resource_id: &str) -> Result<String> {
        if resource_id.is_empty() {
            return Err(PipewrightError::MissingArgument {
                name: "resource_id",
            });
        }

        let token = self.tokens.access_token()?;
        let url = format!(
            "{}/{}/publishxml?api-version={}",
            self.base_url,
            resource_id.trim_start_matches('/'),
            PUBLISH_PROFILE_API_VERSION
        );
        tracing::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .header(reqwest::header::ACCEPT, "text/plain")
            .send()?;

        if !response.status().is_success() {
            return Err(PipewrightError::RemoteStatus {
                status: response.status().as_u16(),
                url,
            });
        }

        Ok(response.text()?)
    }
}
