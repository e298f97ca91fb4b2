//! Web-hosting resource accessors.
//!
//! This module is a thin proxy over a remote management API:
//! - [`transport`] - the wire-level seam ([`ResourceTransport`]) and its
//!   HTTP implementation
//! - [`session`] - bearer-token acquisition seam
//! - [`hosting`] - the [`HostingClient`] built on top of both
//!
//! Every call is stateless and one-shot. Failures from the transport
//! propagate unchanged; there is no retry, caching, or pagination logic
//! above the transport itself.

pub mod hosting;
pub mod session;
pub mod transport;

pub use hosting::{HostingClient, SITES_RESOURCE_TYPE};
pub use session::{StaticTokenProvider, TokenProvider};
pub use transport::{HttpTransport, Resource, ResourceList, ResourceTransport};
