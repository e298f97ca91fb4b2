//! Pipewright - pipeline-configuration assistant.
//!
//! Pipewright inspects a source repository, infers its primary language,
//! and selects matching CI/CD pipeline templates to scaffold. It also
//! provides thin accessors over a remote web-hosting management API:
//! fetching a single resource, listing resources by kind, and retrieving
//! publish profiles.
//!
//! # Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`pipeline`] - Repository classification, template catalog, selection, and rendering
//! - [`resources`] - Web-hosting resource accessors over the management API
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use pipewright::pipeline::render_str;
//!
//! let mut context = HashMap::new();
//! context.insert("webAppName".to_string(), "fabrikam".to_string());
//!
//! let rendered = render_str("appName: '{{webAppName}}'", &context);
//! assert_eq!(rendered, "appName: 'fabrikam'");
//! ```
//!
//! For filesystem-backed selection and HTTP accessors, see the integration tests.

pub mod error;
pub mod pipeline;
pub mod resources;

pub use error::{PipewrightError, Result};
