//! Placeholder substitution for pipeline templates.
//!
//! Templates use mustache-style `{{key}}` placeholders. Only variable
//! substitution is supported; there are no conditionals, loops, or
//! default values. Missing keys render as the empty string.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use pipewright::pipeline::render_str;
//!
//! let mut context = HashMap::new();
//! context.insert("branch".to_string(), "main".to_string());
//! assert_eq!(render_str("trigger: {{branch}}", &context), "trigger: main");
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::catalog;
use crate::error::Result;

/// A segment of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text
    Literal(String),
    /// Placeholder reference: {{key}}
    Placeholder(String),
}

/// Parse a template into literal and placeholder segments.
///
/// An opening `{{` without a closing `}}` is kept as literal text.
/// Whitespace inside a placeholder is trimmed, so `{{ key }}` and
/// `{{key}}` are equivalent.
pub fn parse_placeholders(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = input;

    while let Some(start) = rest.find("{{") {
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            break;
        };

        if start > 0 {
            segments.push(Segment::Literal(rest[..start].to_string()));
        }
        segments.push(Segment::Placeholder(after_open[..end].trim().to_string()));
        rest = &after_open[end + 2..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Literal(rest.to_string()));
    }

    segments
}

/// Render a template string against a key-value context.
pub fn render_str(template: &str, context: &HashMap<String, String>) -> String {
    parse_placeholders(template)
        .into_iter()
        .map(|segment| match segment {
            Segment::Literal(text) => text,
            Segment::Placeholder(key) => context.get(&key).cloned().unwrap_or_default(),
        })
        .collect()
}

/// Render a template file read as UTF-8 text.
///
/// Fails with an IO error when the file cannot be read.
pub fn render_file(template_path: &Path, context: &HashMap<String, String>) -> Result<String> {
    let raw = fs::read_to_string(template_path)?;
    Ok(render_str(&raw, context))
}

/// Render an embedded template by its catalog path.
pub fn render_builtin(catalog_path: &str, context: &HashMap<String, String>) -> Result<String> {
    let raw = catalog::builtin_content(catalog_path).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("built-in template not found: {catalog_path}"),
        )
    })?;

    Ok(render_str(raw, context))
}
